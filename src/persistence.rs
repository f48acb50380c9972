//! Persistence Gateway
//!
//! The whole board is written to one key-value slot as JSON after every
//! mutation, and read back once at startup. Reads never fail the caller:
//! a missing or unreadable slot yields an empty board.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::{StoreError, StoreResult};
use crate::models::Group;

/// Snapshot schema written by this build
pub const SNAPSHOT_VERSION: u32 = 2;

/// Key-value medium the snapshot lives in
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> StoreResult<web_sys::Storage> {
        let window = web_sys::window().ok_or(StoreError::Storage("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Storage(format!("{:?}", e)))?
            .ok_or(StoreError::Storage("localStorage unavailable".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StoreError::Storage(format!("{:?}", e)))
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Storage(format!("{:?}", e)))
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StoreError::Storage(format!("{:?}", e)))
    }
}

/// In-process medium for tests and hosts without a browser
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.slots.remove(key);
        Ok(())
    }
}

// ========================
// Wire shapes
// ========================

#[derive(Serialize)]
struct SnapshotOut<'a> {
    version: u32,
    catalog: &'a [Group],
    /// `-1` when nothing is selected
    #[serde(rename = "currentIndex")]
    current_index: i64,
}

#[derive(Deserialize)]
struct SnapshotIn {
    /// Snapshots from before the version field are version 1
    #[serde(default = "first_version")]
    version: u32,
    catalog: Vec<Group>,
    #[serde(rename = "currentIndex", default = "no_selection")]
    current_index: i64,
}

/// Shape written by the first single-page release
#[derive(Deserialize)]
struct LegacySnapshot {
    #[serde(default)]
    tasks: Vec<Group>,
    #[serde(rename = "currentTask", default)]
    current_task: Option<LegacyTaskRef>,
}

#[derive(Deserialize)]
struct LegacyTaskRef {
    id: String,
}

fn first_version() -> u32 {
    1
}

fn no_selection() -> i64 {
    -1
}

/// Serialize the board into its snapshot string
pub fn encode_snapshot(board: &Board) -> StoreResult<String> {
    let snapshot = SnapshotOut {
        version: SNAPSHOT_VERSION,
        catalog: board.groups(),
        current_index: board.selection().index().map_or(-1, |i| i as i64),
    };
    serde_json::to_string(&snapshot).map_err(|e| StoreError::Storage(e.to_string()))
}

/// Parse a snapshot string, accepting the legacy `tasks`/`currentTask` shape
pub fn decode_snapshot(raw: &str) -> StoreResult<Board> {
    let corrupt = |e: serde_json::Error| StoreError::PersistenceCorrupt(e.to_string());
    let value: serde_json::Value = serde_json::from_str(raw).map_err(corrupt)?;

    if value.get("catalog").is_some() {
        let snapshot: SnapshotIn = serde_json::from_value(value).map_err(corrupt)?;
        if snapshot.version > SNAPSHOT_VERSION {
            return Err(StoreError::PersistenceCorrupt(format!(
                "snapshot version {} is newer than supported {}",
                snapshot.version, SNAPSHOT_VERSION
            )));
        }
        let index = usize::try_from(snapshot.current_index).ok();
        Ok(Board::from_parts(snapshot.catalog, index))
    } else if value.get("tasks").is_some() {
        let legacy: LegacySnapshot = serde_json::from_value(value).map_err(corrupt)?;
        let index = legacy
            .current_task
            .and_then(|t| legacy.tasks.iter().position(|g| g.id == t.id));
        log::info!("[STORE] Migrated legacy snapshot with {} tasks", legacy.tasks.len());
        Ok(Board::from_parts(legacy.tasks, index))
    } else {
        Err(StoreError::PersistenceCorrupt("unrecognized snapshot shape".to_string()))
    }
}

/// Reads and writes the board snapshot in one named slot
pub struct PersistenceGateway<S: KeyValueStore> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> PersistenceGateway<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self { storage, key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Overwrite the slot with the current board; failures are only logged
    pub fn save(&mut self, board: &Board) {
        if let Err(e) = self.try_save(board) {
            log::error!("[STORE] Failed to save snapshot to {}: {}", self.key, e);
        }
    }

    fn try_save(&mut self, board: &Board) -> StoreResult<()> {
        let encoded = encode_snapshot(board)?;
        self.storage.set(&self.key, &encoded)
    }

    /// Load the board; missing or malformed slots give an empty board
    pub fn load(&self) -> Board {
        match self.try_load() {
            Ok(board) => board,
            Err(e) => {
                log::error!("[STORE] Failed to load snapshot from {}: {}", self.key, e);
                Board::new()
            }
        }
    }

    fn try_load(&self) -> StoreResult<Board> {
        match self.storage.get(&self.key)? {
            Some(raw) => decode_snapshot(&raw),
            None => {
                log::info!("[STORE] No snapshot under {}, starting empty", self.key);
                Ok(Board::new())
            }
        }
    }

    pub fn clear(&mut self) {
        if let Err(e) = self.storage.remove(&self.key) {
            log::error!("[STORE] Failed to clear {}: {}", self.key, e);
        }
    }
}
