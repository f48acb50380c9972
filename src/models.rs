//! Frontend Models
//!
//! Tasks (groups) own an ordered list of subtasks (items).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Anything stored in an ordered sibling list, addressed by a stable id
pub trait Entity {
    /// Which sibling list this entity lives in
    const KIND: EntityKind;

    fn id(&self) -> &str;
}

/// Entity kind, also the `type` field of a drag payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Group,
    Item,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Group => "group",
            EntityKind::Item => "item",
        }
    }
}

/// A subtask
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub title: String,
    /// Completion status (`status` in older snapshots)
    #[serde(alias = "status")]
    pub done: bool,
}

/// A task with its ordered subtasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub title: String,
    /// Display order; `subtasks` in older snapshots
    #[serde(default, alias = "subtasks")]
    pub children: Vec<Item>,
}

impl Item {
    pub fn new(id: String, title: String) -> Self {
        Self { id, title, done: false }
    }
}

impl Group {
    pub fn new(id: String, title: String) -> Self {
        Self { id, title, children: Vec::new() }
    }

    pub fn child(&self, item_id: &str) -> Option<&Item> {
        self.children.iter().find(|i| i.id == item_id)
    }

    pub fn child_mut(&mut self, item_id: &str) -> Option<&mut Item> {
        self.children.iter_mut().find(|i| i.id == item_id)
    }

    pub fn statistics(&self) -> Statistics {
        Statistics {
            total: self.children.len(),
            done: self.children.iter().filter(|i| i.done).count(),
        }
    }
}

impl Entity for Group {
    const KIND: EntityKind = EntityKind::Group;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Item {
    const KIND: EntityKind = EntityKind::Item;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Subtask counts of a task
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    pub total: usize,
    pub done: usize,
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Subtasks: {}. Done: {}.", self.total, self.done)
    }
}

/// Drag payload carried through the native `DataTransfer`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragPayload {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EntityKind,
}

impl DragPayload {
    pub fn new(id: impl Into<String>, kind: EntityKind) -> Self {
        Self { id: id.into(), kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: &str, done: bool) -> Item {
        Item { id: id.to_string(), title: format!("Item {}", id), done }
    }

    #[test]
    fn test_statistics() {
        let mut group = Group::new("g".to_string(), "Group".to_string());
        group.children = vec![make_item("a", true), make_item("b", true), make_item("c", false)];

        let stats = group.statistics();
        assert_eq!(stats, Statistics { total: 3, done: 2 });
        assert_eq!(stats.to_string(), "Subtasks: 3. Done: 2.");
    }

    #[test]
    fn test_statistics_empty_group() {
        let group = Group::new("g".to_string(), "Group".to_string());
        assert_eq!(group.statistics(), Statistics::default());
    }

    #[test]
    fn test_drag_payload_kind_serialization() {
        let json = serde_json::to_string(&DragPayload::new("id1", EntityKind::Item)).unwrap();
        assert_eq!(json, r#"{"id":"id1","type":"item"}"#);

        let bad: Result<DragPayload, _> = serde_json::from_str(r#"{"id":"id1","type":"task"}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_legacy_field_names() {
        let group: Group = serde_json::from_str(
            r#"{"id":"g","title":"Old","subtasks":[{"id":"s","title":"Sub","status":true}]}"#,
        )
        .unwrap();
        assert_eq!(group.children.len(), 1);
        assert!(group.children[0].done);
    }
}
