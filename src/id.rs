//! Identifier Generator
//!
//! Ids are `id<millis>-<seq><salt>`. Collisions are not cryptographically
//! ruled out, only made very unlikely.

use std::sync::atomic::{AtomicU32, Ordering};

static SEQUENCE: AtomicU32 = AtomicU32::new(0);

/// Generate a fresh entity id
pub fn generate_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("id{}-{:x}{:08x}", millis, seq, random_salt())
}

fn random_salt() -> u32 {
    let mut bytes = [0u8; 4];
    match getrandom::getrandom(&mut bytes) {
        Ok(()) => u32::from_le_bytes(bytes),
        Err(e) => {
            log::warn!("[ID] Random source unavailable, using zero salt: {}", e);
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique_in_session() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_id_shape() {
        let id = generate_id();
        assert!(id.starts_with("id"));
        assert!(id.contains('-'));
    }
}
