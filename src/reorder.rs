//! Reorder Engine
//!
//! Drag-and-drop places the dragged entity immediately after the row it
//! was dropped on, within the same sibling list.

use crate::models::Entity;

/// Result of a `move_after` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// List order changed
    Moved,
    /// Moved entity already sits right after the target
    AlreadyInPlace,
    /// Entity dropped on itself
    SelfMove,
    /// Either id is not in the list
    NotFound,
}

impl MoveOutcome {
    pub fn changed(self) -> bool {
        self == MoveOutcome::Moved
    }
}

/// Move `moved_id` so it lands immediately after `target_id`
pub fn move_after<T: Entity>(list: &mut Vec<T>, moved_id: &str, target_id: &str) -> MoveOutcome {
    if moved_id == target_id {
        return MoveOutcome::SelfMove;
    }

    let from = list.iter().position(|e| e.id() == moved_id);
    let to = list.iter().position(|e| e.id() == target_id);
    let (Some(from), Some(to)) = (from, to) else {
        return MoveOutcome::NotFound;
    };

    if from == to + 1 {
        return MoveOutcome::AlreadyInPlace;
    }

    // Removing an element that sits after the target leaves the target in
    // place, so the slot after it is `to + 1`. Removing one before the
    // target shifts the target down to `to - 1`, so `to` is its successor.
    let offset = if from > to { 1 } else { 0 };
    let entity = list.remove(from);
    list.insert(to + offset, entity);
    MoveOutcome::Moved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;

    fn make_list(ids: &[&str]) -> Vec<Item> {
        ids.iter().map(|id| Item::new(id.to_string(), id.to_lowercase())).collect()
    }

    fn ids(list: &[Item]) -> Vec<&str> {
        list.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_move_forward() {
        let mut list = make_list(&["A", "B", "C", "D"]);
        assert_eq!(move_after(&mut list, "A", "C"), MoveOutcome::Moved);
        assert_eq!(ids(&list), ["B", "C", "A", "D"]);
    }

    #[test]
    fn test_move_backward() {
        let mut list = make_list(&["A", "B", "C", "D"]);
        assert_eq!(move_after(&mut list, "D", "A"), MoveOutcome::Moved);
        assert_eq!(ids(&list), ["A", "D", "B", "C"]);
    }

    #[test]
    fn test_move_to_end() {
        let mut list = make_list(&["A", "B", "C"]);
        assert_eq!(move_after(&mut list, "A", "C"), MoveOutcome::Moved);
        assert_eq!(ids(&list), ["B", "C", "A"]);
    }

    #[test]
    fn test_second_move_is_noop() {
        let mut list = make_list(&["A", "B", "C", "D"]);
        move_after(&mut list, "A", "C");
        let after_first = ids(&list).join("");

        assert_eq!(move_after(&mut list, "A", "C"), MoveOutcome::AlreadyInPlace);
        assert_eq!(ids(&list).join(""), after_first);
    }

    #[test]
    fn test_self_move_rejected() {
        let mut list = make_list(&["A", "B"]);
        assert_eq!(move_after(&mut list, "A", "A"), MoveOutcome::SelfMove);
        assert_eq!(ids(&list), ["A", "B"]);
    }

    #[test]
    fn test_unknown_ids_rejected() {
        let mut list = make_list(&["A", "B"]);
        assert_eq!(move_after(&mut list, "Z", "A"), MoveOutcome::NotFound);
        assert_eq!(move_after(&mut list, "A", "Z"), MoveOutcome::NotFound);
        assert_eq!(ids(&list), ["A", "B"]);
    }

    #[test]
    fn test_adjacent_swap_up() {
        // B sits right after A; moving A after B swaps them
        let mut list = make_list(&["A", "B", "C"]);
        assert!(move_after(&mut list, "A", "B").changed());
        assert_eq!(ids(&list), ["B", "A", "C"]);
    }
}
