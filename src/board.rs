//! Task Board
//!
//! The ordered catalog of tasks plus the selection, as one owned value.
//! Catalog insertions, removals and reorders all run through
//! [`Selection::preserve`].

use crate::error::{StoreError, StoreResult};
use crate::id::generate_id;
use crate::models::{Entity, Group, Item};
use crate::reorder::{move_after, MoveOutcome};
use crate::selection::Selection;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    catalog: Vec<Group>,
    selection: Selection,
}

fn non_blank(title: &str) -> StoreResult<&str> {
    if title.trim().is_empty() {
        Err(StoreError::EmptyInput)
    } else {
        Ok(title)
    }
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from persisted parts; duplicate ids are dropped (first wins)
    pub fn from_parts(catalog: Vec<Group>, selected_index: Option<usize>) -> Self {
        let selected_id = selected_index
            .and_then(|i| catalog.get(i))
            .map(|g| g.id.clone());

        let mut catalog = dedup_by_id(catalog);
        for group in &mut catalog {
            let children = std::mem::take(&mut group.children);
            group.children = dedup_by_id(children);
        }

        let mut selection = Selection::none();
        if let Some(id) = selected_id {
            selection.select(&catalog, &id);
        }
        Self { catalog, selection }
    }

    // ========================
    // Read accessors
    // ========================

    pub fn groups(&self) -> &[Group] {
        &self.catalog
    }

    pub fn group(&self, id: &str) -> Option<&Group> {
        self.catalog.iter().find(|g| g.id == id)
    }

    pub fn children(&self, group_id: &str) -> &[Item] {
        self.group(group_id).map(|g| g.children.as_slice()).unwrap_or_default()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected(&self) -> Option<&Group> {
        self.selection.resolve(&self.catalog)
    }

    fn group_mut(&mut self, id: &str) -> Option<&mut Group> {
        self.catalog.iter_mut().find(|g| g.id == id)
    }

    // ========================
    // Selection
    // ========================

    /// Select a group by id; unknown ids clear the selection
    pub fn select(&mut self, id: &str) -> StoreResult<()> {
        self.selection.select(&self.catalog, id);
        match self.selection.index() {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    // ========================
    // Groups
    // ========================

    pub fn add_group(&mut self, title: &str) -> StoreResult<Group> {
        let title = non_blank(title)?;
        let group = Group::new(generate_id(), title.to_string());
        let created = group.clone();
        self.selection.preserve(&mut self.catalog, |c| c.insert(0, group));
        log::debug!("[BOARD] Added group {}", created.id);
        Ok(created)
    }

    /// Remove a group and its children; `None` if absent
    pub fn remove_group(&mut self, id: &str) -> Option<Group> {
        let index = self.catalog.iter().position(|g| g.id == id)?;
        let was_selected = self.selection.index() == Some(index);

        let removed = self.selection.preserve(&mut self.catalog, |c| c.remove(index));
        if was_selected {
            self.selection.clear();
        }
        log::debug!("[BOARD] Removed group {} ({} children)", removed.id, removed.children.len());
        Some(removed)
    }

    pub fn rename_group(&mut self, id: &str, title: &str) -> StoreResult<()> {
        let title = non_blank(title)?;
        let group = self
            .group_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        group.title = title.to_string();
        Ok(())
    }

    /// Place group `moved_id` right after `target_id` in the catalog
    pub fn move_group(&mut self, moved_id: &str, target_id: &str) -> MoveOutcome {
        self.selection
            .preserve(&mut self.catalog, |c| move_after(c, moved_id, target_id))
    }

    // ========================
    // Items
    // ========================

    /// Prepend an item to `group_id`; a missing group means nothing to add to
    pub fn add_item(&mut self, group_id: &str, title: &str) -> StoreResult<Item> {
        let title = non_blank(title)?;
        let group = self.group_mut(group_id).ok_or(StoreError::NoSelection)?;
        let item = Item::new(generate_id(), title.to_string());
        group.children.insert(0, item.clone());
        log::debug!("[BOARD] Added item {} to {}", item.id, group_id);
        Ok(item)
    }

    pub fn add_item_to_selected(&mut self, title: &str) -> StoreResult<Item> {
        let group_id = self
            .selected()
            .map(|g| g.id.clone())
            .ok_or(StoreError::NoSelection)?;
        self.add_item(&group_id, title)
    }

    pub fn remove_item(&mut self, group_id: &str, item_id: &str) -> Option<Item> {
        let group = self.group_mut(group_id)?;
        let index = group.children.iter().position(|i| i.id == item_id)?;
        Some(group.children.remove(index))
    }

    pub fn rename_item(&mut self, group_id: &str, item_id: &str, title: &str) -> StoreResult<()> {
        let title = non_blank(title)?;
        let item = self.item_mut(group_id, item_id)?;
        item.title = title.to_string();
        Ok(())
    }

    pub fn set_item_status(&mut self, group_id: &str, item_id: &str, done: bool) -> StoreResult<()> {
        self.item_mut(group_id, item_id)?.done = done;
        Ok(())
    }

    /// Reorder within one group's children; selection is unaffected
    pub fn move_item(&mut self, group_id: &str, moved_id: &str, target_id: &str) -> MoveOutcome {
        match self.group_mut(group_id) {
            Some(group) => move_after(&mut group.children, moved_id, target_id),
            None => MoveOutcome::NotFound,
        }
    }

    fn item_mut(&mut self, group_id: &str, item_id: &str) -> StoreResult<&mut Item> {
        self.group_mut(group_id)
            .and_then(|g| g.child_mut(item_id))
            .ok_or_else(|| StoreError::NotFound(item_id.to_string()))
    }
}

fn dedup_by_id<T: Entity>(list: Vec<T>) -> Vec<T> {
    let mut seen = std::collections::HashSet::new();
    list.into_iter()
        .filter(|e| {
            let fresh = seen.insert(e.id().to_string());
            if !fresh {
                log::warn!("[BOARD] Dropping duplicate {:?} id {}", T::KIND, e.id());
            }
            fresh
        })
        .collect()
}
