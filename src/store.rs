//! View Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! A read-only mirror of the dispatcher's board; components render from
//! here and only the regions named by a [`Refresh`] are rewritten.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::Board;
use crate::dispatch::{Refresh, RenameTarget};
use crate::models::Group;

/// What the components render
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ViewState {
    /// Catalog in display order
    pub groups: Vec<Group>,
    /// Copy of the selected group, `None` when nothing is selected
    pub selected: Option<Group>,
    /// Inline title editor, if open
    pub editing: Option<RenameTarget>,
}

impl ViewState {
    pub fn project(board: &Board, editing: Option<&RenameTarget>) -> Self {
        Self {
            groups: board.groups().to_vec(),
            selected: board.selected().cloned(),
            editing: editing.cloned(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<ViewState>;

// ========================
// Store Helper Functions
// ========================

/// Copy the regions named by `refresh` from the board into the store
pub fn store_refresh(store: &AppStore, board: &Board, editing: Option<&RenameTarget>, refresh: Refresh) {
    if refresh.content {
        *store.groups().write() = board.groups().to_vec();
    }
    if refresh.content || refresh.selection {
        *store.selected().write() = board.selected().cloned();
    }
    // The editor opens and closes without touching the board
    if store.editing().with_untracked(|e| e.as_ref() != editing) {
        *store.editing().write() = editing.cloned();
    }
}
