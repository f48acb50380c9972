//! UI Components
//!
//! Leptos components rendering the view store and emitting gestures.

mod draggable_row;
mod group_list;
mod group_panel;
mod item_row;
mod new_entry_form;
mod title_editor;

pub use draggable_row::DraggableRow;
pub use group_list::GroupList;
pub use group_panel::GroupPanel;
pub use item_row::ItemRow;
pub use new_entry_form::NewEntryForm;
pub use title_editor::TitleEditor;
