//! Item Row Component
//!
//! A subtask: checkbox, title, edit and remove buttons.

use leptos::prelude::*;

use crate::components::{DraggableRow, TitleEditor};
use crate::context::use_app_context;
use crate::dispatch::{DropTarget, Gesture, RenameTarget};
use crate::models::Item;
use crate::store::ViewStateStoreFields;

use leptos_dragdrop::DndSignals;

#[component]
pub fn ItemRow(group_id: String, item: Item, dnd: DndSignals) -> impl IntoView {
    let ctx = use_app_context();

    let rename_target = RenameTarget::Item {
        group_id: group_id.clone(),
        item_id: item.id.clone(),
    };
    let is_editing = {
        let target = rename_target.clone();
        move || ctx.store.editing().with(|e| e.as_ref() == Some(&target))
    };

    let toggle = {
        let (group_id, item_id) = (group_id.clone(), item.id.clone());
        move |ev: web_sys::Event| {
            ctx.dispatch(Gesture::Toggle {
                group_id: group_id.clone(),
                item_id: item_id.clone(),
                done: event_target_checked(&ev),
            });
        }
    };
    let edit = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        ctx.dispatch(Gesture::RenameStart(rename_target.clone()));
    };
    let remove = {
        let (group_id, item_id) = (group_id.clone(), item.id.clone());
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            ctx.dispatch(Gesture::RemoveItem { group_id: group_id.clone(), item_id: item_id.clone() });
        }
    };

    let title = item.title.clone();
    let target = DropTarget::Item { group_id, item_id: item.id.clone() };

    view! {
        <DraggableRow
            dnd=dnd
            target=target
            class="subtask"
        >
            <input type="checkbox" class="subtask_checkbox" prop:checked=item.done on:change=toggle />
            <div class="title" title=item.title.clone()>{item.title.clone()}</div>
            <button class="edit-subtask-button" on:click=edit>"E"</button>
            <button class="remove-subtask-button" on:click=remove>"X"</button>
            <Show when=is_editing>
                <TitleEditor initial=title.clone() />
            </Show>
        </DraggableRow>
    }
}
