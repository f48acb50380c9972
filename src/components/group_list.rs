//! Group List Component
//!
//! Left column: task add form and the draggable task list.

use leptos::prelude::*;

use crate::components::{DraggableRow, NewEntryForm};
use crate::context::use_app_context;
use crate::dispatch::{DropTarget, Gesture};
use crate::models::Group;
use crate::store::ViewStateStoreFields;

use leptos_dragdrop::*;

#[component]
pub fn GroupList() -> impl IntoView {
    let ctx = use_app_context();
    let dnd = create_dnd_signals();

    let add_group = Callback::new(move |title: String| {
        ctx.dispatch(Gesture::AddGroup { title });
    });

    view! {
        <div class="tasks">
            <NewEntryForm class="add-task" placeholder="New task..." on_submit=add_group />

            <div class="tasks-list">
                <For
                    each=move || ctx.store.groups().get()
                    key=|group| (group.id.clone(), group.title.clone())
                    children=move |group: Group| view! { <GroupRow group=group dnd=dnd /> }
                />
            </div>
        </div>
    }
}

/// A single task row
#[component]
fn GroupRow(group: Group, dnd: DndSignals) -> impl IntoView {
    let ctx = use_app_context();

    let id = group.id.clone();
    let is_selected = {
        let id = id.clone();
        Signal::derive(move || ctx.store.selected().with(|s| s.as_ref().is_some_and(|g| g.id == id)))
    };
    let select = {
        let id = id.clone();
        Callback::new(move |_| {
            ctx.dispatch(Gesture::Select { id: id.clone() });
        })
    };
    let remove = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        ctx.dispatch(Gesture::RemoveGroup { id: id.clone() });
    };

    let target = DropTarget::Group(group.id.clone());

    view! {
        <DraggableRow
            dnd=dnd
            target=target
            class="task"
            selected=is_selected
            on_click=select
        >
            <div class="title" title=group.title.clone()>{group.title.clone()}</div>
            <button class="remove-task-button" on:click=remove>"X"</button>
        </DraggableRow>
    }
}
