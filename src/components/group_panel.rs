//! Group Panel Component
//!
//! Right column: the selected task's title, subtask statistics, add form
//! and subtask list. Hidden while nothing is selected.

use leptos::prelude::*;

use crate::components::{ItemRow, NewEntryForm, TitleEditor};
use crate::context::use_app_context;
use crate::dispatch::{Gesture, RenameTarget};
use crate::models::Item;
use crate::store::ViewStateStoreFields;

use leptos_dragdrop::*;

#[component]
pub fn GroupPanel() -> impl IntoView {
    let ctx = use_app_context();
    let dnd = create_dnd_signals();

    let selected = move || ctx.store.selected().get();
    let selected_title = move || selected().map(|g| g.title).unwrap_or_default();
    let is_editing_title = move || matches!(ctx.store.editing().get(), Some(RenameTarget::Group(_)));

    let add_item = Callback::new(move |title: String| {
        ctx.dispatch(Gesture::AddItem { title });
    });

    let on_title_click = move |ev: web_sys::MouseEvent| {
        // Clicks inside the open editor bubble up here
        if ev.target() != ev.current_target() {
            return;
        }
        let selected_id = ctx.store.selected().with_untracked(|s| s.as_ref().map(|g| g.id.clone()));
        match selected_id {
            Some(id) => {
                ctx.dispatch(Gesture::RenameStart(RenameTarget::Group(id)));
            }
            None => log::info!("[PANEL] No task selected, can't change its title"),
        }
    };

    let rows = move || -> Vec<(String, Item)> {
        let Some(group) = selected() else { return Vec::new() };
        group.children.into_iter().map(|item| (group.id.clone(), item)).collect()
    };

    view! {
        <div class=move || if selected().is_some() { "task-content" } else { "task-content hidden" }>
            <h2 class="title" on:click=on_title_click>
                {move || selected().map(|g| g.title).unwrap_or_else(|| "Not selected".to_string())}
                <Show when=is_editing_title>
                    <TitleEditor initial=selected_title() />
                </Show>
            </h2>
            <h3 class="status">
                {move || selected().map(|g| g.statistics().to_string()).unwrap_or_else(|| "Not available".to_string())}
            </h3>

            <NewEntryForm class="add-subtask" placeholder="New subtask..." on_submit=add_item />

            <div class="subtasks-list">
                <For
                    each=rows
                    key=|(group_id, item)| (group_id.clone(), item.id.clone(), item.title.clone(), item.done)
                    children=move |(group_id, item)| view! { <ItemRow group_id=group_id item=item dnd=dnd /> }
                />
            </div>
        </div>
    }
}
