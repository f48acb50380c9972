//! Draggable Row Component
//!
//! Wraps a task or subtask row with HTML5 drag-and-drop. A row accepts
//! drops only from its own list; the dropped entity lands right after it.

use leptos::prelude::*;
use web_sys::DragEvent;

use crate::context::use_app_context;
use crate::dispatch::{DropTarget, Gesture};
use crate::models::DragPayload;

use leptos_dragdrop::*;

#[component]
pub fn DraggableRow(
    dnd: DndSignals,
    /// This row, as a drop target
    target: DropTarget,
    #[prop(into)] class: String,
    #[prop(optional)] selected: Option<Signal<bool>>,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let ctx = use_app_context();

    let id = target.id().to_string();
    let kind = target.kind();
    let payload = DragPayload::new(id.clone(), kind);

    let start = make_on_dragstart(dnd, id.clone(), payload.clone());
    let on_dragstart = move |ev: DragEvent| {
        start(ev);
        ctx.dispatch(Gesture::DragStart(payload.clone()));
    };

    let accepts = {
        let target = target.clone();
        move || ctx.accepts_drop(&target)
    };
    let on_dragover = make_on_dragover(dnd, id.clone(), accepts);
    let on_dragleave = make_on_dragleave(dnd, id.clone());

    let end = make_on_dragend(dnd);
    let on_dragend = move |ev: DragEvent| {
        end(ev);
        ctx.dispatch(Gesture::DragEnd);
    };

    let on_drop = make_on_drop(dnd, move |payload: DragPayload| {
        ctx.dispatch(Gesture::Drop { payload, target: target.clone() });
    });

    let row_id = id.clone();
    let row_class = move || {
        let mut c = class.clone();
        if selected.map(|s| s.get()).unwrap_or(false) { c.push_str(" selected"); }
        if dnd.is_dragging(&row_id) { c.push_str(" dragged"); }
        if dnd.is_over(&row_id) { c.push_str(" drag-over"); }
        c
    };

    view! {
        <div
            class=row_class
            draggable="true"
            data-id=id
            data-type=kind.as_str()
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
            on:dragstart=on_dragstart
            on:dragenter=on_dragover.clone()
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:dragend=on_dragend
            on:drop=on_drop
        >
            {children()}
        </div>
    }
}
