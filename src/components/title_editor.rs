//! Title Editor Component
//!
//! Inline input laid over a title. Enter commits, Escape or losing focus
//! cancels.

use leptos::html::Input;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::dispatch::Gesture;

#[component]
pub fn TitleEditor(#[prop(into)] initial: String) -> impl IntoView {
    let ctx = use_app_context();
    let input_ref = NodeRef::<Input>::new();

    // Focus as soon as the input is mounted
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let on_keydown = move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ctx.dispatch(Gesture::RenameCommit { title: event_target_value(&ev) });
        }
        "Escape" => {
            ctx.dispatch(Gesture::RenameCancel);
        }
        _ => {}
    };

    view! {
        <input
            type="text"
            class="covering-input"
            node_ref=input_ref
            prop:value=initial
            on:keydown=on_keydown
            on:focusout=move |_| {
                ctx.dispatch(Gesture::RenameCancel);
            }
        />
    }
}
