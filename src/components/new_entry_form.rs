//! New Entry Form Component
//!
//! Text input plus add button; Enter submits too.

use leptos::prelude::*;

/// Form for creating a task or subtask
#[component]
pub fn NewEntryForm(
    #[prop(into)] class: String,
    #[prop(into)] placeholder: String,
    /// Receives the raw input; blank titles are rejected downstream
    on_submit: Callback<String>,
) -> impl IntoView {
    let (new_text, set_new_text) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get_untracked();
        if text.trim().is_empty() {
            log::info!("[FORM] Title is empty, nothing to add");
            return;
        }
        on_submit.run(text);
        set_new_text.set(String::new());
    };

    view! {
        <form class=class on:submit=submit>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit">"+"</button>
        </form>
    }
}
