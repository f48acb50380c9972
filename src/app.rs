//! Tasks Manager App
//!
//! Two-column layout: task list on the left, selected task on the right.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{GroupList, GroupPanel};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::dispatch::Dispatcher;
use crate::persistence::{BrowserStorage, PersistenceGateway};
use crate::store::ViewState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Restore the last session before anything renders
    let gateway = PersistenceGateway::new(BrowserStorage, config.storage_key);
    let dispatcher = Dispatcher::new(gateway);
    let store = Store::new(ViewState::project(dispatcher.board(), dispatcher.editing()));

    // Provide context to all children
    provide_context(AppContext::new(StoredValue::new(dispatcher), store));

    view! {
        <div class="app-layout">
            <GroupList />
            <GroupPanel />
        </div>
    }
}
