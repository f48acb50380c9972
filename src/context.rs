//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::dispatch::{Dispatcher, DropTarget, Gesture, Refresh};
use crate::persistence::BrowserStorage;
use crate::store::{store_refresh, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Sole owner of the board; components never touch it directly
    dispatcher: StoredValue<Dispatcher<BrowserStorage>>,
    /// Rendered view of the board
    pub store: AppStore,
}

impl AppContext {
    pub fn new(dispatcher: StoredValue<Dispatcher<BrowserStorage>>, store: AppStore) -> Self {
        Self { dispatcher, store }
    }

    /// Run a gesture and push the changed regions into the view store
    pub fn dispatch(&self, gesture: Gesture) -> Refresh {
        let store = self.store;
        let mut refresh = Refresh::NONE;
        self.dispatcher.update_value(|d| {
            refresh = d.dispatch(gesture);
            store_refresh(&store, d.board(), d.editing(), refresh);
        });
        refresh
    }

    /// Whether the row being dragged may be dropped on `target`
    pub fn accepts_drop(&self, target: &DropTarget) -> bool {
        self.dispatcher.with_value(|d| d.accepts_drop(target))
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
