//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controller::AppController;
use crate::store::AppStore;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Reactive app state
    pub store: AppStore,
    /// Controller behind a `Copy` handle so view closures can capture it
    controller: StoredValue<AppController, LocalStorage>,
}

impl AppContext {
    pub fn new(store: AppStore, controller: AppController) -> Self {
        Self {
            store,
            controller: StoredValue::new_local(controller),
        }
    }

    pub fn controller(&self) -> AppController {
        self.controller.get_value()
    }

    /// Run an async controller action on the event loop
    pub fn dispatch<F, Fut>(&self, action: F)
    where
        F: FnOnce(AppController) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(action(self.controller()));
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
