//! Todo Controller
//!
//! The handle every backend-bound intent goes through. Owns the HTTP
//! binding, the persistent storage and dialogs, and a handle to the app
//! state.
//! Session operations live in `session.rs`, task operations in
//! `repository.rs`.

use std::rc::Rc;

use crate::api::HttpClient;
use crate::dialogs::Notifier;
use crate::storage::KeyValueStore;
use crate::store::{AppStore, StateCell};

#[derive(Clone)]
pub struct TodoController<C: StateCell> {
    pub(crate) http: HttpClient,
    pub(crate) storage: Rc<dyn KeyValueStore>,
    pub(crate) notifier: Rc<dyn Notifier>,
    pub(crate) state: C,
}

/// Controller bound to the reactive store
pub type AppController = TodoController<AppStore>;

impl<C: StateCell> TodoController<C> {
    pub fn new(
        http: HttpClient,
        storage: Rc<dyn KeyValueStore>,
        notifier: Rc<dyn Notifier>,
        state: C,
    ) -> Self {
        Self {
            http,
            storage,
            notifier,
            state,
        }
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub(crate) fn set_loading(&self, loading: bool) {
        self.state.modify(|s| s.loading = loading);
    }

    pub(crate) fn is_authenticated(&self) -> bool {
        self.state.inspect(|s| s.is_authenticated())
    }
}
