//! Todo Manager Frontend App
//!
//! Root component: wires the controller and store, restores a persisted
//! session, and switches between the sign-in screen and the task workspace.

use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{GlooTransport, HttpClient};
use crate::components::{AuthPanel, TaskWorkspace};
use crate::config::ClientConfig;
use crate::context::AppContext;
use crate::controller::TodoController;
use crate::dialogs::BrowserDialogs;
use crate::storage::BrowserStorage;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_env();
    tracing::info!("using API at {}", config.api_base);

    // State
    let store = Store::new(AppState::default());
    let controller = TodoController::new(
        HttpClient::new(config.api_base, Rc::new(GlooTransport)),
        Rc::new(BrowserStorage),
        Rc::new(BrowserDialogs),
        store,
    );

    // Provide context to all children
    let ctx = AppContext::new(store, controller);
    provide_context(ctx);

    // Restore a persisted session on mount
    Effect::new(move |_| {
        ctx.dispatch(|controller| async move { controller.restore().await });
    });

    let signed_in = move || store.session().with(|session| session.is_some());

    view! {
        {move || if signed_in() {
            view! { <TaskWorkspace /> }.into_any()
        } else {
            view! { <AuthPanel /> }.into_any()
        }}
    }
}
