//! Task Workspace Component
//!
//! Signed-in screen: header, "Add New Task" form, filter tabs and the list.

use leptos::prelude::*;

use crate::components::{FilterTabs, NewTaskForm, TaskList};
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn TaskWorkspace() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let username = move || {
        store
            .session()
            .with(|session| session.as_ref().map(|s| s.username.clone()).unwrap_or_default())
    };

    view! {
        <div class="workspace">
            <header class="app-header">
                <h1>"📝 Todo Manager"</h1>
                <div class="user-box">
                    <span class="welcome">"Welcome, " {username} "!"</span>
                    <button class="logout-btn" on:click=move |_| ctx.controller().logout()>
                        "Logout"
                    </button>
                </div>
            </header>

            <main class="workspace-grid">
                <section class="panel add-panel">
                    <NewTaskForm />
                </section>

                <section class="panel list-panel">
                    <FilterTabs />
                    <TaskList />
                </section>
            </main>
        </div>
    }
}
