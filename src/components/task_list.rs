//! Task List Component
//!
//! Loading indicator, empty state, and one card per filtered task.

use leptos::prelude::*;

use crate::components::{card_key, TaskCard};
use crate::context::use_app_context;
use crate::filter::filter_tasks;
use crate::store::AppStateStoreFields;

#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_app_context().store;

    // Derived only from (tasks, view)
    let filtered = Memo::new(move |_| {
        let view = store.view().get();
        store.tasks().with(|tasks| filter_tasks(tasks, view))
    });

    let loading = move || store.loading().get();
    let is_empty = move || !loading() && filtered.with(|tasks| tasks.is_empty());

    view! {
        <div class="task-list">
            <Show when=loading>
                <div class="loading">
                    <div class="spinner"></div>
                    <p>"Loading tasks..."</p>
                </div>
            </Show>

            <Show when=is_empty>
                <div class="empty-state">
                    <div class="empty-icon">"📋"</div>
                    <h3>"No tasks found"</h3>
                    <p>{move || store.view().get().empty_message()}</p>
                </div>
            </Show>

            <For
                each=move || filtered.get()
                key=card_key
                children=move |task| view! { <TaskCard task=task /> }
            />
        </div>
    }
}
