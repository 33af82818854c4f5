//! New Task Form Component
//!
//! Form for creating tasks with due date and priority.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Priority;
use crate::store::AppStateStoreFields;

/// "Add New Task" form; the buffer lives in the store and survives failures
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let loading = move || store.loading().get();

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.dispatch(|controller| async move {
            controller.create_task().await;
        });
    };

    view! {
        <h2>"Add New Task"</h2>
        <form class="new-task-form" on:submit=create_task>
            <label>
                "Task Title"
                <input
                    type="text"
                    placeholder="Enter task title..."
                    required=true
                    prop:value=move || store.task_form().with(|f| f.title.clone())
                    on:input=move |ev| store.task_form().update(|f| f.title = event_target_value(&ev))
                />
            </label>

            <label>
                "Due Date"
                <input
                    type="date"
                    prop:value=move || store.task_form().with(|f| f.due_date.clone())
                    on:input=move |ev| store.task_form().update(|f| f.due_date = event_target_value(&ev))
                />
            </label>

            <label>
                "Priority"
                <select on:change=move |ev| {
                    let priority = Priority::from_key(&event_target_value(&ev));
                    store.task_form().update(|f| f.priority = priority);
                }>
                    {Priority::ALL.into_iter().map(|priority| {
                        let is_selected = move || store.task_form().with(|f| f.priority == priority);
                        view! {
                            <option value=priority.as_str() selected=is_selected>
                                {priority.label()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </label>

            <button type="submit" class="primary-btn" disabled=loading>
                {move || if loading() { "Adding..." } else { "Add Task" }}
            </button>
        </form>
    }
}
