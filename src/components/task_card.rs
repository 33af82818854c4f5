//! Task Card Component
//!
//! A single task with view/edit modes. The edit buffer is local to the
//! card; cancelling drops it without a backend call. A buffer whose save
//! failed is kept and re-shown by the next Edit.

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::forms::CardMode;
use crate::models::{priority_class, Priority, Task, TaskId};
use crate::store::AppStateStoreFields;

/// `<For>` key covering every displayed field, so a re-fetched task with
/// changed content re-renders its card
pub fn card_key(task: &Task) -> (TaskId, String, Option<NaiveDate>, Option<Priority>, bool) {
    (task.id, task.title.clone(), task.due_date, task.priority, task.completed)
}

#[component]
pub fn TaskCard(task: Task) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let id = task.id;
    let completed = task.completed;
    let task = StoredValue::new(task);
    let (mode, set_mode) = signal(CardMode::Viewing);
    let is_editing = Memo::new(move |_| mode.with(CardMode::is_editing));
    let loading = move || store.loading().get();

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Back to viewing right away; the refreshed list carries the result
        let Some(form) = set_mode.try_update(CardMode::finish).flatten() else {
            return;
        };
        ctx.dispatch(move |controller| async move {
            if !controller.update_task(id, &form).await {
                // The card is gone if the failure signed the user out
                set_mode.try_update(|m| m.keep_unsaved(form));
            }
        });
    };

    let on_complete = move |_: web_sys::MouseEvent| {
        ctx.dispatch(move |controller| async move {
            controller.complete_task(id).await;
        });
    };

    let on_delete = move |_: web_sys::MouseEvent| {
        ctx.dispatch(move |controller| async move {
            controller.delete_task(id).await;
        });
    };

    let editing_view = move || {
        let title = move || mode.with(|m| match m {
            CardMode::Editing(form) => form.title.clone(),
            _ => String::new(),
        });
        let due_date = move || mode.with(|m| match m {
            CardMode::Editing(form) => form.due_date.clone(),
            _ => String::new(),
        });

        view! {
            <form class="edit-form" on:submit=on_save>
                <input
                    type="text"
                    prop:value=title
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_mode.update(|m| if let Some(form) = m.buffer_mut() { form.title = value });
                    }
                />
                <div class="edit-row">
                    <input
                        type="date"
                        prop:value=due_date
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_mode.update(|m| if let Some(form) = m.buffer_mut() { form.due_date = value });
                        }
                    />
                    <select on:change=move |ev| {
                        let priority = Priority::from_key(&event_target_value(&ev));
                        set_mode.update(|m| if let Some(form) = m.buffer_mut() { form.priority = priority });
                    }>
                        {Priority::ALL.into_iter().map(|priority| {
                            let is_selected = move || mode.with(|m| {
                                matches!(m, CardMode::Editing(form) if form.priority == priority)
                            });
                            view! {
                                <option value=priority.as_str() selected=is_selected>
                                    {priority.label()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>
                <div class="card-actions">
                    <button type="submit" class="save-btn" disabled=loading>"Save"</button>
                    <button type="button" class="cancel-btn" on:click=move |_| set_mode.update(CardMode::cancel)>
                        "Cancel"
                    </button>
                </div>
            </form>
        }
    };

    let viewing_view = move || {
        let (title, priority, due) = task.with_value(|t| (t.title.clone(), t.priority, t.due_label()));
        view! {
            <div class="task-view">
                <div class="task-body">
                    <h3 class="task-title">{title}</h3>
                    <div class="task-meta">
                        <span class=priority_class(priority)>
                            {priority.map(|p| p.as_str()).unwrap_or("")}
                        </span>
                        <span class="task-due">"Due: " {due}</span>
                    </div>
                </div>
                <div class="card-actions">
                    // Completed tasks can only be deleted
                    <Show when=move || !completed>
                        <button
                            class="edit-btn"
                            on:click=move |_| task.with_value(|t| set_mode.update(|m| { m.begin_edit(t); }))
                        >
                            "Edit"
                        </button>
                        <button class="complete-btn" disabled=loading on:click=on_complete>
                            "Complete"
                        </button>
                    </Show>
                    <button class="delete-btn" disabled=loading on:click=on_delete>
                        "Delete"
                    </button>
                </div>
            </div>
        }
    };

    view! {
        <div class=if completed { "task-card completed" } else { "task-card" }>
            {move || if is_editing.get() {
                editing_view().into_any()
            } else {
                viewing_view().into_any()
            }}
        </div>
    }
}
