//! Task Repository
//!
//! Remote task CRUD for the current session. Every successful mutation is
//! followed by a full re-fetch; the cached list is never patched locally.
//! A 401 from any call signs the user out without a notification.

use crate::api;
use crate::controller::TodoController;
use crate::error::ApiError;
use crate::forms::{EditForm, TaskForm};
use crate::models::TaskId;
use crate::store::StateCell;

pub const ADD_FAILED: &str = "Error adding task";
pub const UPDATE_FAILED: &str = "Error updating task";
pub const COMPLETE_FAILED: &str = "Error completing task";
pub const DELETE_FAILED: &str = "Error deleting task";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this task?";

impl<C: StateCell> TodoController<C> {
    /// Replace the cached task list with the backend's
    pub async fn fetch_tasks(&self) {
        if !self.is_authenticated() {
            return;
        }
        self.set_loading(true);
        match api::list_tasks(&self.http).await {
            // A logout while the request was in flight wins
            Ok(tasks) => self.state.modify(|s| {
                if s.session.is_none() {
                    tracing::debug!("signed out during fetch, dropping {} tasks", tasks.len());
                    return;
                }
                tracing::debug!("loaded {} tasks", tasks.len());
                s.tasks = tasks;
            }),
            Err(e) => self.recover(e, None),
        }
        self.set_loading(false);
    }

    /// Submit the "Add New Task" form. Blank titles never reach the backend.
    pub async fn create_task(&self) -> bool {
        let Some(task) = self.state.inspect(|s| s.task_form.to_new_task()) else {
            tracing::debug!("ignoring task with blank title");
            return false;
        };
        if !self.is_authenticated() {
            return false;
        }
        self.set_loading(true);
        let ok = match api::create_task(&self.http, &task).await {
            Ok(()) => {
                self.state.modify(|s| s.task_form = TaskForm::default());
                self.fetch_tasks().await;
                true
            }
            Err(e) => {
                self.recover(e, Some(ADD_FAILED));
                false
            }
        };
        self.set_loading(false);
        ok
    }

    pub async fn update_task(&self, id: TaskId, form: &EditForm) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        self.set_loading(true);
        let ok = match api::update_task(&self.http, id, &form.to_update()).await {
            Ok(()) => {
                self.fetch_tasks().await;
                true
            }
            Err(e) => {
                self.recover(e, Some(UPDATE_FAILED));
                false
            }
        };
        self.set_loading(false);
        ok
    }

    pub async fn complete_task(&self, id: TaskId) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        self.set_loading(true);
        let ok = match api::complete_task(&self.http, id).await {
            Ok(()) => {
                self.fetch_tasks().await;
                true
            }
            Err(e) => {
                self.recover(e, Some(COMPLETE_FAILED));
                false
            }
        };
        self.set_loading(false);
        ok
    }

    /// Delete after a blocking confirmation; declining is a no-op
    pub async fn delete_task(&self, id: TaskId) -> bool {
        if !self.is_authenticated() || !self.notifier.confirm(DELETE_PROMPT) {
            return false;
        }
        self.set_loading(true);
        let ok = match api::delete_task(&self.http, id).await {
            Ok(()) => {
                self.fetch_tasks().await;
                true
            }
            Err(e) => {
                self.recover(e, Some(DELETE_FAILED));
                false
            }
        };
        self.set_loading(false);
        ok
    }

    fn recover(&self, err: ApiError, message: Option<&str>) {
        if err.is_unauthorized() {
            tracing::info!("credential rejected, signing out");
            self.logout();
            return;
        }
        tracing::error!("task request failed: {}", err);
        if let Some(message) = message {
            self.notifier.alert(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Method;
    use crate::forms::CardMode;
    use crate::models::{Priority, Task};
    use crate::testing::Harness;
    use futures::executor::block_on;

    const TWO_TASKS: &str = r#"[
        {"id":7,"title":"X","dueDate":null,"priority":"MEDIUM","completed":false},
        {"id":8,"title":"Done","dueDate":"2024-04-01","priority":"LOW","completed":true}
    ]"#;

    #[test]
    fn test_fetch_replaces_cache_wholesale() {
        let h = Harness::signed_in("T1");
        h.transport.reply(200, TWO_TASKS);
        h.transport.reply(200, r#"[{"id":9,"title":"Only","completed":false}]"#);

        block_on(h.controller.fetch_tasks());
        assert_eq!(h.snapshot().tasks.len(), 2);

        block_on(h.controller.fetch_tasks());
        let tasks = h.snapshot().tasks;
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, TaskId(9));
    }

    #[test]
    fn test_unauthorized_fetch_clears_session() {
        let h = Harness::signed_in("expired");
        h.transport.reply(401, "");

        block_on(h.controller.fetch_tasks());

        let state = h.snapshot();
        assert_eq!(state.session, None);
        assert!(!state.loading);
        assert_eq!(h.controller.http().auth_token(), None);
        assert!(h.notifier.alerts().is_empty());
    }

    #[test]
    fn test_create_sends_completed_false_then_refreshes() {
        let h = Harness::signed_in("T1");
        h.state.borrow_mut().task_form = TaskForm {
            title: "Buy milk".to_string(),
            due_date: "2024-05-01".to_string(),
            priority: Priority::High,
        };
        h.transport.reply(200, r#"{"id":10,"title":"Buy milk"}"#);
        h.transport.reply(200, r#"[{"id":10,"title":"Buy milk","dueDate":"2024-05-01","priority":"HIGH","completed":false}]"#);

        assert!(block_on(h.controller.create_task()));

        let sent = h.transport.requests();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].url, "/api/tasks");
        assert_eq!(
            sent[0].body,
            Some(serde_json::json!({
                "title": "Buy milk",
                "dueDate": "2024-05-01",
                "priority": "HIGH",
                "completed": false
            }))
        );
        assert_eq!(sent[1].method, Method::Get);
        assert_eq!(sent[1].url, "/api/tasks");

        let state = h.snapshot();
        assert_eq!(state.task_form, TaskForm::default());
        assert_eq!(state.task_form.priority, Priority::Medium);
        assert_eq!(state.tasks.len(), 1);
        assert!(!state.loading);
    }

    #[test]
    fn test_blank_title_makes_no_call() {
        let h = Harness::signed_in("T1");
        for title in ["", "   ", "\t\n"] {
            h.state.borrow_mut().task_form.title = title.to_string();
            assert!(!block_on(h.controller.create_task()));
        }
        assert!(h.transport.requests().is_empty());
        assert!(!h.snapshot().loading);
    }

    #[test]
    fn test_create_failure_keeps_form() {
        let h = Harness::signed_in("T1");
        h.state.borrow_mut().task_form.title = "Buy milk".to_string();
        h.transport.reply(500, "");

        assert!(!block_on(h.controller.create_task()));

        let state = h.snapshot();
        assert_eq!(state.task_form.title, "Buy milk");
        assert!(!state.loading);
        assert!(state.session.is_some());
        assert_eq!(h.notifier.alerts(), vec![ADD_FAILED.to_string()]);
        assert_eq!(h.transport.requests().len(), 1);
    }

    #[test]
    fn test_update_puts_mutable_fields() {
        let h = Harness::signed_in("T1");
        let form = EditForm {
            title: "Y".to_string(),
            due_date: String::new(),
            priority: Priority::Low,
        };
        h.transport.reply(200, "{}");
        h.transport.reply(200, TWO_TASKS);

        assert!(block_on(h.controller.update_task(TaskId(7), &form)));

        let sent = h.transport.requests();
        assert_eq!(sent[0].method, Method::Put);
        assert_eq!(sent[0].url, "/api/tasks/7");
        assert_eq!(
            sent[0].body,
            Some(serde_json::json!({"title": "Y", "dueDate": null, "priority": "LOW"}))
        );
        assert_eq!(sent[1].method, Method::Get);
    }

    #[test]
    fn test_complete_and_its_failure() {
        let h = Harness::signed_in("T1");
        h.transport.reply(200, "");
        h.transport.reply(200, TWO_TASKS);
        h.transport.reply(404, "");

        assert!(block_on(h.controller.complete_task(TaskId(7))));
        assert!(!block_on(h.controller.complete_task(TaskId(99))));

        let sent = h.transport.requests();
        assert_eq!(sent[0].url, "/api/tasks/7/complete");
        assert_eq!(sent[0].body, None);
        assert_eq!(sent[2].url, "/api/tasks/99/complete");
        assert_eq!(h.notifier.alerts(), vec![COMPLETE_FAILED.to_string()]);
        assert_eq!(h.snapshot().tasks.len(), 2);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let h = Harness::signed_in("T1");
        h.notifier.answer(false);

        assert!(!block_on(h.controller.delete_task(TaskId(7))));
        assert!(h.transport.requests().is_empty());
        assert_eq!(h.notifier.prompts(), vec![DELETE_PROMPT.to_string()]);

        h.notifier.answer(true);
        h.transport.reply(200, "");
        h.transport.reply(200, "[]");

        assert!(block_on(h.controller.delete_task(TaskId(7))));
        let sent = h.transport.requests();
        assert_eq!(sent[0].method, Method::Delete);
        assert_eq!(sent[0].url, "/api/tasks/7");
        assert_eq!(sent[1].method, Method::Get);
    }

    #[test]
    fn test_unauthorized_mutation_signs_out_silently() {
        let h = Harness::signed_in("T1");
        h.notifier.answer(true);
        h.transport.reply(401, "");

        assert!(!block_on(h.controller.delete_task(TaskId(7))));

        assert_eq!(h.snapshot().session, None);
        assert!(h.notifier.alerts().is_empty());
    }

    #[test]
    fn test_signed_out_mutations_make_no_calls() {
        let h = Harness::new();
        h.state.borrow_mut().task_form.title = "Buy milk".to_string();
        h.notifier.answer(true);

        assert!(!block_on(h.controller.create_task()));
        assert!(!block_on(h.controller.complete_task(TaskId(1))));
        assert!(!block_on(h.controller.delete_task(TaskId(1))));
        block_on(h.controller.fetch_tasks());

        assert!(h.transport.requests().is_empty());
    }

    #[test]
    fn test_loading_is_set_while_requests_are_in_flight() {
        let h = Harness::signed_in("T1");
        h.notifier.answer(true);
        h.state.borrow_mut().task_form.title = "Buy milk".to_string();
        let form = EditForm::from_task(&Task {
            id: TaskId(7),
            title: "X".to_string(),
            due_date: None,
            priority: None,
            completed: false,
        });
        h.transport.reply(200, TWO_TASKS);
        for _ in 0..4 {
            h.transport.reply(200, "");
            h.transport.reply(200, TWO_TASKS);
        }

        block_on(h.controller.fetch_tasks());
        assert!(block_on(h.controller.create_task()));
        assert!(block_on(h.controller.update_task(TaskId(7), &form)));
        assert!(block_on(h.controller.complete_task(TaskId(7))));
        assert!(block_on(h.controller.delete_task(TaskId(7))));

        assert_eq!(h.loading_during_requests(), vec![true; 9]);
        assert!(!h.snapshot().loading);
    }

    #[test]
    fn test_failed_update_keeps_edit_for_retry() {
        let h = Harness::signed_in("T1");
        h.transport.reply(200, TWO_TASKS);
        block_on(h.controller.fetch_tasks());
        let task = h.snapshot().tasks[0].clone();

        let mut mode = CardMode::default();
        mode.begin_edit(&task);
        if let Some(buffer) = mode.buffer_mut() {
            buffer.title = "Y".to_string();
            buffer.priority = Priority::High;
        }
        let form = mode.finish().unwrap();
        h.transport.reply(500, "");

        assert!(!block_on(h.controller.update_task(task.id, &form)));
        mode.keep_unsaved(form);

        assert_eq!(h.notifier.alerts(), vec![UPDATE_FAILED.to_string()]);
        assert!(mode.begin_edit(&task));
        let buffer = mode.buffer_mut().unwrap();
        assert_eq!(buffer.title, "Y");
        assert_eq!(buffer.priority, Priority::High);
    }

    #[test]
    fn test_fetch_finishing_after_logout_is_dropped() {
        let h = Harness::signed_in("T1");
        let state = h.state.clone();
        h.transport.on_send(move |_| state.borrow_mut().session = None);
        h.transport.reply(200, TWO_TASKS);

        block_on(h.controller.fetch_tasks());

        let state = h.snapshot();
        assert_eq!(state.session, None);
        assert!(state.tasks.is_empty());
        assert!(!state.loading);
    }

    #[test]
    fn test_cancelled_edit_issues_no_put() {
        let h = Harness::signed_in("T1");
        h.transport.reply(200, TWO_TASKS);
        block_on(h.controller.fetch_tasks());

        let task: Task = h.snapshot().tasks[0].clone();
        let mut mode = CardMode::default();
        assert!(mode.begin_edit(&task));
        if let Some(buffer) = mode.buffer_mut() {
            buffer.title = "Y".to_string();
        }
        mode.cancel();

        assert_eq!(h.transport.requests().len(), 1);
        assert!(h.transport.requests().iter().all(|r| r.method != Method::Put));
        assert_eq!(h.snapshot().tasks[0].title, "X");
        assert_eq!(mode, CardMode::Viewing);
    }
}
