//! Form Buffers
//!
//! In-progress, unvalidated input for the auth and task forms.
//! Buffers are reset only after a successful submission.

use chrono::NaiveDate;

use crate::models::{NewTask, Priority, Task, TaskUpdate};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// "Add New Task" form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    /// Raw `<input type="date">` value, empty when unset
    pub due_date: String,
    pub priority: Priority,
}

impl TaskForm {
    /// Package the form for `POST /tasks`; `None` when the title is blank
    pub fn to_new_task(&self) -> Option<NewTask> {
        if self.title.trim().is_empty() {
            return None;
        }
        Some(NewTask {
            title: self.title.clone(),
            due_date: parse_due_date(&self.due_date),
            priority: self.priority,
            completed: false,
        })
    }
}

/// Per-card edit buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    pub title: String,
    pub due_date: String,
    pub priority: Priority,
}

impl EditForm {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            due_date: task
                .due_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            priority: task.priority.unwrap_or_default(),
        }
    }

    pub fn to_update(&self) -> TaskUpdate {
        TaskUpdate {
            title: self.title.clone(),
            due_date: parse_due_date(&self.due_date),
            priority: self.priority,
        }
    }
}

/// Blank means no date. Unparseable input is dropped with a warning.
pub fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::warn!("ignoring invalid due date {:?}: {}", raw, e);
            None
        }
    }
}

/// Display mode of a single task card
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CardMode {
    #[default]
    Viewing,
    Editing(EditForm),
    /// Viewing, holding the buffer of a save the backend rejected
    Unsaved(EditForm),
}

impl CardMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, CardMode::Editing(_))
    }

    /// Enter edit mode. A buffer kept from a failed save is re-shown,
    /// otherwise the buffer is seeded from `task`. Completed tasks cannot
    /// be edited.
    pub fn begin_edit(&mut self, task: &Task) -> bool {
        if task.completed {
            return false;
        }
        *self = match std::mem::take(self) {
            CardMode::Editing(form) | CardMode::Unsaved(form) => CardMode::Editing(form),
            CardMode::Viewing => CardMode::Editing(EditForm::from_task(task)),
        };
        true
    }

    pub fn buffer_mut(&mut self) -> Option<&mut EditForm> {
        match self {
            CardMode::Editing(form) => Some(form),
            CardMode::Viewing | CardMode::Unsaved(_) => None,
        }
    }

    /// Discard the buffer without touching the backend
    pub fn cancel(&mut self) {
        *self = CardMode::Viewing;
    }

    /// Revert to viewing and hand back the buffer for saving
    pub fn finish(&mut self) -> Option<EditForm> {
        match std::mem::take(self) {
            CardMode::Editing(form) => Some(form),
            other => {
                *self = other;
                None
            }
        }
    }

    /// Keep the buffer of a save that failed, so the next edit resumes it.
    /// Ignored when the card is already being edited again.
    pub fn keep_unsaved(&mut self, form: EditForm) {
        if !self.is_editing() {
            *self = CardMode::Unsaved(form);
        }
    }
}
