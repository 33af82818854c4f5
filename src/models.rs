//! Frontend Models
//!
//! Data structures matching the backend's JSON payloads.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Backend task identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub i64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Task priority (serialized as the upper-case enum name)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }

    /// Parse a `<select>` value. Anything unknown maps to the default.
    pub fn from_key(s: &str) -> Self {
        match s {
            "HIGH" => Priority::High,
            "LOW" => Priority::Low,
            _ => Priority::Medium,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

/// CSS class for a priority badge; tasks without a priority get a neutral style
pub fn priority_class(priority: Option<Priority>) -> &'static str {
    match priority {
        Some(Priority::High) => "priority priority-high",
        Some(Priority::Medium) => "priority priority-medium",
        Some(Priority::Low) => "priority priority-low",
        None => "priority priority-none",
    }
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Due date as shown on a task card
    pub fn due_label(&self) -> String {
        match self.due_date {
            Some(date) => date.format("%m/%d/%Y").to_string(),
            None => "No due date".to_string(),
        }
    }
}

/// The authenticated identity held by the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub token: String,
}

// ========================
// Wire Payloads
// ========================

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Successful `/auth/*` response
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub username: String,
}

impl From<AuthResponse> for Session {
    fn from(resp: AuthResponse) -> Self {
        Session {
            username: resp.username,
            token: resp.token,
        }
    }
}

/// Body of `POST /tasks`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    pub completed: bool,
}

/// Body of `PUT /tasks/{id}`: full replace of the mutable fields
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdate {
    pub title: String,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
}
