//! View Filter
//!
//! Derives the displayed task subset from the cached list.

use crate::models::Task;

/// Which cached tasks are displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl ViewFilter {
    pub const ALL: [ViewFilter; 3] = [ViewFilter::All, ViewFilter::Pending, ViewFilter::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewFilter::All => "all",
            ViewFilter::Pending => "pending",
            ViewFilter::Completed => "completed",
        }
    }

    /// Unknown keys fall back to `All`
    pub fn from_key(key: &str) -> Self {
        match key {
            "pending" => ViewFilter::Pending,
            "completed" => ViewFilter::Completed,
            _ => ViewFilter::All,
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            ViewFilter::All => true,
            ViewFilter::Pending => !task.completed,
            ViewFilter::Completed => task.completed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewFilter::All => "All Tasks",
            ViewFilter::Pending => "Pending",
            ViewFilter::Completed => "Completed",
        }
    }

    /// Text shown when the filtered list is empty
    pub fn empty_message(&self) -> &'static str {
        match self {
            ViewFilter::All => "Start by adding your first task!",
            ViewFilter::Pending => "No pending tasks. Great job!",
            ViewFilter::Completed => "No completed tasks yet.",
        }
    }
}

/// Tasks matching `view`, in their original order
pub fn filter_tasks(tasks: &[Task], view: ViewFilter) -> Vec<Task> {
    tasks.iter().filter(|task| view.matches(task)).cloned().collect()
}

/// Number of tasks matching `view`
pub fn count_tasks(tasks: &[Task], view: ViewFilter) -> usize {
    tasks.iter().filter(|task| view.matches(task)).count()
}
