//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::ViewFilter;
use crate::forms::{LoginForm, RegisterForm, TaskForm};
use crate::models::{Session, Task};

/// Which panel the signed-out view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthView {
    #[default]
    Login,
    Register,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Signed-in identity; `None` means unauthenticated
    pub session: Option<Session>,
    /// Cached copy of the backend task list
    pub tasks: Vec<Task>,
    /// Selected view filter
    pub view: ViewFilter,
    /// Set while a backend call is outstanding
    pub loading: bool,
    pub auth_view: AuthView,
    pub login_form: LoginForm,
    pub register_form: RegisterForm,
    pub task_form: TaskForm,
}

impl AppState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Container the controller reads and mutates state through.
///
/// Reads are untracked and never held across an `.await`.
pub trait StateCell: Clone + 'static {
    fn inspect<R>(&self, f: impl FnOnce(&AppState) -> R) -> R;
    fn modify(&self, f: impl FnOnce(&mut AppState));
}

impl StateCell for AppStore {
    fn inspect<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        self.with_untracked(f)
    }

    fn modify(&self, f: impl FnOnce(&mut AppState)) {
        self.update(f);
    }
}

/// Plain shared state, for use outside a reactive owner
impl StateCell for Rc<RefCell<AppState>> {
    fn inspect<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.borrow())
    }

    fn modify(&self, f: impl FnOnce(&mut AppState)) {
        f(&mut self.borrow_mut());
    }
}
