//! Session Store
//!
//! Sign-in, sign-up, restore and logout. The HTTP credential is attached and
//! detached only here, so it always matches `AppState::session`.

use crate::api;
use crate::config::{TOKEN_KEY, USERNAME_KEY};
use crate::controller::TodoController;
use crate::error::ApiResult;
use crate::forms::{LoginForm, RegisterForm};
use crate::models::{LoginRequest, RegisterRequest, Session};
use crate::store::StateCell;

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";

impl<C: StateCell> TodoController<C> {
    /// Re-establish a persisted session on startup. Missing keys mean
    /// signed out, which is not an error.
    pub async fn restore(&self) {
        let token = self.storage.get(TOKEN_KEY);
        let username = self.storage.get(USERNAME_KEY);
        let (Some(token), Some(username)) = (token, username) else {
            tracing::debug!("no persisted session");
            return;
        };
        tracing::info!("restoring session for {}", username);
        self.establish(Session { username, token });
        self.fetch_tasks().await;
    }

    /// Authenticate, persist and load tasks. Forms are not touched.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<Session> {
        let resp = api::login(&self.http, &LoginRequest { username, password }).await?;
        let session = Session::from(resp);
        self.sign_in(session.clone()).await;
        Ok(session)
    }

    pub async fn register(&self, username: &str, email: &str, password: &str) -> ApiResult<Session> {
        let resp = api::register(&self.http, &RegisterRequest { username, email, password }).await?;
        let session = Session::from(resp);
        self.sign_in(session.clone()).await;
        Ok(session)
    }

    /// Submit the login form. The form is cleared only on success.
    pub async fn submit_login(&self) -> bool {
        let form = self.state.inspect(|s| s.login_form.clone());
        self.set_loading(true);
        let ok = match self.login(&form.username, &form.password).await {
            Ok(session) => {
                tracing::info!("signed in as {}", session.username);
                self.state.modify(|s| s.login_form = LoginForm::default());
                true
            }
            Err(e) => {
                tracing::warn!("login failed: {}", e);
                self.notifier.alert(e.server_message().unwrap_or(LOGIN_FAILED));
                false
            }
        };
        self.set_loading(false);
        ok
    }

    /// Submit the registration form. The form is cleared only on success.
    pub async fn submit_register(&self) -> bool {
        let form = self.state.inspect(|s| s.register_form.clone());
        self.set_loading(true);
        let ok = match self.register(&form.username, &form.email, &form.password).await {
            Ok(session) => {
                tracing::info!("registered {}", session.username);
                self.state.modify(|s| s.register_form = RegisterForm::default());
                true
            }
            Err(e) => {
                tracing::warn!("registration failed: {}", e);
                self.notifier.alert(e.server_message().unwrap_or(REGISTRATION_FAILED));
                false
            }
        };
        self.set_loading(false);
        ok
    }

    /// Drop the persisted credential, the session and the cached tasks
    pub fn logout(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USERNAME_KEY);
        self.state.modify(|s| {
            s.session = None;
            s.tasks.clear();
        });
        self.http.set_auth_token(None);
        tracing::info!("signed out");
    }

    async fn sign_in(&self, session: Session) {
        self.storage.set(TOKEN_KEY, &session.token);
        self.storage.set(USERNAME_KEY, &session.username);
        self.establish(session);
        self.fetch_tasks().await;
    }

    pub(crate) fn establish(&self, session: Session) {
        self.http.set_auth_token(Some(&session.token));
        self.state.modify(|s| s.session = Some(session));
    }
}
