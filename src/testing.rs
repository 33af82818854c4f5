//! Test Doubles
//!
//! Scripted transport, in-memory storage and recording dialogs.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;

use crate::api::{ApiRequest, ApiResponse, HttpClient, Transport};
use crate::controller::TodoController;
use crate::dialogs::Notifier;
use crate::error::{ApiError, ApiResult};
use crate::models::Session;
use crate::storage::KeyValueStore;
use crate::store::AppState;

type SendHook = Box<dyn Fn(&ApiRequest)>;

/// Records every request and answers from a queue of scripted replies
#[derive(Default)]
pub struct MockTransport {
    requests: RefCell<Vec<ApiRequest>>,
    replies: RefCell<VecDeque<ApiResult<ApiResponse>>>,
    on_send: RefCell<Option<SendHook>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, status: u16, body: &str) {
        self.replies.borrow_mut().push_back(Ok(ApiResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn fail(&self, message: &str) {
        self.replies
            .borrow_mut()
            .push_back(Err(ApiError::Network(message.to_string())));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    /// Run `hook` while each request is in flight, replacing any earlier hook
    pub fn on_send(&self, hook: impl Fn(&ApiRequest) + 'static) {
        *self.on_send.borrow_mut() = Some(Box::new(hook));
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        if let Some(hook) = self.on_send.borrow().as_ref() {
            hook(&request);
        }
        self.requests.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted reply".to_string())))
    }
}

#[derive(Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn value(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.value(key)
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

/// Records alerts and prompts; answers prompts with a preset reply
#[derive(Default)]
pub struct RecordingNotifier {
    alerts: RefCell<Vec<String>>,
    prompts: RefCell<Vec<String>>,
    answer: Cell<bool>,
}

impl RecordingNotifier {
    pub fn answer(&self, yes: bool) {
        self.answer.set(yes);
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_string());
        self.answer.get()
    }
}

pub type SharedState = Rc<RefCell<AppState>>;

/// A controller wired to test doubles, with handles to each of them
pub struct Harness {
    pub controller: TodoController<SharedState>,
    pub transport: Rc<MockTransport>,
    pub storage: Rc<MemoryStorage>,
    pub notifier: Rc<RecordingNotifier>,
    pub state: SharedState,
    loading_seen: Rc<RefCell<Vec<bool>>>,
}

impl Harness {
    pub fn new() -> Self {
        let transport = Rc::new(MockTransport::new());
        let storage = Rc::new(MemoryStorage::default());
        let notifier = Rc::new(RecordingNotifier::default());
        let state: SharedState = Rc::new(RefCell::new(AppState::default()));
        let controller = TodoController::new(
            HttpClient::new("/api", transport.clone()),
            storage.clone(),
            notifier.clone(),
            state.clone(),
        );

        let loading_seen = Rc::new(RefCell::new(Vec::new()));
        {
            let state = state.clone();
            let seen = loading_seen.clone();
            transport.on_send(move |_| seen.borrow_mut().push(state.borrow().loading));
        }

        Self {
            controller,
            transport,
            storage,
            notifier,
            state,
            loading_seen,
        }
    }

    /// Harness with an active session for "alice"
    pub fn signed_in(token: &str) -> Self {
        let harness = Self::new();
        harness.controller.establish(Session {
            username: "alice".to_string(),
            token: token.to_string(),
        });
        harness
    }

    pub fn snapshot(&self) -> AppState {
        self.state.borrow().clone()
    }

    /// The loading flag as it stood at each request, in send order
    pub fn loading_during_requests(&self) -> Vec<bool> {
        self.loading_seen.borrow().clone()
    }
}
