//! Scriptable in-memory backend for controller tests.

use std::collections::HashMap;
use std::sync::Mutex;

use pathwise_types::api::{
    ChatRequest, ChatResponse, ContactRequest, ForgotPasswordRequest, LoginRequest, LoginResponse,
    MessageResponse, ServiceResponse, SignupRequest,
};
use pathwise_types::error::BackendError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::backend::Backend;

/// One request the controller issued.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub endpoint: String,
    pub session_id: Option<String>,
    pub username: Option<String>,
    pub body: Value,
}

/// Replies with canned JSON per endpoint and records every call.
///
/// An endpoint without a canned reply fails as a transport error.
pub struct MockBackend {
    replies: HashMap<String, Result<Value, BackendError>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            replies: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn reply(mut self, endpoint: &str, reply: Result<Value, BackendError>) -> Self {
        self.replies.insert(endpoint.to_string(), reply);
        self
    }

    pub fn ok(self, endpoint: &str, body: Value) -> Self {
        self.reply(endpoint, Ok(body))
    }

    pub fn rejected(self, endpoint: &str, status: u16, detail: &str) -> Self {
        self.reply(
            endpoint,
            Err(BackendError::Rejected {
                status,
                detail: detail.to_string(),
            }),
        )
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn respond<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        session_id: Option<&str>,
        username: Option<&str>,
        body: Value,
    ) -> Result<T, BackendError> {
        self.calls.lock().unwrap().push(RecordedCall {
            endpoint: endpoint.to_string(),
            session_id: session_id.map(str::to_string),
            username: username.map(str::to_string),
            body,
        });

        match self.replies.get(endpoint) {
            Some(Ok(value)) => serde_json::from_value(value.clone())
                .map_err(|e| BackendError::Transport(format!("malformed response: {e}"))),
            Some(Err(err)) => Err(err.clone()),
            None => Err(BackendError::Transport("connection refused".to_string())),
        }
    }
}

fn to_value<T: Serialize>(request: &T) -> Value {
    serde_json::to_value(request).unwrap()
}

impl Backend for MockBackend {
    async fn signup(&self, request: &SignupRequest<'_>) -> Result<MessageResponse, BackendError> {
        self.respond("/api/signup", None, None, to_value(request))
    }

    async fn login(&self, request: &LoginRequest<'_>) -> Result<LoginResponse, BackendError> {
        self.respond("/api/login", None, None, to_value(request))
    }

    async fn forgot_password(
        &self,
        request: &ForgotPasswordRequest<'_>,
    ) -> Result<MessageResponse, BackendError> {
        self.respond("/api/forgot-password", None, None, to_value(request))
    }

    async fn chat(
        &self,
        session_id: &str,
        request: &ChatRequest<'_>,
    ) -> Result<ChatResponse, BackendError> {
        self.respond("/api/chat", Some(session_id), None, to_value(request))
    }

    async fn clear_chat(&self, session_id: &str) -> Result<(), BackendError> {
        self.respond::<Value>("/api/clear-chat", Some(session_id), None, Value::Null)
            .map(|_| ())
    }

    async fn save_chat(
        &self,
        session_id: &str,
        username: &str,
    ) -> Result<MessageResponse, BackendError> {
        self.respond("/api/save-chat", Some(session_id), Some(username), Value::Null)
    }

    async fn submit_service(
        &self,
        endpoint: &str,
        session_id: &str,
        body: &Map<String, Value>,
    ) -> Result<ServiceResponse, BackendError> {
        self.respond(endpoint, Some(session_id), None, Value::Object(body.clone()))
    }

    async fn contact(&self, request: &ContactRequest<'_>) -> Result<MessageResponse, BackendError> {
        self.respond("/api/contact", None, None, to_value(request))
    }
}
