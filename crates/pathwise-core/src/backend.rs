//! Backend trait definition.
//!
//! This is the port through which the controller reaches the career
//! assistant's HTTP API. Uses native async fn in traits (RPITIT, Rust 2024
//! edition). The HTTP implementation lives in pathwise-infra
//! (`HttpBackend`).
//!
//! Every method resolves to the decoded success body, a
//! [`BackendError::Rejected`] carrying the server's `detail`, or a
//! [`BackendError::Transport`] when no usable response arrived.

use std::future::Future;

use pathwise_types::api::{
    ChatRequest, ChatResponse, ContactRequest, ForgotPasswordRequest, LoginRequest, LoginResponse,
    MessageResponse, ServiceResponse, SignupRequest,
};
use pathwise_types::error::BackendError;
use serde_json::{Map, Value};

pub trait Backend: Send + Sync {
    /// `POST /api/signup`
    fn signup(
        &self,
        request: &SignupRequest<'_>,
    ) -> impl Future<Output = Result<MessageResponse, BackendError>> + Send;

    /// `POST /api/login`
    fn login(
        &self,
        request: &LoginRequest<'_>,
    ) -> impl Future<Output = Result<LoginResponse, BackendError>> + Send;

    /// `POST /api/forgot-password`
    fn forgot_password(
        &self,
        request: &ForgotPasswordRequest<'_>,
    ) -> impl Future<Output = Result<MessageResponse, BackendError>> + Send;

    /// `POST /api/chat`, tagged with `session-id`.
    fn chat(
        &self,
        session_id: &str,
        request: &ChatRequest<'_>,
    ) -> impl Future<Output = Result<ChatResponse, BackendError>> + Send;

    /// `GET /api/clear-chat`, tagged with `session-id`.
    fn clear_chat(
        &self,
        session_id: &str,
    ) -> impl Future<Output = Result<(), BackendError>> + Send;

    /// `POST /api/save-chat`, tagged with `session-id` and `username`.
    fn save_chat(
        &self,
        session_id: &str,
        username: &str,
    ) -> impl Future<Output = Result<MessageResponse, BackendError>> + Send;

    /// `POST {endpoint}` for one of the assessment services.
    fn submit_service(
        &self,
        endpoint: &str,
        session_id: &str,
        body: &Map<String, Value>,
    ) -> impl Future<Output = Result<ServiceResponse, BackendError>> + Send;

    /// `POST /api/contact`
    fn contact(
        &self,
        request: &ContactRequest<'_>,
    ) -> impl Future<Output = Result<MessageResponse, BackendError>> + Send;
}
