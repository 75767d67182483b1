//! HttpBackend -- concrete [`Backend`] implementation over the career
//! assistant's JSON API.
//!
//! All POST bodies are JSON. Chat and assessment requests carry the
//! `session-id` header; saving a chat additionally carries `username`.
//! Non-2xx responses are decoded for their `detail`; anything that cannot
//! be decoded is reported as a transport failure.

use std::time::Duration;

use pathwise_core::backend::Backend;
use pathwise_types::api::{
    ChatRequest, ChatResponse, ContactRequest, ErrorBody, ForgotPasswordRequest, LoginRequest,
    LoginResponse, MessageResponse, SESSION_ID_HEADER, ServiceResponse, SignupRequest,
    USERNAME_HEADER,
};
use pathwise_types::config::ClientConfig;
use pathwise_types::error::BackendError;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// reqwest-backed client for the backend API.
///
/// No retries. Requests wait indefinitely unless `request_timeout_secs`
/// is configured.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: &ClientConfig) -> Result<Self, BackendError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| BackendError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full URL for an API path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> RequestBuilder {
        self.client.post(self.url(path)).json(body)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        path: &str,
        request: RequestBuilder,
    ) -> Result<T, BackendError> {
        tracing::debug!(path, "Sending backend request");
        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Transport(format!("HTTP request failed: {e}")))?;
        decode(response).await
    }

    /// Like [`send`](Self::send), for endpoints whose success body is ignored.
    async fn send_status(&self, path: &str, request: RequestBuilder) -> Result<(), BackendError> {
        tracing::debug!(path, "Sending backend request");
        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Transport(format!("HTTP request failed: {e}")))?;
        decode_status(response).await
    }
}

/// Split a response into its success body or a [`BackendError`].
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
    let status = response.status();
    let bytes = response
        .bytes()
        .await
        .map_err(|e| BackendError::Transport(format!("failed to read response body: {e}")))?;

    if status.is_success() {
        return serde_json::from_slice(&bytes)
            .map_err(|e| BackendError::Transport(format!("failed to parse response: {e}")));
    }

    Err(rejection(status, &bytes))
}

/// Only the status decides success; a 2xx body is never read.
async fn decode_status(response: Response) -> Result<(), BackendError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| BackendError::Transport(format!("failed to read response body: {e}")))?;
    Err(rejection(status, &bytes))
}

/// Turn a non-2xx body into `Rejected`, or `Transport` if it is not JSON.
fn rejection(status: StatusCode, bytes: &[u8]) -> BackendError {
    let body: ErrorBody = match serde_json::from_slice(bytes) {
        Ok(body) => body,
        Err(e) => {
            return BackendError::Transport(format!("HTTP {status} with undecodable body: {e}"));
        }
    };
    let detail = body.text().unwrap_or_else(|| format!("HTTP {status}"));
    tracing::debug!(status = status.as_u16(), "Backend rejected request");
    BackendError::Rejected {
        status: status.as_u16(),
        detail,
    }
}

impl Backend for HttpBackend {
    async fn signup(&self, request: &SignupRequest<'_>) -> Result<MessageResponse, BackendError> {
        self.send("/api/signup", self.post_json("/api/signup", request))
            .await
    }

    async fn login(&self, request: &LoginRequest<'_>) -> Result<LoginResponse, BackendError> {
        self.send("/api/login", self.post_json("/api/login", request))
            .await
    }

    async fn forgot_password(
        &self,
        request: &ForgotPasswordRequest<'_>,
    ) -> Result<MessageResponse, BackendError> {
        self.send(
            "/api/forgot-password",
            self.post_json("/api/forgot-password", request),
        )
        .await
    }

    async fn chat(
        &self,
        session_id: &str,
        request: &ChatRequest<'_>,
    ) -> Result<ChatResponse, BackendError> {
        let builder = self
            .post_json("/api/chat", request)
            .header(SESSION_ID_HEADER, session_id);
        self.send("/api/chat", builder).await
    }

    async fn clear_chat(&self, session_id: &str) -> Result<(), BackendError> {
        let builder = self
            .client
            .get(self.url("/api/clear-chat"))
            .header(SESSION_ID_HEADER, session_id);
        self.send_status("/api/clear-chat", builder).await
    }

    async fn save_chat(
        &self,
        session_id: &str,
        username: &str,
    ) -> Result<MessageResponse, BackendError> {
        let builder = self
            .client
            .post(self.url("/api/save-chat"))
            .header(SESSION_ID_HEADER, session_id)
            .header(USERNAME_HEADER, username);
        self.send("/api/save-chat", builder).await
    }

    async fn submit_service(
        &self,
        endpoint: &str,
        session_id: &str,
        body: &Map<String, Value>,
    ) -> Result<ServiceResponse, BackendError> {
        let builder = self
            .post_json(endpoint, body)
            .header(SESSION_ID_HEADER, session_id);
        self.send(endpoint, builder).await
    }

    async fn contact(&self, request: &ContactRequest<'_>) -> Result<MessageResponse, BackendError> {
        self.send("/api/contact", self.post_json("/api/contact", request))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::http::{HeaderMap, StatusCode};
    use axum::response::{IntoResponse, Response};
    use axum::routing::{get, post};
    use axum::Json;
    use serde_json::json;

    /// Serve `router` on an ephemeral port and return its base URL.
    async fn spawn(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn backend(base_url: String) -> HttpBackend {
        HttpBackend::new(&ClientConfig {
            base_url,
            ..ClientConfig::default()
        })
        .unwrap()
    }

    fn header(headers: &HeaderMap, name: &str) -> String {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string()
    }

    async fn login_handler(Json(body): Json<Value>) -> Response {
        if body["password"] == "Abc12345!" {
            Json(json!({
                "session_id": format!("{}_1712345678.5", body["username"].as_str().unwrap_or("")),
                "message": "Welcome back!",
                "chat_history": []
            }))
            .into_response()
        } else {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"detail": "Invalid username or password"})),
            )
                .into_response()
        }
    }

    async fn chat_handler(headers: HeaderMap, Json(body): Json<Value>) -> Json<Value> {
        let session = header(&headers, SESSION_ID_HEADER);
        let content_type = header(&headers, "content-type");
        Json(json!({
            "response": format!("{session}|{content_type}|{}", body["message"].as_str().unwrap_or("")),
            "history": [],
            "updated_history": true
        }))
    }

    async fn save_handler(headers: HeaderMap) -> Json<Value> {
        Json(json!({
            "message": format!(
                "saved {} for {}",
                header(&headers, SESSION_ID_HEADER),
                header(&headers, USERNAME_HEADER)
            )
        }))
    }

    async fn skills_handler(Json(body): Json<Value>) -> Json<Value> {
        let prompt = format!(
            "Skills Analysis: {} -> {}",
            body["current_skills"].as_str().unwrap_or(""),
            body["target_role"].as_str().unwrap_or("")
        );
        Json(json!({
            "response": "Learn statistics.",
            "history": [[prompt, "Learn statistics."]],
            "updated_history": true
        }))
    }

    fn router() -> Router {
        Router::new()
            .route("/api/login", post(login_handler))
            .route("/api/chat", post(chat_handler))
            .route("/api/save-chat", post(save_handler))
            .route("/api/skills", post(skills_handler))
            .route(
                "/api/clear-chat",
                get(|| async { Json(json!({"message": "Chat cleared!", "history": []})) }),
            )
            .route(
                "/api/signup",
                post(|| async {
                    (
                        StatusCode::UNPROCESSABLE_ENTITY,
                        Json(json!({"detail": [{"loc": ["body", "email"], "msg": "field required"}]})),
                    )
                }),
            )
            .route("/api/contact", post(|| async { "plain text, not json" }))
            .route(
                "/api/forgot-password",
                post(|| async { (StatusCode::BAD_GATEWAY, "<html>bad gateway</html>") }),
            )
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let backend = backend("http://localhost:8000/".to_string());
        assert_eq!(backend.base_url(), "http://localhost:8000");
        assert_eq!(backend.url("/api/chat"), "http://localhost:8000/api/chat");
    }

    #[tokio::test]
    async fn test_login_success_and_rejection() {
        let backend = backend(spawn(router()).await);

        let ok = backend
            .login(&LoginRequest {
                username: "ada",
                password: "Abc12345!",
            })
            .await
            .unwrap();
        assert_eq!(ok.session_id, "ada_1712345678.5");

        let err = backend
            .login(&LoginRequest {
                username: "ada",
                password: "wrong",
            })
            .await
            .unwrap_err();
        assert_eq!(
            err,
            BackendError::Rejected {
                status: 400,
                detail: "Invalid username or password".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_chat_sends_session_header_and_json() {
        let backend = backend(spawn(router()).await);
        let reply = backend
            .chat("ada_42", &ChatRequest { message: "hello" })
            .await
            .unwrap();
        assert_eq!(reply.response, "ada_42|application/json|hello");
    }

    #[tokio::test]
    async fn test_clear_chat_ok() {
        let backend = backend(spawn(router()).await);
        assert!(backend.clear_chat("guest").await.is_ok());
    }

    #[tokio::test]
    async fn test_clear_chat_ignores_success_body() {
        let router = Router::new().route("/api/clear-chat", get(|| async { StatusCode::OK }));
        let backend = backend(spawn(router).await);
        assert_eq!(backend.clear_chat("guest").await, Ok(()));
    }

    #[tokio::test]
    async fn test_clear_chat_plain_text_success() {
        let router = Router::new().route("/api/clear-chat", get(|| async { "cleared" }));
        let backend = backend(spawn(router).await);
        assert_eq!(backend.clear_chat("guest").await, Ok(()));
    }

    #[tokio::test]
    async fn test_clear_chat_rejection_keeps_detail() {
        let router = Router::new().route(
            "/api/clear-chat",
            get(|| async {
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({"detail": "Session not found"})),
                )
            }),
        );
        let backend = backend(spawn(router).await);
        assert_eq!(
            backend.clear_chat("guest").await,
            Err(BackendError::Rejected {
                status: 404,
                detail: "Session not found".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_save_chat_sends_both_headers() {
        let backend = backend(spawn(router()).await);
        let reply = backend.save_chat("ada_42", "ada").await.unwrap();
        assert_eq!(reply.message, "saved ada_42 for ada");
    }

    #[tokio::test]
    async fn test_submit_service_decodes_history() {
        let backend = backend(spawn(router()).await);
        let mut body = Map::new();
        body.insert("current_skills".to_string(), json!("rust"));
        body.insert("target_role".to_string(), json!("sre"));

        let reply = backend
            .submit_service("/api/skills", "guest", &body)
            .await
            .unwrap();
        assert_eq!(reply.response.as_deref(), Some("Learn statistics."));
        let history = reply.replay_history().unwrap();
        assert_eq!(history[0].user_text(), "Skills Analysis: rust -> sre");
    }

    #[tokio::test]
    async fn test_structured_detail_is_rejected_with_json_text() {
        let backend = backend(spawn(router()).await);
        let err = backend
            .signup(&SignupRequest {
                username: "ada",
                email: "",
                password: "Abc12345!",
                confirm_password: "Abc12345!",
                full_name: "Ada",
            })
            .await
            .unwrap_err();
        match err {
            BackendError::Rejected { status, detail } => {
                assert_eq!(status, 422);
                assert!(detail.contains("field required"));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_success_body_is_transport_error() {
        let backend = backend(spawn(router()).await);
        let err = backend
            .contact(&ContactRequest {
                name: "Ada",
                email: "ada@example.com",
                subject: "Hi",
                message: "Hello",
            })
            .await
            .unwrap_err();
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_non_json_error_body_is_transport_error() {
        let backend = backend(spawn(router()).await);
        let err = backend
            .forgot_password(&ForgotPasswordRequest {
                email: "ada@example.com",
            })
            .await
            .unwrap_err();
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        // Bind then drop to get a port nobody is listening on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let backend = backend(format!("http://{addr}"));
        let err = backend
            .chat("guest", &ChatRequest { message: "hi" })
            .await
            .unwrap_err();
        assert!(err.is_transport());
    }
}
