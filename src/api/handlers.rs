//! HTTP request handlers

use super::types::{ErrorResponse, ForwardRequest, ForwardResponse};
use super::AppState;
use crate::config::CHAT_PATH;
use crate::forwarder::ForwardError;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(CHAT_PATH, post(chat))
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// Chat forwarding
// ============================================================

/// The body is parsed by hand so clients that post JSON without a
/// `Content-Type` header are still accepted.
async fn chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ForwardResponse>, AppError> {
    let req: ForwardRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid request body: {e}")))?;

    let reply = state.forwarder.forward(&req.prompt).await?;
    Ok(Json(ForwardResponse { reply }))
}

async fn get_version() -> &'static str {
    concat!("chat-relay ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    BadGateway(String),
}

impl From<ForwardError> for AppError {
    fn from(err: ForwardError) -> Self {
        match err {
            ForwardError::EmptyPrompt => AppError::BadRequest("Prompt is empty".to_string()),
            ForwardError::Provider(e) => {
                tracing::warn!(kind = e.kind.as_str(), error = %e.message, "Forwarding failed");
                AppError::BadGateway(e.message)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
