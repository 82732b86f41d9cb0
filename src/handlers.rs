use crate::config::MailSettings;
use crate::errors::AppError;
use crate::intake::{self, SUCCESS_MESSAGE};
use crate::mailer::Mailer;
use crate::models::{DemoRequest, ErrorResponse, SuccessResponse};
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use std::sync::Arc;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Sender/recipient addressing for lead notifications.
    pub mail: MailSettings,
    /// Delivery provider used for every notification.
    pub mailer: Arc<dyn Mailer>,
}

/// Health check endpoint.
///
/// Returns the service status, version, and health information.
///
/// # Returns
///
/// * `(StatusCode, Json<serde_json::Value>)` - HTTP 200 OK with health status JSON.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// POST /api/demo-request
///
/// Validates a demo request and emails it to the sales inbox.
///
/// The body is parsed as JSON whatever its `Content-Type`. A body that is
/// not valid JSON, or one larger than the route's body limit, is treated
/// like any other unexpected failure and answered with the generic 500
/// message.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `body` - JSON body with `name`, `email` and `phone`.
///
/// # Returns
///
/// * `Result<Json<SuccessResponse>, AppError>` - Confirmation message or an error.
#[utoipa::path(
    post,
    path = "/api/demo-request",
    request_body = DemoRequest,
    responses(
        (status = 200, description = "Lead delivered", body = SuccessResponse),
        (status = 400, description = "A required field is missing", body = ErrorResponse),
        (status = 500, description = "Delivery failed", body = ErrorResponse)
    )
)]
pub async fn demo_request(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SuccessResponse>, AppError> {
    let body = body.map_err(|rejection| {
        AppError::InternalError(format!("Unreadable demo request body: {}", rejection))
    })?;
    let request: DemoRequest = serde_json::from_slice(&body)?;

    tracing::info!("POST /api/demo-request");

    let message_id = intake::submit(state.mailer.as_ref(), &state.mail, request).await?;

    tracing::info!("Demo request delivered (message id {})", message_id);

    Ok(Json(SuccessResponse {
        message: SUCCESS_MESSAGE.to_string(),
    }))
}
