use crate::models::MessageResponse;
use crate::routes::{self, HEALTH_ROUTE};
use axum::{http::StatusCode, Json};

/// GET /health handler - Liveness check
///
/// Answers 200 as long as the process is accepting connections. There are
/// no downstream dependencies to probe.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is accepting connections", body = MessageResponse,
            example = json!({"message": "healthy"}))
    ),
    tag = "health"
)]
pub async fn health_handler() -> (StatusCode, Json<MessageResponse>) {
    tracing::debug!("Health check passed");
    (HEALTH_ROUTE.status, Json(MessageResponse::from(&HEALTH_ROUTE)))
}
