use crate::models::MessageResponse;
use crate::routes::{self, HELLO_ROUTE, HELLO_V2_ROUTE};
use axum::{http::StatusCode, Json};

/// GET /hello handler - original greeting
#[utoipa::path(
    get,
    path = routes::HELLO,
    responses(
        (status = 200, description = "Greeting", body = MessageResponse,
            example = json!({"message": "world"}))
    ),
    tag = "hello"
)]
pub async fn hello_handler() -> (StatusCode, Json<MessageResponse>) {
    (HELLO_ROUTE.status, Json(MessageResponse::from(&HELLO_ROUTE)))
}

/// GET /v2/hello handler - successor greeting
///
/// Served alongside `/hello`; the v1 payload is left untouched.
#[utoipa::path(
    get,
    path = routes::HELLO_V2,
    responses(
        (status = 200, description = "Greeting, version 2", body = MessageResponse,
            example = json!({"message": "world v2"}))
    ),
    tag = "hello"
)]
pub async fn hello_v2_handler() -> (StatusCode, Json<MessageResponse>) {
    (HELLO_V2_ROUTE.status, Json(MessageResponse::from(&HELLO_V2_ROUTE)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    fn setup_test_app() -> Router {
        Router::new()
            .route(crate::routes::HELLO, get(hello_handler))
            .route(crate::routes::HELLO_V2, get(hello_v2_handler))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_hello_endpoint() {
        let (status, body) = get_json(setup_test_app(), "/hello").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({ "message": "world" }));
    }

    #[tokio::test]
    async fn test_hello_v2_endpoint() {
        let (status, body) = get_json(setup_test_app(), "/v2/hello").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({ "message": "world v2" }));
    }

    #[tokio::test]
    async fn test_v2_does_not_change_v1() {
        let app = setup_test_app();

        let (_, v1) = get_json(app.clone(), "/hello").await;
        let (_, v2) = get_json(app.clone(), "/v2/hello").await;
        let (_, v1_again) = get_json(app, "/hello").await;

        assert_ne!(v1, v2);
        assert_eq!(v1, v1_again);
    }
}
