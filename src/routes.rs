// Route path constants - single source of truth for all API paths

use axum::http::StatusCode;
use axum::routing::{get, MethodRouter};

use crate::handlers;

pub const HEALTH: &str = "/health";
pub const HELLO: &str = "/hello";
pub const HELLO_V2: &str = "/v2/hello";

pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

/// A GET route that always answers with the same JSON message.
///
/// Versioned routes live next to their predecessors: `/v2/hello` is added
/// alongside `/hello`, never in place of it.
#[derive(Debug, Clone, Copy)]
pub struct RouteDefinition {
    pub path: &'static str,
    pub message: &'static str,
    pub status: StatusCode,
    /// Builds the GET method router serving this route.
    pub handler: fn() -> MethodRouter,
}

fn health_router() -> MethodRouter {
    get(handlers::health_handler)
}

fn hello_router() -> MethodRouter {
    get(handlers::hello_handler)
}

fn hello_v2_router() -> MethodRouter {
    get(handlers::hello_v2_handler)
}

pub const HEALTH_ROUTE: RouteDefinition = RouteDefinition {
    path: HEALTH,
    message: "healthy",
    status: StatusCode::OK,
    handler: health_router,
};

pub const HELLO_ROUTE: RouteDefinition = RouteDefinition {
    path: HELLO,
    message: "world",
    status: StatusCode::OK,
    handler: hello_router,
};

pub const HELLO_V2_ROUTE: RouteDefinition = RouteDefinition {
    path: HELLO_V2,
    message: "world v2",
    status: StatusCode::OK,
    handler: hello_v2_router,
};

/// Every registered route, in registration order.
pub const ROUTES: [RouteDefinition; 3] = [HEALTH_ROUTE, HELLO_ROUTE, HELLO_V2_ROUTE];
