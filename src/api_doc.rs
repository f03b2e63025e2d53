use utoipa::OpenApi;

use crate::handlers;
use crate::models::MessageResponse;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "hello-service API",
        version = "2.0.0",
        description = "Static versioned greeting endpoints with a liveness check"
    ),
    paths(
        handlers::health::health_handler,
        handlers::hello::hello_handler,
        handlers::hello::hello_v2_handler
    ),
    components(
        schemas(MessageResponse)
    ),
    tags(
        (name = "health", description = "Liveness check"),
        (name = "hello", description = "Greeting endpoints, all versions")
    )
)]
pub struct ApiDoc;
