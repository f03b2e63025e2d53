use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::config::Config;
use crate::routes::{self, RouteDefinition};

/// Build the application router.
///
/// Registers every route from [`routes::ROUTES`]. Anything else falls through
/// to axum's defaults: 404 for unknown paths, 405 for a known path with the
/// wrong method.
pub fn router(config: &Config) -> Router {
    let mut app = register(&routes::ROUTES);

    if config.api_docs {
        app = app.merge(
            SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()),
        );
        tracing::info!("API docs served at {}", routes::SWAGGER_UI);
    }

    with_middleware(app)
}

fn register(definitions: &[RouteDefinition]) -> Router {
    definitions.iter().fold(Router::new(), |app, route| {
        tracing::debug!("Registered GET {} -> {}", route.path, route.message);
        app.route(route.path, (route.handler)())
    })
}

/// Panics inside a handler become a 500 instead of a dropped connection.
fn with_middleware(app: Router) -> Router {
    app.layer(CatchPanicLayer::new()).layer(TraceLayer::new_for_http())
}
