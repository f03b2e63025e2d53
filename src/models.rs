use serde::{Deserialize, Serialize};

use crate::routes::RouteDefinition;

/// Response body shared by every static route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    #[schema(example = "world")]
    pub message: String,
}

impl From<&RouteDefinition> for MessageResponse {
    fn from(route: &RouteDefinition) -> Self {
        Self {
            message: route.message.to_string(),
        }
    }
}
