use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use helga_breadcrumbs::domain::BreadcrumbLink;

use crate::state::AppState;
use crate::utils::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct BreadcrumbQuery {
    pub path: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BreadcrumbResponse {
    pub path: String,
    pub links: Vec<BreadcrumbLink>,
}

/// Resolves the breadcrumb trail for one request path.
pub async fn breadcrumbs_handler(
    State(state): State<AppState>,
    Query(query): Query<BreadcrumbQuery>,
) -> Result<Json<BreadcrumbResponse>, ApiError> {
    let path = query
        .path
        .filter(|path| !path.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Missing 'path' query parameter".to_string()))?;

    let route = state.routes.resolve(&state.site, &path);
    let mut pipeline = state
        .pipeline()
        .map_err(|error| ApiError::InternalError(error.to_string()))?;

    let links = match pipeline.build(&route) {
        Some(breadcrumb) => breadcrumb.into_links(),
        None => {
            debug!("No breadcrumb strategy applied to '{}'", path);
            Vec::new()
        }
    };

    Ok(Json(BreadcrumbResponse {
        path: route.path().to_string(),
        links,
    }))
}
