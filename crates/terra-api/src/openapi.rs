//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI 3.1 spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "terra API",
        version = "0.1.0",
        description = "Country neighbors, shortest land routes, regional statistics and filtered search over an upstream countries provider.",
        license(name = "AGPL-3.0-or-later")
    ),
    paths(
        crate::routes::countries::get_neighbors,
        crate::routes::countries::search_countries,
        crate::routes::land_route::get_route,
        crate::routes::regions::get_region_stats,
    ),
    components(schemas(
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
        crate::routes::countries::SearchRequest,
    )),
    tags(
        (name = "countries", description = "Neighbor lookup and country search"),
        (name = "routes", description = "Shortest land routes"),
        (name = "regions", description = "Regional statistics"),
    )
)]
pub struct ApiDoc;

/// Serves the OpenAPI JSON spec at `/openapi.json`.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
