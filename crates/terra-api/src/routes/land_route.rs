//! # Land Route
//!
//! `GET /route?from={code}&to={code}` — shortest overland path between two
//! countries, computed by breadth-first search over the border graph of a
//! fresh `/all?fields=cca3,borders` snapshot.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use terra_core::{find_route, AdjacencyGraph, CountryCode, Route};
use utoipa::IntoParams;

use crate::error::AppError;
use crate::extractors::extract_query;
use crate::state::AppState;

/// Fields needed to build the border graph.
const GRAPH_FIELDS: &[&str] = &["cca3", "borders"];

/// Query parameters for the route lookup.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RouteQuery {
    /// Origin country code.
    pub from: String,
    /// Destination country code.
    pub to: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/route", get(get_route))
}

/// GET /route — Shortest land route between two countries.
#[utoipa::path(
    get,
    path = "/route",
    params(RouteQuery),
    responses(
        (status = 200, description = "Route found, or connected=false with an empty route"),
        (status = 400, description = "Missing or malformed country code", body = crate::error::ErrorBody),
        (status = 404, description = "Origin or destination not found", body = crate::error::ErrorBody),
        (status = 500, description = "Upstream failure", body = crate::error::ErrorBody),
    ),
    tag = "routes"
)]
pub async fn get_route(
    State(state): State<AppState>,
    query: Result<Query<RouteQuery>, QueryRejection>,
) -> Result<Json<Route>, AppError> {
    let query = extract_query(query)?;
    let origin = CountryCode::new(&query.from)?;
    let destination = CountryCode::new(&query.to)?;

    if origin == destination {
        return Ok(Json(Route::trivial(origin)));
    }

    let countries = state.countries.fetch_all(GRAPH_FIELDS).await?;
    let graph = AdjacencyGraph::build(&countries);
    let route = find_route(&graph, &origin, &destination)?;

    tracing::info!(
        from = %origin,
        to = %destination,
        connected = route.connected,
        hops = route.hops(),
        graph_size = graph.len(),
        "land route computed"
    );
    Ok(Json(route))
}
