//! # Regional Statistics
//!
//! `GET /regions/{region}/stats` — country count, population totals,
//! distinct languages, and the five most populous countries of a region.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use terra_core::{Region, RegionStats};

use crate::error::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/regions/{region}/stats", get(get_region_stats))
}

/// GET /regions/{region}/stats — Aggregate statistics for one region.
#[utoipa::path(
    get,
    path = "/regions/{region}/stats",
    params(("region" = String, Path, description = "Africa, Americas, Asia, Europe or Oceania (case-insensitive)")),
    responses(
        (status = 200, description = "Region statistics"),
        (status = 400, description = "Not one of the queryable regions", body = crate::error::ErrorBody),
        (status = 404, description = "Region has no countries upstream", body = crate::error::ErrorBody),
        (status = 500, description = "Upstream failure", body = crate::error::ErrorBody),
    ),
    tag = "regions"
)]
pub async fn get_region_stats(
    State(state): State<AppState>,
    Path(region): Path<String>,
) -> Result<Json<RegionStats>, AppError> {
    let region = Region::parse(&region)?;
    let not_found = || AppError::NotFound(format!("region {region} not found"));

    let countries = state
        .countries
        .fetch_by_region(region)
        .await?
        .ok_or_else(not_found)?;
    let stats = RegionStats::compute(&countries).ok_or_else(not_found)?;

    tracing::debug!(%region, countries = stats.total_countries, "region stats computed");
    Ok(Json(stats))
}
