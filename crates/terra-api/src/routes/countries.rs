//! # Country Routes
//!
//! ## Endpoints
//!
//! - `GET /countries/{code}/neighbors` — bordering countries, combined
//!   population, and shared-language neighbors
//! - `POST /countries/search` — population / language / region filtering

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use terra_core::{search, CountryCode, NeighborSummary, Region, SearchFilters, SearchResult};
use utoipa::ToSchema;

use crate::error::AppError;
use crate::extractors::{extract_validated_json, Validate};
use crate::state::AppState;

/// Fields requested from the bulk endpoint for an unscoped search.
const SEARCH_FIELDS: &[&str] = &["name", "population", "languages", "region"];

// ── Request DTOs ────────────────────────────────────────────────────

/// Search filters. Every field is optional; an empty object matches all countries.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Inclusive lower population bound.
    #[serde(default)]
    pub min_population: Option<u64>,
    /// Inclusive upper population bound.
    #[serde(default)]
    pub max_population: Option<u64>,
    /// Language display names; a country matches if it speaks any of them.
    #[serde(default)]
    pub languages: Option<Vec<String>>,
    /// Region name (Africa, Americas, Asia, Europe, Oceania), case-insensitive.
    #[serde(default)]
    pub region: Option<String>,
}

impl Validate for SearchRequest {
    fn validate(&self) -> Result<(), String> {
        if let (Some(min), Some(max)) = (self.min_population, self.max_population) {
            if min > max {
                return Err(format!(
                    "minPopulation ({min}) must not exceed maxPopulation ({max})"
                ));
            }
        }
        Ok(())
    }
}

impl SearchRequest {
    /// Convert to core filters. A blank region means no region filter.
    fn into_filters(self) -> Result<SearchFilters, AppError> {
        let region = match self.region.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(Region::parse(raw)?),
        };
        Ok(SearchFilters {
            min_population: self.min_population,
            max_population: self.max_population,
            languages: self.languages.unwrap_or_default().into_iter().collect(),
            region,
        })
    }
}

// ── Router ──────────────────────────────────────────────────────────

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/countries/{code}/neighbors", get(get_neighbors))
        .route("/countries/search", post(search_countries))
}

// ── Handlers ────────────────────────────────────────────────────────

/// GET /countries/{code}/neighbors — Neighbor summary for one country.
#[utoipa::path(
    get,
    path = "/countries/{code}/neighbors",
    params(("code" = String, Path, description = "Country code (cca3, cca2 or ccn3)")),
    responses(
        (status = 200, description = "Neighbors, combined population, shared-language neighbors"),
        (status = 400, description = "Malformed country code", body = crate::error::ErrorBody),
        (status = 404, description = "Country not found", body = crate::error::ErrorBody),
        (status = 500, description = "Upstream failure", body = crate::error::ErrorBody),
    ),
    tag = "countries"
)]
pub async fn get_neighbors(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<NeighborSummary>, AppError> {
    let code = CountryCode::new(&code)?;
    let country = state
        .countries
        .fetch_by_code(&code)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("country {code} not found")))?;

    if country.borders.is_empty() {
        return Ok(Json(NeighborSummary::isolated(&country)));
    }

    let neighbors = state.countries.fetch_by_codes(&country.borders).await?;
    tracing::debug!(
        country = %country.code,
        declared = country.borders.len(),
        fetched = neighbors.len(),
        "neighbors fetched"
    );
    Ok(Json(NeighborSummary::compute(&country, &neighbors)))
}

/// POST /countries/search — Filter countries by population, language, region.
#[utoipa::path(
    post,
    path = "/countries/search",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Matching countries (name and code)"),
        (status = 400, description = "Malformed body or invalid region", body = crate::error::ErrorBody),
        (status = 404, description = "Region unknown to the upstream provider", body = crate::error::ErrorBody),
        (status = 422, description = "minPopulation exceeds maxPopulation", body = crate::error::ErrorBody),
        (status = 500, description = "Upstream failure", body = crate::error::ErrorBody),
    ),
    tag = "countries"
)]
pub async fn search_countries(
    State(state): State<AppState>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResult>, AppError> {
    let filters = extract_validated_json(body)?.into_filters()?;

    let countries = match filters.region {
        Some(region) => state
            .countries
            .fetch_by_region(region)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("region {region} not found")))?,
        None => state.countries.fetch_all(SEARCH_FIELDS).await?,
    };

    let result = search(&countries, &filters);
    tracing::debug!(scanned = countries.len(), matched = result.total, "search complete");
    Ok(Json(result))
}
