//! # Neighbor Aggregation
//!
//! Summarizes a country's bordering neighbors: their name, capital and
//! population, the combined population of the country and all neighbors,
//! and which neighbors share at least one language display name with it.

use serde::{Deserialize, Serialize};

use crate::country::CountryRecord;

/// Public view of one neighbor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborInfo {
    pub name: Option<String>,
    pub capital: Option<String>,
    pub population: u64,
}

impl From<&CountryRecord> for NeighborInfo {
    fn from(record: &CountryRecord) -> Self {
        Self {
            name: record.name.clone(),
            capital: record.capital.clone(),
            population: record.population,
        }
    }
}

/// Aggregated neighbor view for one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborSummary {
    pub neighbors: Vec<NeighborInfo>,
    /// Population of the queried country plus every listed neighbor.
    pub total_border_population: u64,
    /// Names of neighbors sharing at least one language with the country.
    pub shared_language_neighbors: Vec<String>,
}

impl NeighborSummary {
    /// Summary for a country with no land borders. Needs no neighbor fetch.
    pub fn isolated(country: &CountryRecord) -> Self {
        Self {
            neighbors: Vec::new(),
            total_border_population: country.population,
            shared_language_neighbors: Vec::new(),
        }
    }

    /// Aggregate `neighbor_records` (in upstream response order) around `country`.
    ///
    /// Neighbors without a common name still count toward the population
    /// total but cannot be listed as shared-language neighbors.
    pub fn compute(country: &CountryRecord, neighbor_records: &[CountryRecord]) -> Self {
        if country.borders.is_empty() {
            return Self::isolated(country);
        }

        let total_border_population = neighbor_records
            .iter()
            .fold(country.population, |acc, n| acc.saturating_add(n.population));

        let shared_language_neighbors = neighbor_records
            .iter()
            .filter(|n| country.shares_language_with(n))
            .filter_map(|n| n.name.clone())
            .collect();

        Self {
            neighbors: neighbor_records.iter().map(NeighborInfo::from).collect(),
            total_border_population,
            shared_language_neighbors,
        }
    }
}
