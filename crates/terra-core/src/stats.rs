//! # Region Statistics
//!
//! Count, population total and average, distinct language count, and the
//! most populous countries of one region.

use std::cmp::Reverse;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::country::CountryRecord;

/// Length of the most-populous list.
pub const TOP_COUNTRIES: usize = 5;

/// Name and population of one ranked country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationEntry {
    pub name: Option<String>,
    pub population: u64,
}

/// Aggregated statistics for the countries of one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionStats {
    pub total_countries: usize,
    pub total_population: u64,
    pub average_population: f64,
    /// Distinct language display names across the region.
    pub unique_languages: usize,
    /// Descending by population; ties keep fetch order.
    pub top_5_countries_by_population: Vec<PopulationEntry>,
}

impl RegionStats {
    /// Compute statistics, or `None` for an empty region.
    pub fn compute(countries: &[CountryRecord]) -> Option<Self> {
        if countries.is_empty() {
            return None;
        }

        let total_countries = countries.len();
        let total_population = countries
            .iter()
            .fold(0u64, |acc, c| acc.saturating_add(c.population));

        let languages: BTreeSet<&str> = countries
            .iter()
            .flat_map(|c| c.languages.values().map(String::as_str))
            .collect();

        // `sort_by_key` is stable, so equal populations keep fetch order.
        let mut ranked: Vec<&CountryRecord> = countries.iter().collect();
        ranked.sort_by_key(|c| Reverse(c.population));
        let top = ranked
            .into_iter()
            .take(TOP_COUNTRIES)
            .map(|c| PopulationEntry {
                name: c.name.clone(),
                population: c.population,
            })
            .collect();

        Some(Self {
            total_countries,
            total_population,
            average_population: total_population as f64 / total_countries as f64,
            unique_languages: languages.len(),
            top_5_countries_by_population: top,
        })
    }
}
