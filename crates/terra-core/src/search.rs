//! # Country Search
//!
//! Conjunctive filtering over a country set. Filters apply in order:
//! population lower bound, population upper bound (both inclusive),
//! language set, region. The language filter is satisfied by any overlap
//! with the requested names and is skipped when the set is empty.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::country::CountryRecord;
use crate::identity::{CountryCode, Region};

/// Search criteria. The default matches every country.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub min_population: Option<u64>,
    pub max_population: Option<u64>,
    /// Language display names; empty means no language filter.
    pub languages: BTreeSet<String>,
    pub region: Option<Region>,
}

impl SearchFilters {
    /// True if `country` passes every filter.
    pub fn matches(&self, country: &CountryRecord) -> bool {
        if self.min_population.is_some_and(|min| country.population < min) {
            return false;
        }
        if self.max_population.is_some_and(|max| country.population > max) {
            return false;
        }
        if !self.languages.is_empty()
            && !country
                .languages
                .values()
                .any(|name| self.languages.contains(name))
        {
            return false;
        }
        // Records fetched without a region are never excluded here; the
        // upstream region endpoint has already filtered them.
        match (self.region, country.region) {
            (Some(wanted), Some(actual)) => wanted == actual,
            _ => true,
        }
    }
}

/// One matching country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub name: Option<String>,
    pub code: CountryCode,
}

/// Matching countries in fetch order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub total: usize,
    pub countries: Vec<SearchHit>,
}

/// Apply `filters` to `countries`.
pub fn search(countries: &[CountryRecord], filters: &SearchFilters) -> SearchResult {
    let hits: Vec<SearchHit> = countries
        .iter()
        .filter(|c| filters.matches(c))
        .map(|c| SearchHit {
            name: c.name.clone(),
            code: c.code.clone(),
        })
        .collect();
    SearchResult {
        total: hits.len(),
        countries: hits,
    }
}
