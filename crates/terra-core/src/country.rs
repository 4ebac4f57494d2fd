//! Country records as consumed by the aggregators.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::identity::{CountryCode, Region};

/// One country, as fetched from the upstream provider.
///
/// Immutable once fetched; nothing is persisted between requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub code: CountryCode,
    /// Common name. Absent when the fetch was field-restricted.
    #[serde(default)]
    pub name: Option<String>,
    /// First listed capital, if any.
    #[serde(default)]
    pub capital: Option<String>,
    #[serde(default)]
    pub population: u64,
    /// Language code → display name. Only the display names matter.
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    #[serde(default)]
    pub region: Option<Region>,
    /// Bordering country codes in upstream order.
    #[serde(default)]
    pub borders: Vec<CountryCode>,
}

impl CountryRecord {
    /// Minimal record with only a code; used by tests and field-restricted fetches.
    pub fn new(code: CountryCode) -> Self {
        Self {
            code,
            name: None,
            capital: None,
            population: 0,
            languages: BTreeMap::new(),
            region: None,
            borders: Vec::new(),
        }
    }

    /// Set of language display names.
    pub fn language_names(&self) -> BTreeSet<&str> {
        self.languages.values().map(String::as_str).collect()
    }

    /// True if the two records have at least one language display name in common.
    pub fn shares_language_with(&self, other: &CountryRecord) -> bool {
        let ours = self.language_names();
        other
            .languages
            .values()
            .any(|name| ours.contains(name.as_str()))
    }
}
