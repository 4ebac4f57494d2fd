//! # Land-Border Adjacency Graph
//!
//! Maps each fetched country code to the codes it declares as land
//! borders. Edges are directed exactly as the upstream data declares them:
//! A listing B does not imply B lists A, and the graph does not
//! symmetrize. A border code that was never fetched as a key stays in the
//! neighbor list but is not traversable.

use std::collections::HashMap;

use crate::country::CountryRecord;
use crate::identity::CountryCode;

/// Country code → ordered, de-duplicated list of bordering codes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    edges: HashMap<CountryCode, Vec<CountryCode>>,
}

impl AdjacencyGraph {
    /// Build the graph from a bulk fetch. Later records win on duplicate codes.
    pub fn build(countries: &[CountryRecord]) -> Self {
        Self::from_borders(
            countries
                .iter()
                .map(|c| (c.code.clone(), c.borders.iter().cloned())),
        )
    }

    /// Build from `(code, borders)` pairs. Declared order is kept;
    /// repeated border entries are dropped.
    pub fn from_borders<I, B>(entries: I) -> Self
    where
        I: IntoIterator<Item = (CountryCode, B)>,
        B: IntoIterator<Item = CountryCode>,
    {
        let edges = entries
            .into_iter()
            .map(|(code, borders)| {
                let mut list: Vec<CountryCode> = Vec::new();
                for border in borders {
                    if !list.contains(&border) {
                        list.push(border);
                    }
                }
                (code, list)
            })
            .collect();
        Self { edges }
    }

    /// True if `code` was present in the source data.
    pub fn contains(&self, code: &CountryCode) -> bool {
        self.edges.contains_key(code)
    }

    /// The graph's own copy of `code`, if present.
    pub(crate) fn key(&self, code: &CountryCode) -> Option<&CountryCode> {
        self.edges.get_key_value(code).map(|(k, _)| k)
    }

    /// Declared borders of `code`; empty if `code` is absent.
    pub fn neighbors(&self, code: &CountryCode) -> &[CountryCode] {
        self.edges.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of countries (keys).
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
