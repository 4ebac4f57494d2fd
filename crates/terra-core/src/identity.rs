//! # Domain Identity Types
//!
//! `CountryCode` is the primary key used throughout: the upstream `cca3`
//! field, border entries, and route nodes are all `CountryCode`s.
//! `Region` is the fixed continental grouping used by the upstream
//! provider.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Uppercase country code (cca3 for graph nodes and borders).
///
/// Values parsed from caller input go through [`CountryCode::new`], which
/// normalizes case. Values deserialized from the upstream provider are
/// taken as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryCode(String);

impl CountryCode {
    /// Parse caller input: trim, uppercase, and require 2-3 ASCII
    /// alphanumeric characters.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let normalized = raw.trim().to_ascii_uppercase();
        let well_formed = (2..=3).contains(&normalized.len())
            && normalized.bytes().all(|b| b.is_ascii_alphanumeric());
        if !well_formed {
            return Err(ValidationError::InvalidCountryCode(raw.to_string()));
        }
        Ok(Self(normalized))
    }

    /// Access the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for CountryCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Continental region as reported by the upstream provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Africa,
    Americas,
    Asia,
    Europe,
    Oceania,
    /// Upstream regions outside the queryable set (e.g. `Antarctic`).
    #[serde(other)]
    Unknown,
}

impl Region {
    /// Regions accepted by [`Region::parse`].
    pub const QUERYABLE: [Region; 5] = [
        Region::Africa,
        Region::Americas,
        Region::Asia,
        Region::Europe,
        Region::Oceania,
    ];

    /// Case-insensitive match against the capitalized region names.
    /// Never yields [`Region::Unknown`].
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::QUERYABLE
            .into_iter()
            .find(|region| region.as_str().eq_ignore_ascii_case(raw))
            .ok_or_else(|| ValidationError::InvalidRegion(raw.to_string()))
    }

    /// Capitalized name, as used in upstream paths and responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Africa => "Africa",
            Self::Americas => "Americas",
            Self::Asia => "Asia",
            Self::Europe => "Europe",
            Self::Oceania => "Oceania",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
