//! # Error Types
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! - [`ValidationError`] rejects caller input before any upstream call.
//! - [`RouteError`] reports a route endpoint missing from the adjacency graph.
//!   A disconnected pair is not an error; see [`crate::route::Route`].

use thiserror::Error;

use crate::identity::CountryCode;

/// Caller input that does not name a valid country code or region.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Country codes are 2-3 ASCII alphanumeric characters.
    #[error("invalid country code {0:?}: expected 2-3 alphanumeric characters")]
    InvalidCountryCode(String),

    /// Region is not one of Africa, Americas, Asia, Europe, Oceania.
    #[error("invalid region {0:?}: expected one of Africa, Americas, Asia, Europe, Oceania")]
    InvalidRegion(String),
}

/// Route search failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The code is not a key of the adjacency graph.
    #[error("country {0} not found")]
    UnknownCountry(CountryCode),
}
