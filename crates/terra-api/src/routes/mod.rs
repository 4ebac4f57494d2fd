//! # API Route Modules
//!
//! - `countries` — neighbor lookup and filtered search.
//! - `land_route` — shortest land route between two countries.
//! - `regions` — regional statistics.
//!
//! Every handler fetches fresh data from the upstream provider through
//! `terra-client` and delegates computation to `terra-core`.

pub mod countries;
pub mod land_route;
pub mod regions;
