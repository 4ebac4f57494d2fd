//! # terra-core — Foundational Types for terra
//!
//! Domain primitives and pure computation over country data fetched from
//! the upstream provider. Nothing in this crate performs I/O; every function
//! takes already-fetched records and returns a summarized result.
//!
//! ## Modules
//!
//! | Module        | Contents |
//! |---------------|----------|
//! | [`identity`]  | `CountryCode` newtype, `Region` enum |
//! | [`country`]   | `CountryRecord` |
//! | [`graph`]     | `AdjacencyGraph` built from border lists |
//! | [`route`]     | Breadth-first shortest land route |
//! | [`neighbors`] | Border population and shared-language aggregation |
//! | [`stats`]     | Region statistics |
//! | [`search`]    | Population / language / region filtering |
//!
//! ## Crate Policy
//!
//! - No dependencies on other `terra-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod country;
pub mod error;
pub mod graph;
pub mod identity;
pub mod neighbors;
pub mod route;
pub mod search;
pub mod stats;

// Re-export primary types for ergonomic imports.
pub use country::CountryRecord;
pub use error::{RouteError, ValidationError};
pub use graph::AdjacencyGraph;
pub use identity::{CountryCode, Region};
pub use neighbors::{NeighborInfo, NeighborSummary};
pub use route::{find_route, Route};
pub use search::{search, SearchFilters, SearchHit, SearchResult};
pub use stats::{PopulationEntry, RegionStats, TOP_COUNTRIES};
