//! # Shortest Land Route
//!
//! Breadth-first search over the directed [`AdjacencyGraph`].
//!
//! ## Algorithm
//!
//! Each queue entry carries the full path taken to reach its last node, so
//! the result needs no reconstruction pass. A node is marked visited when it
//! is enqueued, never when it is dequeued; every node therefore enters the
//! queue at most once, along a shortest path by edge count.
//!
//! The destination is checked while examining a node's neighbors, before
//! enqueueing. The path is returned as soon as the destination is
//! discovered, one layer earlier than a dequeue-time check would return it,
//! with the same result.
//!
//! ## Determinism
//!
//! Neighbors are examined in each country's declared border order, so the
//! choice among equal-length routes is reproducible.

use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::error::RouteError;
use crate::graph::AdjacencyGraph;
use crate::identity::CountryCode;

/// Result of a route search between two known countries.
///
/// `connected == false` always comes with an empty `route`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub connected: bool,
    /// Origin first, destination last; consecutive codes share a border.
    pub route: Vec<CountryCode>,
}

impl Route {
    /// The single-node route from a country to itself.
    pub fn trivial(code: CountryCode) -> Self {
        Self {
            connected: true,
            route: vec![code],
        }
    }

    /// No land route exists.
    pub fn disconnected() -> Self {
        Self {
            connected: false,
            route: Vec::new(),
        }
    }

    /// Number of border crossings; zero for trivial and disconnected routes.
    pub fn hops(&self) -> usize {
        self.route.len().saturating_sub(1)
    }
}

/// Find the shortest land route from `origin` to `destination`.
///
/// `origin == destination` returns [`Route::trivial`] without consulting the
/// graph. Otherwise both codes must be graph keys, origin checked first;
/// a missing code is [`RouteError::UnknownCountry`], distinct from
/// [`Route::disconnected`].
pub fn find_route(
    graph: &AdjacencyGraph,
    origin: &CountryCode,
    destination: &CountryCode,
) -> Result<Route, RouteError> {
    if origin == destination {
        return Ok(Route::trivial(origin.clone()));
    }

    let start = graph
        .key(origin)
        .ok_or_else(|| RouteError::UnknownCountry(origin.clone()))?;
    if !graph.contains(destination) {
        return Err(RouteError::UnknownCountry(destination.clone()));
    }

    let mut visited: HashSet<&CountryCode> = HashSet::from([start]);
    let mut queue: VecDeque<Vec<&CountryCode>> = VecDeque::from([vec![start]]);

    while let Some(path) = queue.pop_front() {
        let Some(&current) = path.last() else {
            continue;
        };
        for neighbor in graph.neighbors(current) {
            if neighbor == destination {
                let route = path
                    .iter()
                    .map(|&code| code.clone())
                    .chain(std::iter::once(neighbor.clone()))
                    .collect();
                return Ok(Route {
                    connected: true,
                    route,
                });
            }
            // Border codes that were never fetched are not traversable.
            if graph.contains(neighbor) && visited.insert(neighbor) {
                let mut next = path.clone();
                next.push(neighbor);
                queue.push_back(next);
            }
        }
    }

    Ok(Route::disconnected())
}
