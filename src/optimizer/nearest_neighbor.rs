//! Nearest-neighbor tour construction.
//!
//! Builds the visiting order greedily: starting from the hub, always travel
//! to the closest unvisited stop, then close the tour back at the hub. This
//! is a local-greedy approximation — it carries no optimality guarantee and
//! may produce backtracking legs, which is accepted behavior.
//!
//! # Complexity
//!
//! O(n²) where n = number of stops.

use thiserror::Error;

use crate::distance::DistanceMatrix;
use crate::models::{Route, Stop, TimeOfDay};
use crate::schedule::RouteScheduler;

/// Invalid-configuration errors for a route optimization request.
///
/// All of these are deterministic validation failures surfaced to the caller
/// before any distance or timing formula runs; none are retryable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimizeError {
    /// Fewer than two stops — there is no tour to build.
    #[error("route planning needs at least 2 stops, got {0}")]
    InsufficientStops(usize),
    /// The distance matrix was built for a different stop count.
    #[error("distance matrix is {matrix}x{matrix} but there are {stops} stops")]
    MatrixSizeMismatch {
        /// Matrix dimension.
        matrix: usize,
        /// Stop count.
        stops: usize,
    },
    /// Hub index does not refer to a stop.
    #[error("hub index {hub} is out of bounds for {stops} stops")]
    HubOutOfBounds {
        /// Requested hub index.
        hub: usize,
        /// Stop count.
        stops: usize,
    },
    /// Average speed must be a positive, finite number of mph.
    #[error("average speed must be a positive number of mph, got {0}")]
    InvalidSpeed(f64),
}

/// Computes the greedy visiting order from the hub, excluding the hub itself.
///
/// Runs n−1 selection rounds; each round scans stop indices in ascending
/// order and keeps the first-found minimum, so equal distances resolve to the
/// lowest index. That tie-break is a fixed, documented policy — identical
/// inputs always produce the identical order.
///
/// # Panics
///
/// Panics if `hub_index` is out of bounds for the matrix.
pub fn nearest_neighbor_order(hub_index: usize, distances: &DistanceMatrix) -> Vec<usize> {
    let n = distances.size();
    let mut visited = vec![false; n];
    visited[hub_index] = true;

    let mut order = Vec::with_capacity(n.saturating_sub(1));
    let mut current = hub_index;

    for _ in 1..n {
        let mut nearest: Option<(usize, f64)> = None;
        for j in 0..n {
            if visited[j] {
                continue;
            }
            let d = distances.get(current, j);
            // strict `<` keeps the lowest index on ties
            if nearest.is_none_or(|(_, best)| d < best) {
                nearest = Some((j, d));
            }
        }
        let Some((next, _)) = nearest else { break };
        visited[next] = true;
        order.push(next);
        current = next;
    }

    order
}

/// Plans a tour: nearest-neighbor visiting order plus a full time schedule.
///
/// The returned [`Route`] starts and ends at `hub_index`, visits every other
/// stop exactly once, and annotates each leg with distance, travel time,
/// arrival/departure clock times, and time-window compliance. A fresh route
/// is built on every call; re-invoking with identical arguments yields a
/// bit-identical result.
///
/// # Errors
///
/// Rejects the request before touching any formula when there are fewer than
/// two stops, the matrix size doesn't match the stop count, the hub index is
/// out of bounds, or the speed is not a positive finite number.
///
/// # Examples
///
/// ```
/// use dispatch_routing::distance::DistanceMatrix;
/// use dispatch_routing::models::Stop;
/// use dispatch_routing::optimizer::optimize_route;
///
/// let stops = vec![
///     Stop::new(1, 40.7128, -74.0060),  // New York (hub)
///     Stop::new(2, 41.8781, -87.6298),  // Chicago
///     Stop::new(3, 29.7604, -95.3698),  // Houston
///     Stop::new(4, 34.0522, -118.2437), // Los Angeles
/// ];
/// let dm = DistanceMatrix::from_stops(&stops);
///
/// let route = optimize_route(0, &dm, &stops, "08:00".parse().unwrap(), 55.0).unwrap();
/// assert_eq!(route.stop_order().first(), Some(&0));
/// assert_eq!(route.stop_order().last(), Some(&0));
/// assert_eq!(route.segments().len(), 4);
/// ```
pub fn optimize_route(
    hub_index: usize,
    distances: &DistanceMatrix,
    stops: &[Stop],
    start_time: TimeOfDay,
    average_speed_mph: f64,
) -> Result<Route, OptimizeError> {
    let n = stops.len();
    if n < 2 {
        return Err(OptimizeError::InsufficientStops(n));
    }
    if distances.size() != n {
        return Err(OptimizeError::MatrixSizeMismatch {
            matrix: distances.size(),
            stops: n,
        });
    }
    if hub_index >= n {
        return Err(OptimizeError::HubOutOfBounds {
            hub: hub_index,
            stops: n,
        });
    }
    if !average_speed_mph.is_finite() || average_speed_mph <= 0.0 {
        return Err(OptimizeError::InvalidSpeed(average_speed_mph));
    }

    let order = nearest_neighbor_order(hub_index, distances);
    let scheduler = RouteScheduler::new(stops, distances, hub_index, average_speed_mph);
    Ok(scheduler.build_route(&order, start_time))
}
