//! Route construction: the nearest-neighbor tour heuristic.

mod nearest_neighbor;

pub use nearest_neighbor::{nearest_neighbor_order, optimize_route, OptimizeError};
