//! Great-circle distance computation and the dense distance matrix.

mod haversine;
mod matrix;

pub use haversine::{haversine_miles, EARTH_RADIUS_MILES};
pub use matrix::DistanceMatrix;
