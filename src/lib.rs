//! # dispatch-routing
//!
//! Single-vehicle route planning for dispatchers: pairwise great-circle
//! distances over a small set of geographic stops, and a time-aware
//! nearest-neighbor tour with arrival/departure times and time-window
//! compliance flags.
//!
//! Both entry points are pure, synchronous functions — no I/O, no shared
//! state, deterministic for identical inputs:
//!
//! - [`distance::DistanceMatrix::from_stops`] — symmetric Haversine distance
//!   matrix in miles
//! - [`optimizer::optimize_route`] — greedy tour from a chosen hub, with a
//!   full time/compliance schedule
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Stop, TimeWindow, TimeOfDay, Route)
//! - [`distance`] — Haversine formula and the dense distance matrix
//! - [`schedule`] — Per-leg timing and window compliance
//! - [`optimizer`] — Nearest-neighbor tour construction
//!
//! ## Example
//!
//! ```
//! use dispatch_routing::distance::DistanceMatrix;
//! use dispatch_routing::models::{Stop, TimeWindow};
//! use dispatch_routing::optimizer::optimize_route;
//!
//! let window = TimeWindow::new("09:00".parse().unwrap(), "17:00".parse().unwrap()).unwrap();
//! let stops = vec![
//!     Stop::new(1, 40.7128, -74.0060), // hub
//!     Stop::new(2, 41.8781, -87.6298).with_time_window(window),
//!     Stop::new(3, 29.7604, -95.3698),
//! ];
//!
//! let matrix = DistanceMatrix::from_stops(&stops);
//! let route = optimize_route(0, &matrix, &stops, "08:00".parse().unwrap(), 55.0).unwrap();
//!
//! assert_eq!(route.stop_order().first(), route.stop_order().last());
//! assert_eq!(route.segments().len(), stops.len());
//! ```

pub mod distance;
pub mod models;
pub mod optimizer;
pub mod schedule;
