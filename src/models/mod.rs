//! Domain model types for route planning.
//!
//! Provides the core abstractions: geographic stops with optional delivery
//! time windows, clock times that wrap past midnight, and the annotated
//! route produced by the optimizer.

mod route;
mod stop;
mod time;

pub use route::{Route, RouteSegment, WindowStatus};
pub use stop::{Stop, StopValidationError, TimeWindow};
pub use time::{ParseTimeError, TimeOfDay, TourDuration};
