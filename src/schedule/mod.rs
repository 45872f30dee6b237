//! Tour scheduling: per-leg timing and time-window compliance.

mod scheduler;

pub use scheduler::{RouteScheduler, STOP_DURATION_MINUTES};
