//! Route, segment, and window status types.

use serde::{Deserialize, Serialize};

use super::time::{TimeOfDay, TourDuration};

/// Time-window compliance of an arrival at a stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowStatus {
    /// The stop has no configured window.
    NoWindow,
    /// Arrival before the window opens.
    TooEarly,
    /// Arrival within the window, bounds inclusive.
    OnTime,
    /// Arrival after the window closes.
    TooLate,
}

impl WindowStatus {
    /// Compliance as a tri-state flag: `None` when no window is configured,
    /// otherwise whether the arrival fell inside the window.
    pub fn within_window(&self) -> Option<bool> {
        match self {
            WindowStatus::NoWindow => None,
            WindowStatus::OnTime => Some(true),
            WindowStatus::TooEarly | WindowStatus::TooLate => Some(false),
        }
    }
}

/// One directed leg of a tour, with computed timing and compliance.
///
/// The closing leg back to the hub has no departure time (the tour ends
/// there) and always reports [`WindowStatus::NoWindow`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSegment {
    /// Index of the stop this leg departs from.
    pub from: usize,
    /// Index of the stop this leg arrives at.
    pub to: usize,
    /// Leg distance in miles.
    pub distance: f64,
    /// Driving time for this leg in minutes.
    pub travel_time_minutes: f64,
    /// Clock time of arrival at `to`.
    pub arrival_time: TimeOfDay,
    /// Clock time of departure from `to`, absent on the closing leg.
    pub departure_time: Option<TimeOfDay>,
    /// Compliance of `arrival_time` against the destination's window.
    pub window_status: WindowStatus,
    /// Tri-state compliance flag, consistent with `window_status`.
    pub within_window: Option<bool>,
}

/// A complete single-vehicle tour: hub, out through every stop, back to hub.
///
/// Built fresh on every optimization request and never mutated in place — a
/// new `Route` replaces the old one whenever the hub, start time, or speed
/// changes.
///
/// # Examples
///
/// ```
/// use dispatch_routing::models::Route;
///
/// let route = Route::new(0, "08:00".parse().unwrap());
/// assert_eq!(route.stop_order(), &[0]);
/// assert_eq!(route.total_distance(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    stop_order: Vec<usize>,
    segments: Vec<RouteSegment>,
    total_distance: f64,
    start_time: TimeOfDay,
    end_time: TimeOfDay,
    duration: TourDuration,
}

impl Route {
    /// Creates an empty route anchored at the given hub index.
    pub fn new(hub_index: usize, start_time: TimeOfDay) -> Self {
        Self {
            stop_order: vec![hub_index],
            segments: Vec::new(),
            total_distance: 0.0,
            start_time,
            end_time: start_time,
            duration: TourDuration::default(),
        }
    }

    /// Appends a leg, extending the stop order with its destination and
    /// accumulating its distance (used by the scheduler).
    pub fn push_segment(&mut self, segment: RouteSegment) {
        self.total_distance += segment.distance;
        self.stop_order.push(segment.to);
        self.segments.push(segment);
    }

    /// Sets the clock time the tour ends (used by the scheduler).
    pub fn set_end_time(&mut self, end_time: TimeOfDay) {
        self.end_time = end_time;
    }

    /// Sets the total tour duration (used by the scheduler).
    pub fn set_duration(&mut self, duration: TourDuration) {
        self.duration = duration;
    }

    /// Stop indices in visit order, starting and ending at the hub.
    pub fn stop_order(&self) -> &[usize] {
        &self.stop_order
    }

    /// The hub index this tour starts and ends at.
    pub fn hub_index(&self) -> usize {
        self.stop_order[0]
    }

    /// The ordered legs of the tour.
    pub fn segments(&self) -> &[RouteSegment] {
        &self.segments
    }

    /// Sum of all leg distances in miles.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Clock time the tour starts at the hub.
    pub fn start_time(&self) -> TimeOfDay {
        self.start_time
    }

    /// Clock time the tour arrives back at the hub.
    pub fn end_time(&self) -> TimeOfDay {
        self.end_time
    }

    /// Total driving plus dwell time.
    pub fn duration(&self) -> TourDuration {
        self.duration
    }
}
