//! Stop and time window types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::route::WindowStatus;
use super::time::TimeOfDay;

/// Validation failures for user-supplied stop data.
///
/// These are caller-facing input errors, surfaced synchronously at
/// construction time. None are retryable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StopValidationError {
    /// Latitude outside `[-90, 90]` degrees.
    #[error("latitude {0} is outside the valid range [-90, 90]")]
    LatitudeOutOfRange(f64),
    /// Longitude outside `[-180, 180]` degrees.
    #[error("longitude {0} is outside the valid range [-180, 180]")]
    LongitudeOutOfRange(f64),
    /// Only one of window start / window end was supplied.
    #[error("a time window requires both a start and an end")]
    IncompleteTimeWindow,
    /// Window end is not strictly later than window start.
    #[error("time window end {end} must be later than start {start}")]
    WindowEndNotAfterStart {
        /// Supplied window start.
        start: TimeOfDay,
        /// Supplied window end.
        end: TimeOfDay,
    },
}

/// A delivery time window for a stop.
///
/// Arrival is compliant between `start` and `end` inclusive. The end must be
/// strictly later than the start within the same 24-hour cycle, enforced at
/// construction so a window is either whole or absent.
///
/// # Examples
///
/// ```
/// use dispatch_routing::models::{TimeWindow, WindowStatus};
///
/// let tw = TimeWindow::new("09:00".parse().unwrap(), "11:00".parse().unwrap()).unwrap();
/// assert_eq!(tw.status_for("08:30".parse().unwrap()), WindowStatus::TooEarly);
/// assert_eq!(tw.status_for("10:00".parse().unwrap()), WindowStatus::OnTime);
/// assert_eq!(tw.status_for("11:30".parse().unwrap()), WindowStatus::TooLate);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTimeWindow", into = "RawTimeWindow")]
pub struct TimeWindow {
    start: TimeOfDay,
    end: TimeOfDay,
}

/// Unvalidated wire form of [`TimeWindow`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawTimeWindow {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl From<TimeWindow> for RawTimeWindow {
    fn from(tw: TimeWindow) -> Self {
        Self {
            start: tw.start,
            end: tw.end,
        }
    }
}

impl TryFrom<RawTimeWindow> for TimeWindow {
    type Error = StopValidationError;

    fn try_from(raw: RawTimeWindow) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl TimeWindow {
    /// Creates a time window.
    ///
    /// Returns [`StopValidationError::WindowEndNotAfterStart`] unless
    /// `end > start`.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self, StopValidationError> {
        if end <= start {
            return Err(StopValidationError::WindowEndNotAfterStart { start, end });
        }
        Ok(Self { start, end })
    }

    /// Earliest compliant arrival time.
    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    /// Latest compliant arrival time.
    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    /// Classifies an arrival time against this window, bounds inclusive.
    pub fn status_for(&self, arrival: TimeOfDay) -> WindowStatus {
        if arrival < self.start {
            WindowStatus::TooEarly
        } else if arrival > self.end {
            WindowStatus::TooLate
        } else {
            WindowStatus::OnTime
        }
    }
}

/// A geographic stop on the dispatcher's list.
///
/// Coordinates are decimal degrees. A stop optionally carries a delivery
/// time window. Stops are immutable once constructed; the planning code only
/// ever reads them.
///
/// [`Stop::new`] trusts its input — the range checks belong to whatever layer
/// collects the data. [`Stop::validated`] is that layer's entry point: it
/// enforces coordinate ranges and the both-or-neither window rule.
///
/// # Examples
///
/// ```
/// use dispatch_routing::models::{Stop, TimeWindow};
///
/// let hub = Stop::new(1, 40.7128, -74.0060);
/// assert!(hub.time_window().is_none());
///
/// let tw = TimeWindow::new("09:00".parse().unwrap(), "17:00".parse().unwrap()).unwrap();
/// let stop = Stop::new(2, 41.8781, -87.6298).with_time_window(tw);
/// assert!(stop.time_window().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    id: u64,
    latitude: f64,
    longitude: f64,
    time_window: Option<TimeWindow>,
}

impl Stop {
    /// Creates a stop from pre-validated coordinates.
    pub fn new(id: u64, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            latitude,
            longitude,
            time_window: None,
        }
    }

    /// Sets a delivery time window for this stop.
    pub fn with_time_window(mut self, tw: TimeWindow) -> Self {
        self.time_window = Some(tw);
        self
    }

    /// Creates a stop from raw user input, validating coordinate ranges and
    /// the time window fields.
    ///
    /// The window must be supplied whole (both bounds) or not at all.
    pub fn validated(
        id: u64,
        latitude: f64,
        longitude: f64,
        window_start: Option<TimeOfDay>,
        window_end: Option<TimeOfDay>,
    ) -> Result<Self, StopValidationError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(StopValidationError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(StopValidationError::LongitudeOutOfRange(longitude));
        }
        let time_window = match (window_start, window_end) {
            (Some(start), Some(end)) => Some(TimeWindow::new(start, end)?),
            (None, None) => None,
            _ => return Err(StopValidationError::IncompleteTimeWindow),
        };
        let mut stop = Self::new(id, latitude, longitude);
        stop.time_window = time_window;
        Ok(stop)
    }

    /// Opaque stop identifier (assigned by the caller, unique per session).
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Delivery time window, if any.
    pub fn time_window(&self) -> Option<&TimeWindow> {
        self.time_window.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        s.parse().expect("valid time")
    }

    #[test]
    fn test_time_window_valid() {
        let tw = TimeWindow::new(t("09:00"), t("11:00")).expect("valid");
        assert_eq!(tw.start(), t("09:00"));
        assert_eq!(tw.end(), t("11:00"));
    }

    #[test]
    fn test_time_window_end_not_after_start() {
        assert!(matches!(
            TimeWindow::new(t("11:00"), t("09:00")),
            Err(StopValidationError::WindowEndNotAfterStart { .. })
        ));
        // Equal bounds are rejected too
        assert!(TimeWindow::new(t("09:00"), t("09:00")).is_err());
    }

    #[test]
    fn test_status_for_morning_window() {
        let tw = TimeWindow::new(t("09:00"), t("11:00")).expect("valid");
        assert_eq!(tw.status_for(t("08:30")), WindowStatus::TooEarly);
        assert_eq!(tw.status_for(t("10:00")), WindowStatus::OnTime);
        assert_eq!(tw.status_for(t("11:30")), WindowStatus::TooLate);
    }

    #[test]
    fn test_status_for_inclusive_bounds() {
        let tw = TimeWindow::new(t("09:00"), t("11:00")).expect("valid");
        assert_eq!(tw.status_for(t("09:00")), WindowStatus::OnTime);
        assert_eq!(tw.status_for(t("11:00")), WindowStatus::OnTime);
    }

    #[test]
    fn test_stop_new() {
        let s = Stop::new(7, 40.7128, -74.0060);
        assert_eq!(s.id(), 7);
        assert_eq!(s.latitude(), 40.7128);
        assert_eq!(s.longitude(), -74.0060);
        assert!(s.time_window().is_none());
    }

    #[test]
    fn test_validated_accepts_good_input() {
        let s = Stop::validated(1, 34.0522, -118.2437, Some(t("08:00")), Some(t("12:00")))
            .expect("valid");
        assert!(s.time_window().is_some());
        let s = Stop::validated(2, 0.0, 0.0, None, None).expect("valid");
        assert!(s.time_window().is_none());
    }

    #[test]
    fn test_validated_coordinate_ranges() {
        assert_eq!(
            Stop::validated(1, 90.5, 0.0, None, None),
            Err(StopValidationError::LatitudeOutOfRange(90.5))
        );
        assert_eq!(
            Stop::validated(1, 0.0, -180.01, None, None),
            Err(StopValidationError::LongitudeOutOfRange(-180.01))
        );
        // Boundary values are accepted
        assert!(Stop::validated(1, 90.0, 180.0, None, None).is_ok());
        assert!(Stop::validated(1, -90.0, -180.0, None, None).is_ok());
    }

    #[test]
    fn test_validated_incomplete_window() {
        assert_eq!(
            Stop::validated(1, 0.0, 0.0, Some(t("09:00")), None),
            Err(StopValidationError::IncompleteTimeWindow)
        );
        assert_eq!(
            Stop::validated(1, 0.0, 0.0, None, Some(t("11:00"))),
            Err(StopValidationError::IncompleteTimeWindow)
        );
    }

    #[test]
    fn test_time_window_serde_rejects_inverted() {
        let tw: Result<TimeWindow, _> =
            serde_json::from_str(r#"{"start":"11:00","end":"09:00"}"#);
        assert!(tw.is_err());
        let tw: TimeWindow =
            serde_json::from_str(r#"{"start":"09:00","end":"11:00"}"#).expect("valid");
        assert_eq!(tw.start(), t("09:00"));
    }
}
