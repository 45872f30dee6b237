//! Time-of-day and duration types.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

const MINUTES_PER_DAY: f64 = 24.0 * 60.0;

/// Error returned when a time string is not a valid 24-hour `HH:MM` value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected a 24-hour HH:MM time, got {0:?}")]
pub struct ParseTimeError(pub String);

/// A clock time, stored as a fractional minute-of-day in `[0, 1440)`.
///
/// Arithmetic wraps past midnight, so a departure late in the evening can
/// produce an arrival early the next morning.
///
/// # Examples
///
/// ```
/// use dispatch_routing::models::TimeOfDay;
///
/// let t: TimeOfDay = "08:30".parse().unwrap();
/// assert_eq!(t.minute_of_day(), 510.0);
/// assert_eq!(t.plus_minutes(45.0).to_string(), "09:15");
///
/// // Wraps past midnight
/// let late: TimeOfDay = "23:50".parse().unwrap();
/// assert_eq!(late.plus_minutes(20.0).to_string(), "00:10");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TimeOfDay {
    minutes: f64,
}

impl TimeOfDay {
    /// Creates a time from a minute-of-day count.
    ///
    /// Values outside `[0, 1440)` wrap into range. Returns `None` if the
    /// value is non-finite.
    pub fn from_minutes(minutes: f64) -> Option<Self> {
        if !minutes.is_finite() {
            return None;
        }
        Some(Self {
            minutes: minutes.rem_euclid(MINUTES_PER_DAY),
        })
    }

    /// Minute-of-day in `[0, 1440)`, fractional.
    pub fn minute_of_day(&self) -> f64 {
        self.minutes
    }

    /// Returns this time advanced by the given number of minutes, wrapping
    /// past midnight. Negative offsets wrap backwards.
    pub fn plus_minutes(&self, delta: f64) -> Self {
        Self {
            minutes: (self.minutes + delta).rem_euclid(MINUTES_PER_DAY),
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseTimeError(s.to_string());
        let (hours, minutes) = s.split_once(':').ok_or_else(err)?;
        let hours: u32 = hours.parse().map_err(|_| err())?;
        let minutes: u32 = minutes.parse().map_err(|_| err())?;
        if hours >= 24 || minutes >= 60 {
            return Err(err());
        }
        Ok(Self {
            minutes: f64::from(hours * 60 + minutes),
        })
    }
}

impl fmt::Display for TimeOfDay {
    /// Formats as zero-padded `HH:MM`, rounded to the nearest whole minute.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.minutes.round() as u32 % (24 * 60);
        write!(f, "{:02}:{:02}", whole / 60, whole % 60)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    /// Accepts either a 24-hour `HH:MM` string or a numeric minute-of-day.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Minutes(f64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Minutes(m) => {
                TimeOfDay::from_minutes(m).ok_or_else(|| D::Error::custom("non-finite minute-of-day"))
            }
            Repr::Text(s) => s.parse().map_err(D::Error::custom),
        }
    }
}

/// A route duration broken into whole hours and minutes.
///
/// # Examples
///
/// ```
/// use dispatch_routing::models::TourDuration;
///
/// let d = TourDuration::from_minutes(135.6);
/// assert_eq!(d.hours, 2);
/// assert_eq!(d.minutes, 16);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourDuration {
    /// Whole hours.
    pub hours: u32,
    /// Remaining minutes, `0..60`.
    pub minutes: u32,
}

impl TourDuration {
    /// Builds a duration from a total minute count, rounded to the nearest
    /// whole minute. Negative totals clamp to zero.
    pub fn from_minutes(total: f64) -> Self {
        let whole = total.round().max(0.0) as u32;
        Self {
            hours: whole / 60,
            minutes: whole % 60,
        }
    }

    /// Total whole minutes represented by this duration.
    pub fn total_minutes(&self) -> u32 {
        self.hours * 60 + self.minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let t: TimeOfDay = "09:00".parse().expect("valid");
        assert_eq!(t.minute_of_day(), 540.0);
        let t: TimeOfDay = "00:00".parse().expect("valid");
        assert_eq!(t.minute_of_day(), 0.0);
        let t: TimeOfDay = "23:59".parse().expect("valid");
        assert_eq!(t.minute_of_day(), 1439.0);
    }

    #[test]
    fn test_parse_invalid() {
        assert!("24:00".parse::<TimeOfDay>().is_err());
        assert!("12:60".parse::<TimeOfDay>().is_err());
        assert!("noon".parse::<TimeOfDay>().is_err());
        assert!("1230".parse::<TimeOfDay>().is_err());
        assert!("".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_from_minutes_wraps() {
        let t = TimeOfDay::from_minutes(1500.0).expect("finite");
        assert_eq!(t.minute_of_day(), 60.0);
        let t = TimeOfDay::from_minutes(-30.0).expect("finite");
        assert_eq!(t.minute_of_day(), 1410.0);
    }

    #[test]
    fn test_from_minutes_non_finite() {
        assert!(TimeOfDay::from_minutes(f64::NAN).is_none());
        assert!(TimeOfDay::from_minutes(f64::INFINITY).is_none());
    }

    #[test]
    fn test_plus_minutes_wraps_midnight() {
        let t: TimeOfDay = "23:50".parse().expect("valid");
        let next = t.plus_minutes(25.0);
        assert_eq!(next.minute_of_day(), 15.0);
    }

    #[test]
    fn test_display_rounds() {
        let t = TimeOfDay::from_minutes(549.6).expect("finite");
        assert_eq!(t.to_string(), "09:10");
        let t = TimeOfDay::from_minutes(1439.7).expect("finite");
        assert_eq!(t.to_string(), "00:00");
    }

    #[test]
    fn test_ordering() {
        let a: TimeOfDay = "08:30".parse().expect("valid");
        let b: TimeOfDay = "09:00".parse().expect("valid");
        assert!(a < b);
    }

    #[test]
    fn test_serde_string_and_number() {
        let t: TimeOfDay = serde_json::from_str("\"10:30\"").expect("string form");
        assert_eq!(t.minute_of_day(), 630.0);
        let t: TimeOfDay = serde_json::from_str("630").expect("numeric form");
        assert_eq!(t.minute_of_day(), 630.0);
        assert_eq!(serde_json::to_string(&t).expect("serialize"), "\"10:30\"");
    }

    #[test]
    fn test_tour_duration() {
        let d = TourDuration::from_minutes(0.0);
        assert_eq!(d, TourDuration { hours: 0, minutes: 0 });
        let d = TourDuration::from_minutes(735.98);
        assert_eq!(d.hours, 12);
        assert_eq!(d.minutes, 16);
        assert_eq!(d.total_minutes(), 736);
    }
}
