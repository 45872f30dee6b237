//! Great-circle distance via the Haversine formula.

use crate::models::Stop;

/// Mean Earth radius in statute miles. Swapping in 6371.0 yields kilometers.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Rounds to 2 decimal places, matching the reported precision of all
/// distances in this crate.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Great-circle distance between two stops in miles, rounded to 2 decimal
/// places.
///
/// Uses `atan2` rather than `asin` for the angular distance, which stays
/// numerically stable for near-zero and near-antipodal pairs. The function
/// is total over finite coordinates; NaN inputs propagate to the result —
/// range validation is the input layer's job, not this one's.
///
/// # Examples
///
/// ```
/// use dispatch_routing::distance::haversine_miles;
/// use dispatch_routing::models::Stop;
///
/// let nyc = Stop::new(1, 40.7128, -74.0060);
/// let la = Stop::new(2, 34.0522, -118.2437);
/// assert!((haversine_miles(&nyc, &la) - 2445.56).abs() < 0.5);
/// ```
pub fn haversine_miles(a: &Stop, b: &Stop) -> f64 {
    let lat_a = a.latitude().to_radians();
    let lat_b = b.latitude().to_radians();
    let delta_lat = (b.latitude() - a.latitude()).to_radians();
    let delta_lon = (b.longitude() - a.longitude()).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    round2(EARTH_RADIUS_MILES * c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nyc_to_la_reference() {
        let nyc = Stop::new(1, 40.7128, -74.0060);
        let la = Stop::new(2, 34.0522, -118.2437);
        assert!((haversine_miles(&nyc, &la) - 2445.56).abs() < 0.5);
    }

    #[test]
    fn test_symmetric() {
        let chi = Stop::new(1, 41.8781, -87.6298);
        let hou = Stop::new(2, 29.7604, -95.3698);
        assert_eq!(haversine_miles(&chi, &hou), haversine_miles(&hou, &chi));
        assert_eq!(haversine_miles(&chi, &hou), 941.94);
    }

    #[test]
    fn test_point_to_itself() {
        let p = Stop::new(1, 51.5074, -0.1278);
        assert_eq!(haversine_miles(&p, &p), 0.0);
    }

    #[test]
    fn test_two_decimal_rounding() {
        let a = Stop::new(1, 0.0, 0.0);
        let b = Stop::new(2, 0.0, 0.5);
        let d = haversine_miles(&a, &b);
        assert_eq!(d, 34.55);
        assert_eq!((d * 100.0).round() / 100.0, d);
    }

    #[test]
    fn test_nan_propagates() {
        let a = Stop::new(1, f64::NAN, 0.0);
        let b = Stop::new(2, 0.0, 0.0);
        assert!(haversine_miles(&a, &b).is_nan());
    }
}
