//! Route scheduler that computes per-leg timing and window compliance.

use crate::distance::DistanceMatrix;
use crate::models::{Route, RouteSegment, Stop, TimeOfDay, TourDuration, WindowStatus};

/// Fixed loading/unloading dwell at each visited stop, in minutes.
///
/// The closing leg back to the hub contributes no dwell — the vehicle does
/// not restart service there.
pub const STOP_DURATION_MINUTES: f64 = 15.0;

/// Turns a visiting order into a fully annotated [`Route`]: per-leg travel
/// time, arrival and departure clock times, and time-window compliance.
///
/// All clock arithmetic wraps past midnight. Scheduling is a pure function
/// of the inputs; rebuilding the same order yields a bit-identical route.
///
/// # Examples
///
/// ```
/// use dispatch_routing::distance::DistanceMatrix;
/// use dispatch_routing::models::Stop;
/// use dispatch_routing::schedule::RouteScheduler;
///
/// let stops = vec![Stop::new(1, 0.0, 0.0), Stop::new(2, 0.0, 0.5)];
/// // 30 miles each way at 60 mph = 30 minutes per leg
/// let dm = DistanceMatrix::from_data(2, vec![0.0, 30.0, 30.0, 0.0]).unwrap();
///
/// let scheduler = RouteScheduler::new(&stops, &dm, 0, 60.0);
/// let route = scheduler.build_route(&[1], "08:00".parse().unwrap());
/// assert_eq!(route.segments()[0].arrival_time.to_string(), "08:30");
/// assert_eq!(route.end_time().to_string(), "09:15");
/// ```
pub struct RouteScheduler<'a> {
    stops: &'a [Stop],
    distances: &'a DistanceMatrix,
    hub_index: usize,
    speed_mph: f64,
}

impl<'a> RouteScheduler<'a> {
    /// Creates a scheduler for the given stop set, matrix, hub, and average
    /// travel speed in miles per hour.
    ///
    /// The speed must be positive; [`optimize_route`](crate::optimizer::optimize_route)
    /// rejects anything else before constructing a scheduler.
    pub fn new(
        stops: &'a [Stop],
        distances: &'a DistanceMatrix,
        hub_index: usize,
        speed_mph: f64,
    ) -> Self {
        Self {
            stops,
            distances,
            hub_index,
            speed_mph,
        }
    }

    fn travel_minutes(&self, distance: f64) -> f64 {
        distance / self.speed_mph * 60.0
    }

    /// Builds an annotated route that leaves the hub at `start_time`, visits
    /// `visit_order` in sequence, and closes back at the hub.
    ///
    /// The order must not contain the hub. Every visited stop gets a
    /// [`STOP_DURATION_MINUTES`] dwell between arrival and departure; the
    /// closing leg has no departure and always reports
    /// [`WindowStatus::NoWindow`].
    pub fn build_route(&self, visit_order: &[usize], start_time: TimeOfDay) -> Route {
        let mut route = Route::new(self.hub_index, start_time);
        let mut current = self.hub_index;
        let mut current_time = start_time;

        for &next in visit_order {
            let distance = self.distances.get(current, next);
            let travel = self.travel_minutes(distance);
            let arrival = current_time.plus_minutes(travel);
            let departure = arrival.plus_minutes(STOP_DURATION_MINUTES);

            let status = match self.stops[next].time_window() {
                Some(tw) => tw.status_for(arrival),
                None => WindowStatus::NoWindow,
            };

            route.push_segment(RouteSegment {
                from: current,
                to: next,
                distance,
                travel_time_minutes: travel,
                arrival_time: arrival,
                departure_time: Some(departure),
                window_status: status,
                within_window: status.within_window(),
            });

            current = next;
            current_time = departure;
        }

        // Closing leg back to the hub
        let distance = self.distances.get(current, self.hub_index);
        let travel = self.travel_minutes(distance);
        let arrival = current_time.plus_minutes(travel);
        route.push_segment(RouteSegment {
            from: current,
            to: self.hub_index,
            distance,
            travel_time_minutes: travel,
            arrival_time: arrival,
            departure_time: None,
            window_status: WindowStatus::NoWindow,
            within_window: None,
        });
        route.set_end_time(arrival);

        let total_travel: f64 = route.segments().iter().map(|s| s.travel_time_minutes).sum();
        let total_dwell = visit_order.len() as f64 * STOP_DURATION_MINUTES;
        route.set_duration(TourDuration::from_minutes(total_travel + total_dwell));

        route
    }
}
