//! Telemetry / KPIs: records completed rides and unmatched requests for analysis.

use bevy_ecs::prelude::Resource;

use crate::model::{DriverId, RideId, RiderId};

/// One completed ride, recorded when the driver reaches the dropoff.
/// Timestamps are simulation milliseconds; use the helper methods for derived KPIs.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedRideRecord {
    pub ride_id: RideId,
    pub rider_id: RiderId,
    pub driver_id: DriverId,
    pub requested_at: u64,
    pub matched_at: u64,
    pub completed_at: u64,
    pub pickup_distance: f64,
    pub trip_distance: f64,
    /// Number of `request_ride` calls it took to get a driver.
    pub attempts: u32,
}

impl CompletedRideRecord {
    /// Time from the first request to the booking.
    pub fn time_to_match(&self) -> u64 {
        self.matched_at.saturating_sub(self.requested_at)
    }

    /// Time from the booking to the dropoff (pickup leg included).
    pub fn ride_duration(&self) -> u64 {
        self.completed_at.saturating_sub(self.matched_at)
    }
}

/// Collects simulation telemetry. Insert as a resource to record rides.
#[derive(Debug, Clone, Default, PartialEq, Resource)]
pub struct SimTelemetry {
    pub completed_rides: Vec<CompletedRideRecord>,
    /// Every `request_ride` call that failed with no driver available, retries included.
    pub unmatched_attempts: u64,
    /// Riders that gave up after exhausting their retries.
    pub abandoned_requests: Vec<RiderId>,
}

impl SimTelemetry {
    pub fn completed(&self) -> usize {
        self.completed_rides.len()
    }

    pub fn abandoned(&self) -> usize {
        self.abandoned_requests.len()
    }

    /// Share of settled requests that ended in a completed ride.
    pub fn completion_rate(&self) -> Option<f64> {
        let settled = self.completed() + self.abandoned();
        (settled > 0).then(|| self.completed() as f64 / settled as f64)
    }

    pub fn mean_time_to_match_ms(&self) -> Option<f64> {
        mean(self.completed_rides.iter().map(|r| r.time_to_match() as f64))
    }

    pub fn mean_pickup_distance(&self) -> Option<f64> {
        mean(self.completed_rides.iter().map(|r| r.pickup_distance))
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}
