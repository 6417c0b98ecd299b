use bevy_ecs::prelude::{Res, ResMut};
use tracing::warn;

use crate::clock::{CurrentEvent, EventKind, EventSubject, SimulationClock};
use crate::scenario::{DispatcherResource, RideRequests};
use crate::telemetry::{CompletedRideRecord, SimTelemetry};

/// Handles `RideEnded`: the driver has reached the dropoff, so the ride is ended
/// and archived in telemetry.
pub fn ride_ended_system(
    event: Res<CurrentEvent>,
    clock: Res<SimulationClock>,
    mut dispatcher: ResMut<DispatcherResource>,
    mut requests: ResMut<RideRequests>,
    mut telemetry: ResMut<SimTelemetry>,
) {
    if event.0.kind != EventKind::RideEnded {
        return;
    }
    let EventSubject::Rider(rider_id) = event.0.subject;

    let ride = match dispatcher.end_ride(rider_id) {
        Ok(ride) => ride,
        Err(err) => {
            warn!(rider = %rider_id, %err, "ride end rejected");
            return;
        }
    };

    let request = requests.0.remove(&rider_id);
    let requested_at = request.as_ref().map_or(0, |r| r.requested_at);
    telemetry.completed_rides.push(CompletedRideRecord {
        ride_id: ride.id(),
        rider_id,
        driver_id: ride.driver_id(),
        requested_at,
        matched_at: request
            .as_ref()
            .and_then(|r| r.matched_at)
            .unwrap_or(requested_at),
        completed_at: clock.now(),
        pickup_distance: ride.pickup_distance(),
        trip_distance: ride.trip_distance(),
        attempts: request.as_ref().map_or(1, |r| r.attempts),
    });
}
