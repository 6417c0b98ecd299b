use bevy_ecs::prelude::{Res, ResMut};
use tracing::{info, warn};

use crate::clock::{CurrentEvent, EventKind, EventSubject, SimulationClock};
use crate::error::DispatchError;
use crate::scenario::{DispatchSimConfig, DispatcherResource, RideRequests};
use crate::telemetry::SimTelemetry;

/// Handles `RideRequested`: asks the dispatcher for a driver and schedules the
/// dropoff, or retries later when nobody is available. A request that fails for
/// any other reason is abandoned.
pub fn ride_requested_system(
    event: Res<CurrentEvent>,
    config: Res<DispatchSimConfig>,
    mut clock: ResMut<SimulationClock>,
    mut dispatcher: ResMut<DispatcherResource>,
    mut requests: ResMut<RideRequests>,
    mut telemetry: ResMut<SimTelemetry>,
) {
    if event.0.kind != EventKind::RideRequested {
        return;
    }
    let EventSubject::Rider(rider_id) = event.0.subject;

    let Some(request) = requests.0.get_mut(&rider_id) else {
        warn!(rider = %rider_id, "ride requested by unknown rider");
        return;
    };
    request.attempts += 1;

    match dispatcher.request_ride(&request.rider, request.source, request.destination) {
        Ok(ride) => {
            request.matched_at = Some(clock.now());
            let travel_ms = config.travel_time_ms(ride.pickup_distance() + ride.trip_distance());
            clock.schedule_in(travel_ms, EventKind::RideEnded, event.0.subject);
        }
        Err(DispatchError::NoDriverAvailable(_)) => {
            telemetry.unmatched_attempts += 1;
            if request.attempts > config.max_request_retries {
                info!(rider = %rider_id, attempts = request.attempts, "rider gave up waiting for a driver");
                requests.0.remove(&rider_id);
                telemetry.abandoned_requests.push(rider_id);
            } else {
                clock.schedule_in_secs(
                    config.retry_delay_secs,
                    EventKind::RideRequested,
                    event.0.subject,
                );
            }
        }
        Err(err) => {
            // Retrying cannot change the outcome of any other rejection.
            warn!(rider = %rider_id, %err, "ride request rejected, abandoning it");
            requests.0.remove(&rider_id);
            telemetry.abandoned_requests.push(rider_id);
        }
    }
}
