//! Scenario setup: register drivers and riders with random positions and request times.
//!
//! Positions are sampled uniformly from a square `[0, world_size)²`; rider request
//! events are spread uniformly over a configurable time window.

use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};

use bevy_ecs::prelude::{Resource, World};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::clock::{EventKind, EventSubject, SimulationClock, ONE_SEC_MS};
use crate::dispatcher::RideDispatcher;
use crate::error::Result;
use crate::geometry::Location;
use crate::model::{Driver, DriverId, Rider, RiderId};
use crate::registry::DriverRegistry;
use crate::telemetry::SimTelemetry;

/// Default time window for rider requests: 1 hour (simulation ms).
const DEFAULT_REQUEST_WINDOW_MS: u64 = 60 * 60 * 1000;

/// Resource wrapper that puts the dispatcher into the ECS world.
#[derive(Resource)]
pub struct DispatcherResource(pub RideDispatcher);

impl DispatcherResource {
    pub fn new(dispatcher: RideDispatcher) -> Self {
        Self(dispatcher)
    }
}

impl Deref for DispatcherResource {
    type Target = RideDispatcher;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DispatcherResource {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// A rider's trip request as it moves through the simulation.
#[derive(Debug, Clone)]
pub struct RideRequest {
    pub rider: Rider,
    pub source: Location,
    pub destination: Location,
    /// Simulation time of the first attempt.
    pub requested_at: u64,
    /// Simulation time the dispatcher booked a driver, once it has.
    pub matched_at: Option<u64>,
    pub attempts: u32,
}

impl RideRequest {
    pub fn new(rider: Rider, source: Location, destination: Location, requested_at: u64) -> Self {
        Self {
            rider,
            source,
            destination,
            requested_at,
            matched_at: None,
            attempts: 0,
        }
    }
}

/// Outstanding ride requests by rider. Entries are removed once the ride completes
/// or the rider gives up.
#[derive(Debug, Clone, Default, Resource)]
pub struct RideRequests(pub BTreeMap<RiderId, RideRequest>);

/// Travel and retry behavior used by the dispatch systems.
#[derive(Debug, Clone, Copy, Resource)]
pub struct DispatchSimConfig {
    /// Driver travel speed in distance units per simulated second.
    pub speed_units_per_sec: f64,
    /// Delay before an unmatched request is retried.
    pub retry_delay_secs: u64,
    /// Retries after the first attempt before a request is abandoned.
    pub max_request_retries: u32,
}

impl Default for DispatchSimConfig {
    fn default() -> Self {
        Self {
            speed_units_per_sec: 0.05,
            retry_delay_secs: 30,
            max_request_retries: 10,
        }
    }
}

impl DispatchSimConfig {
    /// Time to cover `distance`, never less than one second.
    pub fn travel_time_ms(&self, distance: f64) -> u64 {
        let secs = distance / self.speed_units_per_sec;
        if !secs.is_finite() {
            return u64::MAX;
        }
        ((secs * ONE_SEC_MS as f64).ceil() as u64).max(ONE_SEC_MS)
    }
}

/// Parameters for building a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioParams {
    pub num_drivers: usize,
    pub num_riders: usize,
    /// Random seed for reproducibility (optional; if None, uses entropy).
    pub seed: Option<u64>,
    /// Side length of the square that drivers, pickups and dropoffs are sampled from.
    pub world_size: f64,
    /// Rider RideRequested times are uniform in [0, request_window_ms].
    pub request_window_ms: u64,
    pub speed_units_per_sec: f64,
    pub retry_delay_secs: u64,
    pub max_request_retries: u32,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        let sim = DispatchSimConfig::default();
        Self {
            num_drivers: 20,
            num_riders: 100,
            seed: None,
            world_size: 100.0,
            request_window_ms: DEFAULT_REQUEST_WINDOW_MS,
            speed_units_per_sec: sim.speed_units_per_sec,
            retry_delay_secs: sim.retry_delay_secs,
            max_request_retries: sim.max_request_retries,
        }
    }
}

impl ScenarioParams {
    /// Parse params from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the request time window in minutes (riders request uniformly in [0, minutes]).
    pub fn with_request_window_mins(mut self, minutes: u64) -> Self {
        self.request_window_ms = minutes.saturating_mul(60).saturating_mul(ONE_SEC_MS);
        self
    }

    pub fn with_world_size(mut self, world_size: f64) -> Self {
        self.world_size = world_size;
        self
    }

    pub fn with_speed(mut self, speed_units_per_sec: f64) -> Self {
        self.speed_units_per_sec = speed_units_per_sec;
        self
    }

    /// Retry unmatched requests every `delay_secs`, at most `max_retries` times.
    pub fn with_retry_policy(mut self, delay_secs: u64, max_retries: u32) -> Self {
        self.retry_delay_secs = delay_secs;
        self.max_request_retries = max_retries;
        self
    }

    pub fn sim_config(&self) -> DispatchSimConfig {
        DispatchSimConfig {
            speed_units_per_sec: self.speed_units_per_sec,
            retry_delay_secs: self.retry_delay_secs,
            max_request_retries: self.max_request_retries,
        }
    }
}

fn random_location(rng: &mut StdRng, world_size: f64) -> Location {
    Location::new(rng.gen::<f64>() * world_size, rng.gen::<f64>() * world_size)
}

/// Build the scenario into `world`: a dispatcher with `num_drivers` drivers, one
/// request per rider, and a `RideRequested` event per rider on the clock.
///
/// Inserts [DispatcherResource], [RideRequests], [DispatchSimConfig],
/// [SimulationClock] and [SimTelemetry].
pub fn build_scenario(world: &mut World, params: ScenarioParams) -> Result<()> {
    let mut rng = params
        .seed
        .map(StdRng::seed_from_u64)
        .unwrap_or_else(StdRng::from_entropy);

    let drivers = (1..=params.num_drivers).map(|n| {
        let id = n as u32;
        Driver::new(
            DriverId(id),
            format!("Driver {id}"),
            random_location(&mut rng, params.world_size),
        )
    });
    let registry = DriverRegistry::with_drivers(drivers)?;

    let mut clock = SimulationClock::default();
    let mut requests = BTreeMap::new();
    for n in 1..=params.num_riders {
        let rider = Rider::new(RiderId(n as u32), format!("Rider {n}"));
        let source = random_location(&mut rng, params.world_size);
        let destination = random_location(&mut rng, params.world_size);
        let requested_at = rng.gen_range(0..=params.request_window_ms);

        clock.schedule_at(
            requested_at,
            EventKind::RideRequested,
            EventSubject::Rider(rider.id()),
        );
        requests.insert(
            rider.id(),
            RideRequest::new(rider, source, destination, requested_at),
        );
    }

    world.insert_resource(DispatcherResource::new(RideDispatcher::new(registry)));
    world.insert_resource(RideRequests(requests));
    world.insert_resource(params.sim_config());
    world.insert_resource(clock);
    world.insert_resource(SimTelemetry::default());
    Ok(())
}
