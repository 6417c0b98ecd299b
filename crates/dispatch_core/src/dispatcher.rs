//! Ride dispatcher: matches requests to drivers and tracks one active ride per rider.
//!
//! The dispatcher owns the [DriverRegistry] it was built with and hands out only
//! shared references to it. Outside callers change drivers through the dispatcher's
//! own `*_driver*` methods. A booking flips the chosen driver to unavailable,
//! ending the ride moves the driver to the dropoff and frees it.

use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, info};

use crate::error::{DispatchError, Result};
use crate::geometry::Location;
use crate::matching::{MatchingAlgorithm, NearestAvailableMatching};
use crate::model::{Driver, DriverId, Ride, RideId, Rider, RiderId};
use crate::registry::DriverRegistry;

pub struct RideDispatcher {
    registry: DriverRegistry,
    algorithm: Box<dyn MatchingAlgorithm>,
    /// Active rides keyed by rider; ordered so iteration is deterministic.
    active_rides: BTreeMap<RiderId, Ride>,
    next_ride_id: u64,
}

impl RideDispatcher {
    /// Dispatcher using [NearestAvailableMatching].
    pub fn new(registry: DriverRegistry) -> Self {
        Self::with_algorithm(registry, Box::new(NearestAvailableMatching))
    }

    pub fn with_algorithm(registry: DriverRegistry, algorithm: Box<dyn MatchingAlgorithm>) -> Self {
        Self {
            registry,
            algorithm,
            active_rides: BTreeMap::new(),
            next_ride_id: 1,
        }
    }

    pub fn registry(&self) -> &DriverRegistry {
        &self.registry
    }

    pub fn register_driver(&mut self, driver: Driver) -> Result<()> {
        self.registry.register(driver)
    }

    /// Move a driver. Drivers on an active ride may be moved too; the ride
    /// only holds the driver id.
    pub fn update_driver_location(&mut self, driver: DriverId, location: Location) -> Result<()> {
        self.registry.update_location(driver, location)
    }

    /// Take a driver off or put it back on duty.
    ///
    /// Availability of a driver serving an active ride belongs to that ride, so
    /// the call fails with [DispatchError::DriverOnActiveRide] and nothing changes.
    pub fn set_driver_availability(&mut self, driver: DriverId, available: bool) -> Result<()> {
        if let Some(ride) = self.ride_served_by(driver) {
            return Err(DispatchError::DriverOnActiveRide {
                driver,
                ride: ride.id(),
            });
        }
        self.registry.set_availability(driver, available)
    }

    /// Book the best available driver for `rider`.
    ///
    /// Fails with [DispatchError::AlreadyHasActiveRide] if the rider is already on a
    /// ride and with [DispatchError::NoDriverAvailable] if nobody can be matched.
    /// Neither failure changes any state.
    pub fn request_ride(
        &mut self,
        rider: &Rider,
        source: Location,
        destination: Location,
    ) -> Result<&Ride> {
        if let Some(existing) = self.active_rides.get(&rider.id()) {
            return Err(DispatchError::AlreadyHasActiveRide {
                rider: rider.id(),
                ride: existing.id(),
            });
        }

        let available: Vec<(DriverId, Location)> = self
            .registry
            .list_available()
            .map(|driver| (driver.id(), driver.location()))
            .collect();

        let Some(candidate) = self.algorithm.find_match(source, &available) else {
            debug!(rider = %rider.id(), %source, candidates = available.len(), "no available driver");
            return Err(DispatchError::NoDriverAvailable(rider.id()));
        };

        self.registry.set_availability(candidate.driver_id, false)?;

        let mut ride = Ride::new(
            self.allocate_ride_id(),
            rider.id(),
            candidate.driver_id,
            source,
            destination,
            candidate.pickup_distance,
        );
        ride.activate();

        info!(
            ride = %ride.id(),
            rider = %rider.name(),
            driver = self.registry.get(candidate.driver_id).map(Driver::name).unwrap_or_default(),
            pickup_distance = candidate.pickup_distance,
            "ride booked"
        );

        Ok(self.active_rides.entry(rider.id()).or_insert(ride))
    }

    /// End the rider's active ride and hand the ended ride back.
    ///
    /// The driver is moved to the ride's destination and made available again.
    pub fn end_ride(&mut self, rider: RiderId) -> Result<Ride> {
        let (driver_id, destination) = match self.active_rides.get(&rider) {
            Some(ride) => (ride.driver_id(), ride.destination()),
            None => return Err(DispatchError::NoActiveRide(rider)),
        };

        self.registry.update_location(driver_id, destination)?;
        self.registry.set_availability(driver_id, true)?;

        let mut ride = self
            .active_rides
            .remove(&rider)
            .ok_or(DispatchError::NoActiveRide(rider))?;
        ride.complete();

        info!(ride = %ride.id(), %rider, driver = %driver_id, %destination, "ride ended");
        Ok(ride)
    }

    pub fn get_active_ride(&self, rider: RiderId) -> Option<&Ride> {
        self.active_rides.get(&rider)
    }

    /// Active rides ordered by rider id.
    pub fn active_rides(&self) -> impl Iterator<Item = &Ride> + '_ {
        self.active_rides.values()
    }

    /// Current state of the driver serving `ride`.
    pub fn driver_for(&self, ride: &Ride) -> Option<&Driver> {
        self.registry.get(ride.driver_id())
    }

    fn ride_served_by(&self, driver: DriverId) -> Option<&Ride> {
        self.active_rides
            .values()
            .find(|ride| ride.driver_id() == driver)
    }

    fn allocate_ride_id(&mut self) -> RideId {
        let id = RideId(self.next_ride_id);
        self.next_ride_id += 1;
        id
    }
}

impl fmt::Debug for RideDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RideDispatcher")
            .field("registry", &self.registry)
            .field("active_rides", &self.active_rides)
            .field("next_ride_id", &self.next_ride_id)
            .finish_non_exhaustive()
    }
}
