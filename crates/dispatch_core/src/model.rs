use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DriverId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RiderId(pub u32);

/// Allocated sequentially by the dispatcher, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RideId(pub u64);

impl fmt::Display for DriverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for RiderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for RideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A driver known to the [crate::registry::DriverRegistry].
///
/// Location and availability are only changed through the registry, so a
/// `Driver` handed out by reference always reflects registry state.
#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    id: DriverId,
    name: String,
    location: Location,
    available: bool,
}

impl Driver {
    /// New drivers start out available.
    pub fn new(id: DriverId, name: impl Into<String>, location: Location) -> Self {
        Self {
            id,
            name: name.into(),
            location,
            available: true,
        }
    }

    pub fn id(&self) -> DriverId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub(crate) fn set_location(&mut self, location: Location) {
        self.location = location;
    }

    pub(crate) fn set_available(&mut self, available: bool) {
        self.available = available;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rider {
    id: RiderId,
    name: String,
}

impl Rider {
    pub fn new(id: RiderId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> RiderId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RideState {
    Requested,
    Active,
    Ended,
}

/// A rider/driver pairing from pickup to dropoff.
///
/// The driver is held by id. Its current location and availability are looked
/// up through the registry, never frozen into the ride.
#[derive(Debug, Clone, PartialEq)]
pub struct Ride {
    id: RideId,
    rider: RiderId,
    driver: DriverId,
    source: Location,
    destination: Location,
    /// Distance from the driver to `source` when the ride was booked.
    pickup_distance: f64,
    state: RideState,
}

impl Ride {
    pub(crate) fn new(
        id: RideId,
        rider: RiderId,
        driver: DriverId,
        source: Location,
        destination: Location,
        pickup_distance: f64,
    ) -> Self {
        Self {
            id,
            rider,
            driver,
            source,
            destination,
            pickup_distance,
            state: RideState::Requested,
        }
    }

    pub fn id(&self) -> RideId {
        self.id
    }

    pub fn rider_id(&self) -> RiderId {
        self.rider
    }

    pub fn driver_id(&self) -> DriverId {
        self.driver
    }

    pub fn source(&self) -> Location {
        self.source
    }

    pub fn destination(&self) -> Location {
        self.destination
    }

    pub fn pickup_distance(&self) -> f64 {
        self.pickup_distance
    }

    /// Distance from pickup to dropoff.
    pub fn trip_distance(&self) -> f64 {
        self.source.distance_to(&self.destination)
    }

    pub fn state(&self) -> RideState {
        self.state
    }

    pub fn is_completed(&self) -> bool {
        self.state == RideState::Ended
    }

    pub(crate) fn activate(&mut self) {
        debug_assert_eq!(self.state, RideState::Requested, "only requested rides activate");
        self.state = RideState::Active;
    }

    pub(crate) fn complete(&mut self) {
        debug_assert_eq!(self.state, RideState::Active, "only active rides end");
        self.state = RideState::Ended;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_driver_is_available() {
        let driver = Driver::new(DriverId(1), "Driver A", Location::new(2.0, 3.0));
        assert!(driver.is_available());
        assert_eq!(driver.name(), "Driver A");
        assert_eq!(driver.location(), Location::new(2.0, 3.0));
    }

    #[test]
    fn rider_exposes_id_and_name() {
        let rider = Rider::new(RiderId(7), "Rider Seven");
        assert_eq!(rider.id(), RiderId(7));
        assert_eq!(rider.name(), "Rider Seven");
        assert_eq!(rider.clone(), rider);
    }

    #[test]
    fn ride_moves_through_lifecycle() {
        let mut ride = Ride::new(
            RideId(1),
            RiderId(100),
            DriverId(1),
            Location::new(3.0, 3.0),
            Location::new(6.0, 7.0),
            1.0,
        );
        assert_eq!(ride.state(), RideState::Requested);
        assert!(!ride.is_completed());

        ride.activate();
        assert_eq!(ride.state(), RideState::Active);
        assert!(!ride.is_completed());

        ride.complete();
        assert_eq!(ride.state(), RideState::Ended);
        assert!(ride.is_completed());
        assert_eq!(ride.trip_distance(), 5.0);
    }
}
