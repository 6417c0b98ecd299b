//! Test helpers for common test setup and utilities.
//!
//! The demo fleet is the three-driver setup used by the `basic_dispatch` example
//! and the dispatch flow tests.

use crate::dispatcher::RideDispatcher;
use crate::geometry::Location;
use crate::model::{Driver, DriverId, Rider, RiderId};
use crate::registry::DriverRegistry;

pub const DEMO_SOURCE: Location = Location::new(3.0, 3.0);
pub const DEMO_DESTINATION: Location = Location::new(7.0, 8.0);

/// Drivers A at (2,3), B at (10,20) and C at (4,4), ids 1 to 3, all available.
pub fn demo_drivers() -> Vec<Driver> {
    vec![
        Driver::new(DriverId(1), "Driver A", Location::new(2.0, 3.0)),
        Driver::new(DriverId(2), "Driver B", Location::new(10.0, 20.0)),
        Driver::new(DriverId(3), "Driver C", Location::new(4.0, 4.0)),
    ]
}

/// # Panics
///
/// Panics if the demo fleet contains duplicate ids (should never happen).
pub fn demo_registry() -> DriverRegistry {
    DriverRegistry::with_drivers(demo_drivers()).expect("demo drivers have unique ids")
}

pub fn demo_dispatcher() -> RideDispatcher {
    RideDispatcher::new(demo_registry())
}

pub fn demo_rider() -> Rider {
    Rider::new(RiderId(100), "Rider One")
}
