pub mod clock;
pub mod dispatcher;
pub mod error;
pub mod geometry;
pub mod matching;
pub mod model;
pub mod registry;
pub mod runner;
pub mod scenario;
pub mod systems;
pub mod telemetry;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;

pub use dispatcher::RideDispatcher;
pub use error::{DispatchError, Result};
pub use geometry::Location;
pub use model::{Driver, DriverId, Ride, RideId, RideState, Rider, RiderId};
pub use registry::DriverRegistry;
