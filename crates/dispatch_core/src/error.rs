//! Dispatch error types.
//!
//! Every variant is an expected business outcome that callers branch on.

use thiserror::Error;

use crate::model::{DriverId, RideId, RiderId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("no driver available for rider {0}")]
    NoDriverAvailable(RiderId),

    #[error("rider {0} has no active ride")]
    NoActiveRide(RiderId),

    #[error("rider {rider} already has active ride {ride}")]
    AlreadyHasActiveRide { rider: RiderId, ride: RideId },

    #[error("driver {driver} is serving active ride {ride}")]
    DriverOnActiveRide { driver: DriverId, ride: RideId },

    #[error("driver {0} not found")]
    NotFound(DriverId),

    #[error("driver {0} is already registered")]
    DuplicateId(DriverId),
}

pub type Result<T> = std::result::Result<T, DispatchError>;
