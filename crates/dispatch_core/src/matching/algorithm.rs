use crate::geometry::Location;
use crate::model::DriverId;

use super::types::MatchCandidate;

/// Trait for matching algorithms that pick a driver for a ride request.
///
/// The dispatcher collects the available drivers and hands them over as
/// `(driver_id, location)` pairs in registry order. The algorithm only decides;
/// reserving the chosen driver is the dispatcher's job.
///
/// # Examples
///
/// ```rust
/// use dispatch_core::geometry::Location;
/// use dispatch_core::matching::{MatchingAlgorithm, NearestAvailableMatching};
/// use dispatch_core::model::DriverId;
///
/// let algorithm = NearestAvailableMatching;
/// let candidate = algorithm
///     .find_match(
///         Location::new(0.0, 0.0),
///         &[
///             (DriverId(1), Location::new(5.0, 5.0)),
///             (DriverId(2), Location::new(1.0, 0.0)),
///         ],
///     )
///     .expect("a driver");
/// assert_eq!(candidate.driver_id, DriverId(2));
/// ```
pub trait MatchingAlgorithm: Send + Sync {
    /// Find a driver for a pickup at `source`.
    ///
    /// Returns `None` when `available_drivers` holds no acceptable candidate.
    fn find_match(
        &self,
        source: Location,
        available_drivers: &[(DriverId, Location)],
    ) -> Option<MatchCandidate>;
}
