use crate::geometry::Location;
use crate::model::DriverId;

use super::algorithm::MatchingAlgorithm;
use super::types::MatchCandidate;

/// Nearest-available matching: the driver closest to the pickup wins.
///
/// A single pass over the candidates keeps the running minimum. Only a strictly
/// smaller distance replaces the current best, so on a tie the driver that comes
/// first in registry order is kept.
///
/// Time complexity: O(n) in the number of available drivers.
#[derive(Debug, Default, Clone, Copy)]
pub struct NearestAvailableMatching;

impl MatchingAlgorithm for NearestAvailableMatching {
    fn find_match(
        &self,
        source: Location,
        available_drivers: &[(DriverId, Location)],
    ) -> Option<MatchCandidate> {
        let mut best: Option<MatchCandidate> = None;

        for &(driver_id, location) in available_drivers {
            let distance = source.distance_to(&location);
            // Non-finite coordinates never match.
            if !distance.is_finite() {
                continue;
            }

            match best {
                Some(current) if distance >= current.pickup_distance => {}
                _ => {
                    best = Some(MatchCandidate {
                        driver_id,
                        pickup_distance: distance,
                    })
                }
            }
        }

        best
    }
}
