use crate::geometry::Location;
use crate::model::DriverId;

use super::algorithm::MatchingAlgorithm;
use super::types::MatchCandidate;

/// Simple matching: the first available driver in registry order, regardless of distance.
///
/// Useful as a baseline for comparing against [super::NearestAvailableMatching] and
/// in tests that want a predictable driver without arranging positions.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleMatching;

impl MatchingAlgorithm for SimpleMatching {
    fn find_match(
        &self,
        source: Location,
        available_drivers: &[(DriverId, Location)],
    ) -> Option<MatchCandidate> {
        available_drivers
            .first()
            .map(|&(driver_id, location)| MatchCandidate {
                driver_id,
                pickup_distance: source.distance_to(&location),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_first_driver_even_when_farther() {
        let drivers = [
            (DriverId(4), Location::new(30.0, 40.0)),
            (DriverId(1), Location::new(0.0, 1.0)),
        ];
        let candidate = SimpleMatching
            .find_match(Location::new(0.0, 0.0), &drivers)
            .expect("match");
        assert_eq!(candidate.driver_id, DriverId(4));
        assert_eq!(candidate.pickup_distance, 50.0);
    }
}
