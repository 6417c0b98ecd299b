use crate::model::DriverId;

/// A driver selected for a pickup, with the distance it has to cover to get there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchCandidate {
    pub driver_id: DriverId,
    pub pickup_distance: f64,
}
