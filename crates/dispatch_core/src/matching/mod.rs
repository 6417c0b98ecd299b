pub mod algorithm;
pub mod nearest;
pub mod simple;
pub mod types;

pub use algorithm::MatchingAlgorithm;
pub use nearest::NearestAvailableMatching;
pub use simple::SimpleMatching;
pub use types::MatchCandidate;
