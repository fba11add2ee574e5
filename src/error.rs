use thiserror::Error;

use crate::base::Rank;

/// Errors reported by a hit list
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TopHitsError {
    /// The list cannot be built with these limits
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// No hit occupies this rank
    #[error("rank {rank} is out of range (the list holds {count} hits)")]
    OutOfRange { rank: Rank, count: usize },

    /// The hit storage could not grow; the scan cannot go on
    #[error("could not grow the hit storage beyond {requested} hits")]
    OutOfMemory { requested: usize },
}

pub type Result<T> = std::result::Result<T, TopHitsError>;
