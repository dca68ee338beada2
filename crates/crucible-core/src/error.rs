//! Error types for sampling requests.

use thiserror::Error;

/// A sampling request that violated its contract.
///
/// Every variant is detected before the engine consumes a single word,
/// so a rejected request leaves the output stream exactly where it was.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SampleError {
    /// An integer range request where `min > max`.
    #[error("invalid integer range: min {min} is greater than max {max}")]
    InvalidIntRange { min: i64, max: i64 },

    /// A float range request with unordered or non-finite bounds.
    #[error("invalid float range: [{min}, {max}] must be ordered finite bounds")]
    InvalidFloatRange { min: f64, max: f64 },

    /// A discrete selection over zero candidates.
    #[error("cannot select from an empty candidate list")]
    EmptyCandidates,

    /// A weighted selection whose weights are negative, non-finite, or
    /// sum to zero.
    #[error("weights must be finite, non-negative, and sum to a positive total")]
    DegenerateWeights,
}
