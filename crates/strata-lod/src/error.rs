//! Error types for strata-lod.

use thiserror::Error;

/// Result type for strata-lod operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the boundaries of the LOD engine.
///
/// The resolvers themselves are total over their validated inputs; these
/// errors only come from constructing those inputs or a configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Zoom must be finite and strictly positive.
    #[error("invalid zoom {0}: expected a finite value greater than zero")]
    InvalidZoom(f64),

    /// Cognitive load must be finite and within [0, 1].
    #[error("invalid cognitive load {0}: expected a value in [0, 1]")]
    InvalidLoad(f64),

    /// Zoom thresholds must be positive and strictly increasing.
    #[error("zoom thresholds must be positive and strictly increasing, got {0:?}")]
    UnorderedThresholds([f64; 4]),

    /// A hysteresis band is negative or not finite.
    #[error("hysteresis band {index} is invalid: {value}")]
    InvalidBand { index: usize, value: f64 },

    /// Two adjacent dead zones touch or overlap.
    #[error("dead zones around boundaries {lower} and {upper} overlap")]
    OverlappingBands { lower: usize, upper: usize },

    /// The load gate threshold lies outside [0, 1].
    #[error("load gate threshold {0} is outside [0, 1]")]
    InvalidLoadThreshold(f64),

    /// A tier name did not match any known tier.
    #[error("unknown tier: {0}")]
    UnknownTier(String),
}
