//! Base error type shared by the `ring-*` crates.
//!
//! Sub-crates define their own error enums and either convert `RingError`
//! into them via `From` impls or wrap it as one variant.  Both patterns are
//! acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `ring-core` and a common base for sub-crates.
///
/// Every variant here describes a broken `RoadState` invariant or an invalid
/// piece of static configuration — there are no transient conditions.
#[derive(Debug, Error)]
pub enum RingError {
    #[error("cell {0} occupied by more than one vehicle")]
    DuplicatePosition(u32),

    #[error("position {position} outside road of length {road_length}")]
    PositionOutOfRange { position: u32, road_length: u32 },

    #[error("velocity {velocity} exceeds road length {road_length}")]
    VelocityOutOfRange { velocity: u32, road_length: u32 },

    #[error("{what} length {got} does not match vehicle count {expected}")]
    VehicleCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `ring-*` crates.
pub type RingResult<T> = Result<T, RingError>;
