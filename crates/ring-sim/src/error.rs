use ring_core::RingError;
use ring_rules::RuleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("road length must be positive")]
    ZeroRoadLength,

    #[error("vehicle count {count} exceeds road length {road_length}")]
    TooManyVehicles { count: usize, road_length: u32 },

    #[error("detector window [{start}, {end}] invalid for road of length {road_length}")]
    WindowOutOfBounds { start: u32, end: u32, road_length: u32 },

    /// Initial-state validation failure at construction time.
    #[error(transparent)]
    State(#[from] RingError),

    /// Rule construction failure, for callers wiring engine and rule
    /// together in one place (e.g. replication setup).
    #[error(transparent)]
    Rule(#[from] RuleError),

    /// A rule produced a state that breaks the `RoadState` invariants.
    /// Fatal: the engine surfaces it immediately instead of continuing with
    /// corrupted state.
    #[error("rule produced an invalid state at step {step}: {source}")]
    Invariant { step: u64, source: RingError },
}

pub type SimResult<T> = Result<T, SimError>;
