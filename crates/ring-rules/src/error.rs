use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("probability {0} outside [0, 1]")]
    ProbabilityOutOfRange(f64),

    #[error("max velocity must be at least 1")]
    ZeroMaxVelocity,

    #[error("{what} length {got} does not match light count {expected}")]
    LightCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("light position {position} outside road of length {road_length}")]
    LightOutOfRange { position: u32, road_length: u32 },

    #[error("two lights configured at cell {0}")]
    DuplicateLight(u32),

    #[error("light {light} has a zero-length {what} phase")]
    ZeroPhase { light: usize, what: &'static str },

    #[error("configuration error: {0}")]
    Config(String),
}

pub type RuleResult<T> = Result<T, RuleError>;
