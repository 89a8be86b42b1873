//! The `UpdateRule` trait — the main extension point for traffic models.

use ring_core::{RoadState, Timestep};

/// Green/red status of one traffic light at a given step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LightSignal {
    /// Cell the light guards.
    pub position: u32,
    pub is_green: bool,
}

/// Pluggable traffic rule.
///
/// Implement this trait to define how the whole road advances by one step.
/// `apply` receives the current state by reference and returns a fresh
/// state; the engine replaces its copy wholesale and validates the result,
/// so implementations never mutate shared data and never need to fail.
///
/// `apply` takes `&mut self` because stochastic rules advance their own RNG
/// and the self-organizing light rule updates its controller counters.
///
/// # Contract
///
/// - the input state satisfies the `RoadState` invariants;
/// - `step` increases monotonically across calls within one run — rules
///   with phase offsets or internal counters depend on this;
/// - the returned state must keep the vehicle count, keep positions
///   pairwise distinct, and keep every velocity at or below the vehicle's
///   gap in the *input* state.
pub trait UpdateRule {
    /// Compute the state one step after `state`.
    fn apply(&mut self, state: &RoadState, step: Timestep) -> RoadState;

    /// Green/red status of every light this rule controls, at `step`.
    ///
    /// Rules without lights return an empty vec (the default).  For rules
    /// with per-light internal state the result reflects the most recent
    /// `apply` call.
    fn light_states(&self, _step: Timestep) -> Vec<LightSignal> {
        Vec::new()
    }
}
