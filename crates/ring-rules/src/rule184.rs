//! Binary-occupancy Rule 184 — the minimal traffic cellular automaton.
//!
//! No velocity bookkeeping beyond {0, 1}: a vehicle advances one cell iff
//! the cell immediately ahead is empty in the *current* state (gap ≥ 1).
//! All vehicles update simultaneously, so a vehicle never moves into a cell
//! vacated this same step.

use ring_core::{Ring, RoadState, SimRng, SortedVehicles, Timestep};

use crate::{RuleError, RuleResult, UpdateRule};

// ── Rule184 ───────────────────────────────────────────────────────────────────

/// Deterministic Rule 184.
pub struct Rule184 {
    ring: Ring,
}

impl Rule184 {
    pub fn new(ring: Ring) -> Self {
        Self { ring }
    }
}

impl UpdateRule for Rule184 {
    fn apply(&mut self, state: &RoadState, _step: Timestep) -> RoadState {
        let mut sorted = SortedVehicles::from_state(state);
        let gaps = self.ring.gaps(&sorted.positions);
        for i in 0..sorted.len() {
            if gaps[i] >= 1 {
                sorted.positions[i] = self.ring.advance(sorted.positions[i], 1);
                sorted.velocities[i] = 1;
            } else {
                sorted.velocities[i] = 0;
            }
        }
        sorted.into_state()
    }
}

// ── Rule184Random ─────────────────────────────────────────────────────────────

/// Rule 184 with random stalling: each vehicle independently refuses to
/// advance with probability `stall_probability`, once per vehicle per step.
pub struct Rule184Random {
    ring: Ring,
    stall_probability: f64,
    rng: SimRng,
}

impl Rule184Random {
    pub fn new(ring: Ring, stall_probability: f64, rng: SimRng) -> RuleResult<Self> {
        if !(0.0..=1.0).contains(&stall_probability) {
            return Err(RuleError::ProbabilityOutOfRange(stall_probability));
        }
        Ok(Self { ring, stall_probability, rng })
    }
}

impl UpdateRule for Rule184Random {
    fn apply(&mut self, state: &RoadState, _step: Timestep) -> RoadState {
        let mut sorted = SortedVehicles::from_state(state);
        let gaps = self.ring.gaps(&sorted.positions);
        for i in 0..sorted.len() {
            // Draw for every vehicle so the RNG stream is independent of
            // the road configuration.
            let stalled = self.rng.gen_bool(self.stall_probability);
            if !stalled && gaps[i] >= 1 {
                sorted.positions[i] = self.ring.advance(sorted.positions[i], 1);
                sorted.velocities[i] = 1;
            } else {
                sorted.velocities[i] = 0;
            }
        }
        sorted.into_state()
    }
}
