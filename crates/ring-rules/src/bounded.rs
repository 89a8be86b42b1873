//! Car-following with a velocity cap, deterministic and stochastic.
//!
//! The per-step sequence shared by every velocity-based rule:
//!
//! 1. accelerate: `v ← min(v + 1, max_velocity)`
//! 2. collision clamp: `v ← min(v, gap)`
//! 3. (stochastic variants) random brake: `v ← max(v - 1, 0)` with
//!    probability `braking_probability`
//! 4. move: `position ← (position + v) mod road_length`
//!
//! The brake runs strictly *after* the collision clamp — it can only slow a
//! vehicle below its gap, never push it past one.

use ring_core::{Ring, RoadState, SimRng, SortedVehicles, Timestep};

use crate::{RuleError, RuleResult, UpdateRule};

// ── Shared step pieces ────────────────────────────────────────────────────────

/// Accelerate by one and clamp against the velocity cap and the gap.
pub(crate) fn accelerate_and_clamp(velocities: &mut [u32], gaps: &[u32], max_velocity: u32) {
    for (v, &gap) in velocities.iter_mut().zip(gaps) {
        *v = (*v + 1).min(max_velocity).min(gap);
    }
}

/// Independently brake each vehicle by one with probability `p`.
///
/// One draw per vehicle per step, including stationary vehicles — the RNG
/// stream depends only on the vehicle count, not the road configuration.
pub(crate) fn brake_randomly(velocities: &mut [u32], p: f64, rng: &mut SimRng) {
    for v in velocities.iter_mut() {
        if rng.gen_bool(p) {
            *v = v.saturating_sub(1);
        }
    }
}

/// Move every vehicle forward by its velocity, wrapping around the ring.
pub(crate) fn advance_positions(ring: Ring, positions: &mut [u32], velocities: &[u32]) {
    for (p, &v) in positions.iter_mut().zip(velocities) {
        *p = ring.advance(*p, v);
    }
}

/// Optional random-braking add-on carried by the light rules.
pub(crate) struct Braking {
    pub(crate) probability: f64,
    pub(crate) rng: SimRng,
}

impl Braking {
    pub(crate) fn new(probability: f64, rng: SimRng) -> RuleResult<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(RuleError::ProbabilityOutOfRange(probability));
        }
        Ok(Self { probability, rng })
    }

    pub(crate) fn apply(&mut self, velocities: &mut [u32]) {
        brake_randomly(velocities, self.probability, &mut self.rng);
    }
}

// ── BoundedVelocity ───────────────────────────────────────────────────────────

/// Deterministic car-following: accelerate, clamp to gap, move.
pub struct BoundedVelocity {
    ring: Ring,
    max_velocity: u32,
}

impl BoundedVelocity {
    pub fn new(ring: Ring, max_velocity: u32) -> RuleResult<Self> {
        if max_velocity == 0 {
            return Err(RuleError::ZeroMaxVelocity);
        }
        Ok(Self { ring, max_velocity })
    }
}

impl UpdateRule for BoundedVelocity {
    fn apply(&mut self, state: &RoadState, _step: Timestep) -> RoadState {
        let mut sorted = SortedVehicles::from_state(state);
        let gaps = self.ring.gaps(&sorted.positions);
        accelerate_and_clamp(&mut sorted.velocities, &gaps, self.max_velocity);
        advance_positions(self.ring, &mut sorted.positions, &sorted.velocities);
        sorted.into_state()
    }
}

// ── BoundedVelocityRandom ─────────────────────────────────────────────────────

/// Car-following with stochastic braking after the collision clamp.
pub struct BoundedVelocityRandom {
    ring: Ring,
    max_velocity: u32,
    braking_probability: f64,
    rng: SimRng,
}

impl BoundedVelocityRandom {
    pub fn new(
        ring:                Ring,
        max_velocity:        u32,
        braking_probability: f64,
        rng:                 SimRng,
    ) -> RuleResult<Self> {
        if max_velocity == 0 {
            return Err(RuleError::ZeroMaxVelocity);
        }
        if !(0.0..=1.0).contains(&braking_probability) {
            return Err(RuleError::ProbabilityOutOfRange(braking_probability));
        }
        Ok(Self { ring, max_velocity, braking_probability, rng })
    }
}

impl UpdateRule for BoundedVelocityRandom {
    fn apply(&mut self, state: &RoadState, _step: Timestep) -> RoadState {
        let mut sorted = SortedVehicles::from_state(state);
        let gaps = self.ring.gaps(&sorted.positions);
        accelerate_and_clamp(&mut sorted.velocities, &gaps, self.max_velocity);
        brake_randomly(&mut sorted.velocities, self.braking_probability, &mut self.rng);
        advance_positions(self.ring, &mut sorted.positions, &sorted.velocities);
        sorted.into_state()
    }
}
