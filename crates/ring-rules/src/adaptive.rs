//! Queue-triggered self-organizing traffic lights.
//!
//! Unlike the fixed-cycle variant, these lights carry mutable state: while
//! red they accumulate the number of vehicles queued within a detection
//! distance, switching to green once the accumulated count reaches a
//! threshold; while green they hold for at least `min_green` steps and are
//! forced back to red after `max_green`, or as soon as the queue clears.
//!
//! Per light, the state machine is:
//!
//! ```text
//! RED   --[waiting_counter >= queue_threshold]-->  GREEN
//! GREEN --[time_since_change >= min_green
//!          && (count == 0 || time_since_change >= max_green)]--> RED
//! ```
//!
//! Initial state: RED with zero counters.  There is no terminal state.

use ring_core::{Ring, RoadState, SimRng, SortedVehicles, Timestep};

use crate::bounded::{accelerate_and_clamp, advance_positions, Braking};
use crate::lights::{clamp_before_light, validate_light_positions};
use crate::{LightSignal, RuleError, RuleResult, UpdateRule};

// ── Configuration ─────────────────────────────────────────────────────────────

/// Parameters shared by every light under one controller.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AdaptiveLightConfig {
    /// Queue detection reach: vehicles within `(0, detection_distance]`
    /// cells of the light count as waiting.
    pub detection_distance: u32,
    /// Cumulative queued-vehicle count that triggers RED→GREEN.
    pub queue_threshold: u64,
    /// Minimum green phase length in steps.
    pub min_green: u64,
    /// Maximum green phase length in steps.
    pub max_green: u64,
}

impl AdaptiveLightConfig {
    fn validate(&self) -> RuleResult<()> {
        if self.detection_distance == 0 {
            return Err(RuleError::Config("detection distance must be at least 1".into()));
        }
        if self.queue_threshold == 0 {
            return Err(RuleError::Config("queue threshold must be at least 1".into()));
        }
        if self.min_green == 0 {
            return Err(RuleError::Config("minimum green must be at least 1".into()));
        }
        if self.min_green > self.max_green {
            return Err(RuleError::Config(format!(
                "minimum green {} exceeds maximum green {}",
                self.min_green, self.max_green
            )));
        }
        Ok(())
    }
}

// ── Per-light state ───────────────────────────────────────────────────────────

/// Mutable state of one self-organizing light.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct SignalState {
    is_green: bool,
    /// Steps the current phase has been held.
    time_since_change: u64,
    /// Queued vehicles accumulated over the whole red phase.
    waiting_counter: u64,
}

impl SignalState {
    const RED: SignalState = SignalState {
        is_green:          false,
        time_since_change: 0,
        waiting_counter:   0,
    };

    const GREEN: SignalState = SignalState {
        is_green:          true,
        time_since_change: 0,
        waiting_counter:   0,
    };
}

// ── LightController ───────────────────────────────────────────────────────────

/// Owns the mutable state of every self-organizing light.
///
/// One state record per light, indexed by light, alive for the whole run.
/// [`update`][Self::update] is called exactly once per step, before
/// velocities are computed, and is the only place that mutates the records.
pub struct LightController {
    params: AdaptiveLightConfig,
    positions: Vec<u32>,
    states: Vec<SignalState>,
}

impl LightController {
    pub fn new(
        ring:            Ring,
        light_positions: Vec<u32>,
        params:          AdaptiveLightConfig,
    ) -> RuleResult<Self> {
        params.validate()?;
        validate_light_positions(ring, &light_positions)?;
        let states = vec![SignalState::RED; light_positions.len()];
        Ok(Self { params, positions: light_positions, states })
    }

    pub fn light_count(&self) -> usize {
        self.positions.len()
    }

    /// Green/red status of light `i` as of the last `update`.
    #[inline]
    pub fn is_green(&self, i: usize) -> bool {
        self.states[i].is_green
    }

    /// Advance every light's state machine by one step.
    ///
    /// `vehicle_positions` is the road configuration *before* this step's
    /// movement; a vehicle is queued at a light when its circular distance
    /// to the light lies in `(0, detection_distance]`.
    pub fn update(&mut self, ring: Ring, vehicle_positions: &[u32]) {
        // Copy the scalars out so the loop can borrow `states` mutably.
        let reach     = self.params.detection_distance;
        let threshold = self.params.queue_threshold;
        let min_green = self.params.min_green;
        let max_green = self.params.max_green;

        for (&light, state) in self.positions.iter().zip(self.states.iter_mut()) {
            let count = vehicle_positions
                .iter()
                .filter(|&&p| {
                    let d = ring.distance_ahead(p, light);
                    d > 0 && d <= reach
                })
                .count() as u64;

            if state.is_green {
                // Completed green steps including this one; counting before
                // the guard makes the phase last exactly min_green..=max_green.
                state.time_since_change += 1;
                let held = state.time_since_change;
                if held >= min_green && (count == 0 || held >= max_green) {
                    *state = SignalState::RED;
                }
            } else {
                state.waiting_counter += count;
                if state.waiting_counter >= threshold {
                    *state = SignalState::GREEN;
                } else {
                    state.time_since_change += 1;
                }
            }
        }
    }

    /// Snapshot of every light's current status.
    pub fn signals(&self) -> Vec<LightSignal> {
        self.positions
            .iter()
            .zip(&self.states)
            .map(|(&position, s)| LightSignal { position, is_green: s.is_green })
            .collect()
    }
}

// ── SelfOrganizingLights ──────────────────────────────────────────────────────

/// Car-following through queue-triggered lights.
///
/// Each step: the controller updates every light first, then velocities are
/// computed exactly as under [`FixedCycleLights`][crate::FixedCycleLights],
/// clamping against each light's *just-updated* status.
pub struct SelfOrganizingLights {
    ring: Ring,
    max_velocity: u32,
    controller: LightController,
    braking: Option<Braking>,
}

impl SelfOrganizingLights {
    pub fn new(
        ring:            Ring,
        max_velocity:    u32,
        light_positions: Vec<u32>,
        params:          AdaptiveLightConfig,
    ) -> RuleResult<Self> {
        if max_velocity == 0 {
            return Err(RuleError::ZeroMaxVelocity);
        }
        Ok(Self {
            ring,
            max_velocity,
            controller: LightController::new(ring, light_positions, params)?,
            braking: None,
        })
    }

    /// Add stochastic braking (applied after the collision clamp, before
    /// the light clamp).
    pub fn with_random_braking(mut self, probability: f64, rng: SimRng) -> RuleResult<Self> {
        self.braking = Some(Braking::new(probability, rng)?);
        Ok(self)
    }

    pub fn controller(&self) -> &LightController {
        &self.controller
    }
}

impl UpdateRule for SelfOrganizingLights {
    fn apply(&mut self, state: &RoadState, _step: Timestep) -> RoadState {
        let mut sorted = SortedVehicles::from_state(state);
        self.controller.update(self.ring, &sorted.positions);

        let gaps = self.ring.gaps(&sorted.positions);
        accelerate_and_clamp(&mut sorted.velocities, &gaps, self.max_velocity);
        if let Some(braking) = &mut self.braking {
            braking.apply(&mut sorted.velocities);
        }
        for i in 0..self.controller.light_count() {
            if !self.controller.is_green(i) {
                clamp_before_light(
                    self.ring,
                    self.controller.positions[i],
                    &sorted.positions,
                    &mut sorted.velocities,
                );
            }
        }
        advance_positions(self.ring, &mut sorted.positions, &sorted.velocities);
        sorted.into_state()
    }

    fn light_states(&self, _step: Timestep) -> Vec<LightSignal> {
        self.controller.signals()
    }
}
