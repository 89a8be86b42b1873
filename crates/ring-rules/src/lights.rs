//! Fixed-cycle traffic lights.
//!
//! A fixed-cycle light is stateless: its color at step `t` is a pure
//! function of `(t - offset) mod cycle_length`.  Offsets shifted light by
//! light produce a green wave — a platoon can cross successive lights
//! without stopping.

use ring_core::{Ring, RoadState, SimRng, SortedVehicles, Timestep};

use crate::bounded::{accelerate_and_clamp, advance_positions, Braking};
use crate::{LightSignal, RuleError, RuleResult, UpdateRule};

// ── FixedLight ────────────────────────────────────────────────────────────────

/// Immutable configuration of one fixed-cycle light.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FixedLight {
    /// Cell the light guards.
    pub position: u32,
    /// Steps of green per cycle.
    pub green_duration: u32,
    /// Steps of red per cycle.
    pub red_duration: u32,
    /// Whether the cycle opens with the red phase.
    pub start_red: bool,
    /// Phase shift in steps: this light runs `offset` steps behind an
    /// unshifted light.
    pub offset: u64,
}

impl FixedLight {
    #[inline]
    pub fn cycle_length(&self) -> u32 {
        self.green_duration + self.red_duration
    }

    /// Color at `step`.  Euclidean remainder keeps `step < offset` well
    /// defined (the cycle extends backwards in time).
    pub fn is_green(&self, step: Timestep) -> bool {
        let cycle = self.cycle_length() as i64;
        let phase = (step.0 as i64 - self.offset as i64).rem_euclid(cycle);
        if self.start_red {
            phase >= self.red_duration as i64
        } else {
            phase < self.green_duration as i64
        }
    }
}

// ── Shared light helpers ──────────────────────────────────────────────────────

/// Reject duplicate or out-of-road light positions.
pub(crate) fn validate_light_positions(ring: Ring, positions: &[u32]) -> RuleResult<()> {
    for &p in positions {
        if p >= ring.length() {
            return Err(RuleError::LightOutOfRange {
                position:    p,
                road_length: ring.length(),
            });
        }
    }
    let mut sorted = positions.to_vec();
    sorted.sort_unstable();
    for pair in sorted.windows(2) {
        if pair[0] == pair[1] {
            return Err(RuleError::DuplicateLight(pair[0]));
        }
    }
    Ok(())
}

/// Stop every vehicle that would reach or cross a red light this step.
///
/// A vehicle whose circular distance to the light lies in `(0, velocity]`
/// is clamped to `distance - 1` so it halts one cell before the light.
/// Clamping only ever lowers a velocity, so gap safety is preserved.
pub(crate) fn clamp_before_light(
    ring:           Ring,
    light_position: u32,
    positions:      &[u32],
    velocities:     &mut [u32],
) {
    for (p, v) in positions.iter().zip(velocities.iter_mut()) {
        let distance = ring.distance_ahead(*p, light_position);
        if distance > 0 && distance <= *v {
            *v = distance - 1;
        }
    }
}

// ── FixedCycleConfig ──────────────────────────────────────────────────────────

/// Per-light parameter arrays for [`FixedCycleLights`].
///
/// All vectors must equal `light_positions` in length; lengths are checked
/// at rule construction.
#[derive(Clone, Debug)]
pub struct FixedCycleConfig {
    pub light_positions: Vec<u32>,
    pub green_durations: Vec<u32>,
    pub red_durations:   Vec<u32>,
    pub start_red:       Vec<bool>,
    pub offsets:         Vec<u64>,
}

impl FixedCycleConfig {
    /// Identical lights at the given positions, successive offsets spaced
    /// `offset_step` apart — the green-wave configuration.
    pub fn green_wave(
        light_positions: Vec<u32>,
        green_duration:  u32,
        red_duration:    u32,
        offset_step:     u64,
    ) -> Self {
        let n = light_positions.len();
        Self {
            light_positions,
            green_durations: vec![green_duration; n],
            red_durations:   vec![red_duration; n],
            start_red:       vec![false; n],
            offsets:         (0..n as u64).map(|k| k * offset_step).collect(),
        }
    }

    fn into_lights(self, ring: Ring) -> RuleResult<Vec<FixedLight>> {
        let n = self.light_positions.len();
        let check = |what, got| {
            if got != n {
                Err(RuleError::LightCountMismatch { expected: n, got, what })
            } else {
                Ok(())
            }
        };
        check("green durations", self.green_durations.len())?;
        check("red durations", self.red_durations.len())?;
        check("start-red flags", self.start_red.len())?;
        check("offsets", self.offsets.len())?;
        validate_light_positions(ring, &self.light_positions)?;

        let lights: Vec<FixedLight> = (0..n)
            .map(|i| FixedLight {
                position:       self.light_positions[i],
                green_duration: self.green_durations[i],
                red_duration:   self.red_durations[i],
                start_red:      self.start_red[i],
                offset:         self.offsets[i],
            })
            .collect();

        for (i, light) in lights.iter().enumerate() {
            if light.green_duration == 0 {
                return Err(RuleError::ZeroPhase { light: i, what: "green" });
            }
            if light.red_duration == 0 {
                return Err(RuleError::ZeroPhase { light: i, what: "red" });
            }
        }
        Ok(lights)
    }
}

// ── FixedCycleLights ──────────────────────────────────────────────────────────

/// Car-following through one or more fixed-phase traffic lights.
///
/// Lights are applied in configuration order; a later light can further
/// reduce a velocity already reduced by an earlier one, never increase it.
pub struct FixedCycleLights {
    ring: Ring,
    max_velocity: u32,
    lights: Vec<FixedLight>,
    braking: Option<Braking>,
}

impl FixedCycleLights {
    pub fn new(ring: Ring, max_velocity: u32, config: FixedCycleConfig) -> RuleResult<Self> {
        if max_velocity == 0 {
            return Err(RuleError::ZeroMaxVelocity);
        }
        Ok(Self {
            ring,
            max_velocity,
            lights: config.into_lights(ring)?,
            braking: None,
        })
    }

    /// Add stochastic braking (applied after the collision clamp, before
    /// the light clamp).
    pub fn with_random_braking(mut self, probability: f64, rng: SimRng) -> RuleResult<Self> {
        self.braking = Some(Braking::new(probability, rng)?);
        Ok(self)
    }

    pub fn lights(&self) -> &[FixedLight] {
        &self.lights
    }
}

impl UpdateRule for FixedCycleLights {
    fn apply(&mut self, state: &RoadState, step: Timestep) -> RoadState {
        let mut sorted = SortedVehicles::from_state(state);
        let gaps = self.ring.gaps(&sorted.positions);
        accelerate_and_clamp(&mut sorted.velocities, &gaps, self.max_velocity);
        if let Some(braking) = &mut self.braking {
            braking.apply(&mut sorted.velocities);
        }
        for light in &self.lights {
            if !light.is_green(step) {
                clamp_before_light(self.ring, light.position, &sorted.positions, &mut sorted.velocities);
            }
        }
        advance_positions(self.ring, &mut sorted.positions, &sorted.velocities);
        sorted.into_state()
    }

    fn light_states(&self, step: Timestep) -> Vec<LightSignal> {
        self.lights
            .iter()
            .map(|l| LightSignal { position: l.position, is_green: l.is_green(step) })
            .collect()
    }
}
