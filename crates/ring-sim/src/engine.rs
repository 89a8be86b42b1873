//! The `Engine` struct and its step loop.

use ring_core::{Ring, RingError, RoadState, Timestep};
use ring_rules::UpdateRule;

use crate::measure::{mean_velocity, velocity_variance, DetectorWindow, StepMetrics};
use crate::{RunRecord, SimError, SimObserver, SimResult};

/// Drives the time loop over one road.
///
/// The engine owns the road geometry, the initial vehicle configuration,
/// and the optional detector window.  It is immutable after construction —
/// [`simulate`][Self::simulate] clones the initial state into a local
/// cursor, so the same engine can drive many runs (e.g. Monte Carlo
/// replications with differently seeded rules).
///
/// Create via [`EngineBuilder`][crate::EngineBuilder].
pub struct Engine {
    pub(crate) ring: Ring,
    pub(crate) max_timesteps: u64,
    pub(crate) window: Option<DetectorWindow>,
    pub(crate) initial: RoadState,
}

impl Engine {
    /// Road geometry, shared with rule constructors.
    pub fn ring(&self) -> Ring {
        self.ring
    }

    /// The configured detector window, if any.
    pub fn window(&self) -> Option<DetectorWindow> {
        self.window
    }

    /// The vehicle configuration every run starts from.
    pub fn initial_state(&self) -> &RoadState {
        &self.initial
    }

    /// Run `rule` for `max_timesteps` transitions and collect the record.
    ///
    /// Per step `t`: record the occupancy row, measure, then (except on the
    /// final iteration) advance the road and snapshot the rule's light
    /// states.  The rule is taken by `&mut` because stochastic rules draw
    /// from their own RNG and light controllers advance their counters.
    ///
    /// A rule that returns a state with a changed vehicle count, duplicate
    /// or out-of-range positions, or an absurd velocity aborts the run with
    /// [`SimError::Invariant`].
    pub fn simulate<R, O>(&self, rule: &mut R, observer: &mut O) -> SimResult<RunRecord>
    where
        R: UpdateRule + ?Sized,
        O: SimObserver + ?Sized,
    {
        let steps = self.max_timesteps;
        let mut record = RunRecord::with_capacity(self.ring.length(), steps as usize + 1);
        let mut state = self.initial.clone();

        for t in 0..=steps {
            let step = Timestep(t);

            // ── ① Record ──────────────────────────────────────────────────
            record.history.push_row(state.occupancy_row(self.ring));
            observer.on_step(step, &state);

            // ── ② Measure ─────────────────────────────────────────────────
            let metrics = self.measure(&state);
            record.mean_velocity.push(metrics.mean_velocity);
            record.velocity_variance.push(metrics.velocity_variance);
            if let Some(sample) = metrics.window {
                record.density.push(sample.density);
                record.flow.push(sample.flow);
            }
            observer.on_metrics(step, &metrics);

            // ── ③ Advance ─────────────────────────────────────────────────
            if t < steps {
                let next = rule.apply(&state, step);
                self.check_transition(&state, &next, t)?;

                let signals = rule.light_states(step);
                if !signals.is_empty() {
                    observer.on_lights(step, &signals);
                    record.light_history.push(signals);
                }
                state = next;
            }
        }

        observer.on_run_end(Timestep(steps));
        Ok(record)
    }

    fn measure(&self, state: &RoadState) -> StepMetrics {
        StepMetrics {
            mean_velocity:     mean_velocity(&state.velocities),
            velocity_variance: velocity_variance(&state.velocities),
            window:            self.window.map(|w| w.sample(state)),
        }
    }

    /// Fatal-error check on a rule's output; never a recoverable condition.
    fn check_transition(&self, before: &RoadState, after: &RoadState, t: u64) -> SimResult<()> {
        if after.len() != before.len() {
            return Err(SimError::Invariant {
                step:   t,
                source: RingError::VehicleCountMismatch {
                    expected: before.len(),
                    got:      after.len(),
                    what:     "positions",
                },
            });
        }
        after
            .validate(self.ring)
            .map_err(|source| SimError::Invariant { step: t, source })
    }
}
