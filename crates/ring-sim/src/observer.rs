//! Simulation observer trait for progress reporting and data collection.

use ring_core::{RoadState, Timestep};
use ring_rules::LightSignal;

use crate::StepMetrics;

/// Callbacks invoked by [`Engine::simulate`][crate::Engine::simulate] at
/// fixed points in the step loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Hooks return nothing; an observer
/// that can fail (e.g. a CSV writer) stores its first error internally and
/// exposes it after the run.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_step(&mut self, step: Timestep, state: &RoadState) {
///         if step.0 % self.interval == 0 {
///             println!("{step}: {} vehicles", state.len());
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once per step, right after the state is recorded into the
    /// history and before the rule advances the road.
    fn on_step(&mut self, _step: Timestep, _state: &RoadState) {}

    /// Called once per step with the measurements taken from the recorded
    /// state.
    fn on_metrics(&mut self, _step: Timestep, _metrics: &StepMetrics) {}

    /// Called after a transition whose rule exposes light states.
    fn on_lights(&mut self, _step: Timestep, _signals: &[LightSignal]) {}

    /// Called once after the final step completes.
    fn on_run_end(&mut self, _final_step: Timestep) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call
/// `simulate` but don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
