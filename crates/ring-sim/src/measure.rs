//! Per-step measurements: space mean velocity, variance, and the local
//! detector readings (density, mean velocity, flow).
//!
//! All functions here are pure — they read one `RoadState` and return
//! numbers.  The engine calls them on the recorded snapshot, before the
//! rule advances the road.

use ring_core::RoadState;

// ── Aggregates over all vehicles ──────────────────────────────────────────────

/// Space mean velocity; 0 for an empty road.
pub fn mean_velocity(velocities: &[u32]) -> f64 {
    if velocities.is_empty() {
        return 0.0;
    }
    velocities.iter().map(|&v| v as f64).sum::<f64>() / velocities.len() as f64
}

/// Population variance of the velocities; 0 for an empty road.
pub fn velocity_variance(velocities: &[u32]) -> f64 {
    if velocities.is_empty() {
        return 0.0;
    }
    let mean = mean_velocity(velocities);
    velocities
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / velocities.len() as f64
}

// ── Detector window ───────────────────────────────────────────────────────────

/// Inclusive cell range `[start, end]` sampled every step.
///
/// Bounds are validated by `EngineBuilder`; the window itself is plain data.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DetectorWindow {
    pub start: u32,
    pub end: u32,
}

impl DetectorWindow {
    /// Number of cells covered.
    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.start + 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false // start <= end always holds for a validated window
    }

    #[inline]
    pub fn contains(&self, cell: u32) -> bool {
        (self.start..=self.end).contains(&cell)
    }

    /// Local density, mean velocity, and flow over the vehicles currently
    /// inside the window.
    pub fn sample(&self, state: &RoadState) -> WindowSample {
        let in_window: Vec<u32> = state
            .positions
            .iter()
            .zip(&state.velocities)
            .filter(|&(&p, _)| self.contains(p))
            .map(|(_, &v)| v)
            .collect();

        let density = in_window.len() as f64 / self.len() as f64;
        let mean = mean_velocity(&in_window);
        WindowSample {
            density,
            mean_velocity: mean,
            flow: density * mean,
        }
    }
}

/// One detector reading.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WindowSample {
    /// Vehicles in the window divided by window length.
    pub density: f64,
    /// Mean velocity of vehicles in the window; 0 if none.
    pub mean_velocity: f64,
    /// `density * mean_velocity`.
    pub flow: f64,
}

/// Everything measured for one step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StepMetrics {
    /// Space mean velocity over all vehicles.
    pub mean_velocity: f64,
    /// Population variance of all velocities.
    pub velocity_variance: f64,
    /// Detector reading, when a window is configured.
    pub window: Option<WindowSample>,
}
