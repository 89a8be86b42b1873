//! Plain data row types written by output backends.

use serde::Serialize;

/// One step of the per-run metric series.
///
/// `density` and `flow` are `None` when the run had no detector window;
/// the CSV backend leaves those fields empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsRow {
    /// Caller-chosen series label (e.g. the rule name or sweep point).
    pub label: String,
    pub step: u64,
    pub density: Option<f64>,
    pub flow: Option<f64>,
    pub mean_velocity: f64,
    pub velocity_variance: f64,
}
