//! `MetricsObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use ring_core::{Ring, RoadState, Timestep};
use ring_sim::{SimObserver, StepMetrics};

use crate::row::MetricsRow;
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that streams metric and occupancy rows to any
/// [`OutputWriter`] backend while the run executes.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `simulate` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct MetricsObserver<W: OutputWriter> {
    writer:     W,
    label:      String,
    ring:       Ring,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> MetricsObserver<W> {
    /// Create an observer backed by `writer`, tagging every metric row
    /// with `label`.
    pub fn new(writer: W, label: impl Into<String>, ring: Ring) -> Self {
        Self {
            writer,
            label: label.into(),
            ring,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run completes.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for MetricsObserver<W> {
    fn on_step(&mut self, step: Timestep, state: &RoadState) {
        let row = state.occupancy_row(self.ring);
        let result = self.writer.write_occupancy(step.0, &row);
        self.store_err(result);
    }

    fn on_metrics(&mut self, step: Timestep, metrics: &StepMetrics) {
        let row = MetricsRow {
            label:             self.label.clone(),
            step:              step.0,
            density:           metrics.window.map(|w| w.density),
            flow:              metrics.window.map(|w| w.flow),
            mean_velocity:     metrics.mean_velocity,
            velocity_variance: metrics.velocity_variance,
        };
        let result = self.writer.write_metrics(&row);
        self.store_err(result);
    }

    fn on_run_end(&mut self, _final_step: Timestep) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
