//! `ring-output` — CSV persistence for the ringroad traffic simulator.
//!
//! Two files per run directory:
//!
//! | File            | Contents                                             |
//! |-----------------|------------------------------------------------------|
//! | `metrics.csv`   | one row per step: label, step, density, flow, mean velocity, variance |
//! | `occupancy.csv` | one row per step: step, then one 0/1 column per cell |
//!
//! Row-major flow grids (cycle-length sweeps and the like) are written by
//! [`write_flow_grid`] as plain numeric tables.
//!
//! All backends implement [`OutputWriter`] and can be driven two ways:
//! live, through [`MetricsObserver`] (a `ring_sim::SimObserver`), or after
//! the fact from a finished [`ring_sim::RunRecord`] via
//! [`CsvWriter::write_run`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use ring_output::{CsvWriter, MetricsObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"), engine.ring().length())?;
//! let mut obs = MetricsObserver::new(writer, "bounded-velocity", engine.ring());
//! engine.simulate(&mut rule, &mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::{write_flow_grid, CsvWriter};
pub use error::{OutputError, OutputResult};
pub use observer::MetricsObserver;
pub use row::MetricsRow;
pub use writer::OutputWriter;
