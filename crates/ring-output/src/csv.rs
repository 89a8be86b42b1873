//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `metrics.csv`
//! - `occupancy.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use ring_sim::RunRecord;

use crate::writer::OutputWriter;
use crate::{MetricsRow, OutputResult};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    metrics:   Writer<File>,
    occupancy: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the occupancy
    /// header row.  The metrics header comes from the first serialized row.
    pub fn new(dir: &Path, road_length: u32) -> OutputResult<Self> {
        let metrics = Writer::from_path(dir.join("metrics.csv"))?;

        let mut occupancy = Writer::from_path(dir.join("occupancy.csv"))?;
        let mut header = vec!["step".to_string()];
        header.extend((0..road_length).map(|c| format!("cell_{c}")));
        occupancy.write_record(&header)?;

        Ok(Self {
            metrics,
            occupancy,
            finished: false,
        })
    }

    /// Persist a finished [`RunRecord`] in one call: every metric row and
    /// every occupancy row, then flush.
    pub fn write_run(&mut self, label: &str, record: &RunRecord) -> OutputResult<()> {
        for (t, row) in record.history.iter_rows().enumerate() {
            let step = t as u64;
            self.write_metrics(&MetricsRow {
                label:             label.to_string(),
                step,
                density:           record.density.get(t).copied(),
                flow:              record.flow.get(t).copied(),
                mean_velocity:     record.mean_velocity[t],
                velocity_variance: record.velocity_variance[t],
            })?;
            self.write_occupancy(step, row)?;
        }
        self.finish()
    }
}

impl OutputWriter for CsvWriter {
    fn write_metrics(&mut self, row: &MetricsRow) -> OutputResult<()> {
        self.metrics.serialize(row)?;
        Ok(())
    }

    fn write_occupancy(&mut self, step: u64, cells: &[u8]) -> OutputResult<()> {
        let mut record = Vec::with_capacity(cells.len() + 1);
        record.push(step.to_string());
        record.extend(cells.iter().map(|c| c.to_string()));
        self.occupancy.write_record(&record)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.metrics.flush()?;
        self.occupancy.flush()?;
        Ok(())
    }
}

/// Write a row-major numeric table (e.g. a flow grid from a cycle-length
/// sweep) as a headerless CSV file.
pub fn write_flow_grid(path: &Path, grid: &[Vec<f64>]) -> OutputResult<()> {
    let mut writer = Writer::from_path(path)?;
    for row in grid {
        writer.write_record(row.iter().map(|v| v.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}
