//! Integration tests for ring-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::MetricsRow;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn metrics_row(step: u64) -> MetricsRow {
        MetricsRow {
            label:             "test".into(),
            step,
            density:           Some(0.25),
            flow:              Some(0.5),
            mean_velocity:     2.0,
            velocity_variance: 0.125,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path(), 10).unwrap();
        assert!(dir.path().join("metrics.csv").exists());
        assert!(dir.path().join("occupancy.csv").exists());
    }

    #[test]
    fn occupancy_header_covers_every_cell() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path(), 4).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("occupancy.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["step", "cell_0", "cell_1", "cell_2", "cell_3"]);
    }

    #[test]
    fn metrics_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path(), 10).unwrap();
        w.write_metrics(&metrics_row(0)).unwrap();
        w.write_metrics(&metrics_row(1)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("metrics.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["label", "step", "density", "flow", "mean_velocity", "velocity_variance"]
        );
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "test");
        assert_eq!(&rows[0][1], "0");
        assert_eq!(&rows[0][2], "0.25");
        assert_eq!(&rows[1][1], "1");
    }

    #[test]
    fn missing_detector_leaves_density_empty() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path(), 10).unwrap();
        let row = MetricsRow {
            density: None,
            flow: None,
            ..metrics_row(0)
        };
        w.write_metrics(&row).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("metrics.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(&rows[0][2], "");
        assert_eq!(&rows[0][3], "");
    }

    #[test]
    fn occupancy_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path(), 5).unwrap();
        w.write_occupancy(0, &[1, 0, 0, 1, 0]).unwrap();
        w.write_occupancy(1, &[0, 1, 0, 0, 1]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("occupancy.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "0");
        assert_eq!(&rows[0][1], "1");
        assert_eq!(&rows[0][4], "1");
        assert_eq!(&rows[1][2], "1");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path(), 3).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn flow_grid_round_trip() {
        let dir = tmp();
        let path = dir.path().join("flow_grid.csv");
        let grid = vec![vec![0.1, 0.2, 0.3], vec![0.4, 0.5, 0.6]];
        crate::write_flow_grid(&path, &grid).unwrap();

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(&path)
            .unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "0.1");
        assert_eq!(&rows[1][2], "0.6");
    }
}

#[cfg(test)]
mod observer_tests {
    use tempfile::TempDir;

    use ring_rules::BoundedVelocity;
    use ring_sim::EngineBuilder;

    use crate::csv::CsvWriter;
    use crate::observer::MetricsObserver;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn live_run_streams_one_row_per_step() {
        let dir = tmp();
        let engine = EngineBuilder::new(12, 8)
            .vehicles(vec![0, 4, 8])
            .detector(0, 11)
            .build()
            .unwrap();
        let mut rule = BoundedVelocity::new(engine.ring(), 3).unwrap();

        let writer = CsvWriter::new(dir.path(), engine.ring().length()).unwrap();
        let mut obs = MetricsObserver::new(writer, "bounded", engine.ring());
        engine.simulate(&mut rule, &mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let mut metrics = csv::Reader::from_path(dir.path().join("metrics.csv")).unwrap();
        assert_eq!(metrics.records().count(), 9, "8 transitions + initial state");

        let mut occupancy = csv::Reader::from_path(dir.path().join("occupancy.csv")).unwrap();
        let rows: Vec<_> = occupancy.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 9);
        // Three vehicles on every recorded row.
        for row in &rows {
            let occupied: u32 = row.iter().skip(1).map(|c| c.parse::<u32>().unwrap()).sum();
            assert_eq!(occupied, 3);
        }
    }

    #[test]
    fn finished_record_can_be_written_after_the_run() {
        let dir = tmp();
        let engine = EngineBuilder::new(12, 8)
            .vehicles(vec![0, 4, 8])
            .detector(0, 11)
            .build()
            .unwrap();
        let mut rule = BoundedVelocity::new(engine.ring(), 3).unwrap();
        let record = engine.simulate(&mut rule, &mut ring_sim::NoopObserver).unwrap();

        let mut writer = CsvWriter::new(dir.path(), engine.ring().length()).unwrap();
        writer.write_run("bounded", &record).unwrap();

        let mut metrics = csv::Reader::from_path(dir.path().join("metrics.csv")).unwrap();
        assert_eq!(metrics.records().count(), 9);
    }
}
