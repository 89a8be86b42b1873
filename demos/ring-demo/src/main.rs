//! ring-demo — three traffic-control strategies on the same circular road.
//!
//! Runs an identical vehicle population under free flow with random
//! braking, a fixed-cycle green wave, and self-organizing queue-triggered
//! lights, then prints a through-flow comparison.  CSV output (metric
//! series + occupancy history) lands under `output/`.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use ring_core::SimRng;
use ring_output::{CsvWriter, MetricsObserver};
use ring_rules::{
    AdaptiveLightConfig, BoundedVelocityRandom, FixedCycleConfig, FixedCycleLights,
    SelfOrganizingLights,
};
use ring_sim::{EngineBuilder, NoopObserver, RunRecord};

// ── Constants ─────────────────────────────────────────────────────────────────

const ROAD_LENGTH:         u32   = 200;
const VEHICLE_COUNT:       usize = 50;
const MAX_TIMESTEPS:       u64   = 1_000;
const MAX_VELOCITY:        u32   = 5;
const BRAKING_PROBABILITY: f64   = 0.1;
const SEED:                u64   = 42;

const LIGHT_POSITIONS: [u32; 4] = [25, 75, 125, 175];

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Mean of a per-step series, skipping the initial-state entry.
fn steady_mean(series: &[f64]) -> f64 {
    if series.len() < 2 {
        return 0.0;
    }
    series[1..].iter().sum::<f64>() / (series.len() - 1) as f64
}

fn print_summary(name: &str, record: &RunRecord) {
    println!(
        "{:<16} flow {:.4}  mean velocity {:.3}  variance {:.3}",
        name,
        steady_mean(&record.flow),
        steady_mean(&record.mean_velocity),
        steady_mean(&record.velocity_variance),
    );
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== ring-demo — circular-road traffic automaton ===");
    println!(
        "Road: {ROAD_LENGTH} cells  |  Vehicles: {VEHICLE_COUNT}  |  Steps: {MAX_TIMESTEPS}  |  Seed: {SEED}"
    );
    println!();

    // 1. Distinct random initial positions: shuffle all cells, take the
    //    first VEHICLE_COUNT.  All vehicles start at rest.
    let mut rng = SimRng::new(SEED);
    let mut cells: Vec<u32> = (0..ROAD_LENGTH).collect();
    rng.shuffle(&mut cells);
    let positions = cells[..VEHICLE_COUNT].to_vec();

    // 2. One engine drives all three runs; it clones its initial state
    //    per run, so the comparison starts from identical conditions.
    let engine = EngineBuilder::new(ROAD_LENGTH, MAX_TIMESTEPS)
        .vehicles(positions)
        .detector(0, ROAD_LENGTH - 1)
        .build()?;

    let t0 = Instant::now();

    // 3. Free flow with random braking, streamed to CSV while running.
    std::fs::create_dir_all("output/free-flow")?;
    let writer = CsvWriter::new(Path::new("output/free-flow"), ROAD_LENGTH)?;
    let mut obs = MetricsObserver::new(writer, "free-flow", engine.ring());
    let mut free_flow = BoundedVelocityRandom::new(
        engine.ring(),
        MAX_VELOCITY,
        BRAKING_PROBABILITY,
        rng.child(1),
    )?;
    let free_record = engine.simulate(&mut free_flow, &mut obs)?;
    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Fixed-cycle green wave: 15/15 cycles, successive lights 10 steps
    //    behind each other.
    let config = FixedCycleConfig::green_wave(LIGHT_POSITIONS.to_vec(), 15, 15, 10);
    let mut green_wave = FixedCycleLights::new(engine.ring(), MAX_VELOCITY, config)?
        .with_random_braking(BRAKING_PROBABILITY, rng.child(2))?;
    let wave_record = engine.simulate(&mut green_wave, &mut NoopObserver)?;

    // 5. Self-organizing lights at the same cells.
    let adaptive = AdaptiveLightConfig {
        detection_distance: 5,
        queue_threshold:    5,
        min_green:          10,
        max_green:          40,
    };
    let mut organic = SelfOrganizingLights::new(
        engine.ring(),
        MAX_VELOCITY,
        LIGHT_POSITIONS.to_vec(),
        adaptive,
    )?
    .with_random_braking(BRAKING_PROBABILITY, rng.child(3))?;
    let organic_record = engine.simulate(&mut organic, &mut NoopObserver)?;

    let elapsed = t0.elapsed();

    // 6. Persist the two light runs from their finished records.
    std::fs::create_dir_all("output/green-wave")?;
    CsvWriter::new(Path::new("output/green-wave"), ROAD_LENGTH)?
        .write_run("green-wave", &wave_record)?;
    std::fs::create_dir_all("output/self-organizing")?;
    CsvWriter::new(Path::new("output/self-organizing"), ROAD_LENGTH)?
        .write_run("self-organizing", &organic_record)?;

    // 7. Comparison.
    println!("Three runs complete in {:.3} s", elapsed.as_secs_f64());
    println!();
    print_summary("free-flow", &free_record);
    print_summary("green-wave", &wave_record);
    print_summary("self-organizing", &organic_record);
    println!();
    println!(
        "Light switches recorded: green-wave {}  self-organizing {}",
        wave_record.light_history.len(),
        organic_record.light_history.len(),
    );

    Ok(())
}
