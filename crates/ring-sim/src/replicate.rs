//! Parallel Monte Carlo replications.
//!
//! A single run is strictly sequential; the exploitable parallelism is
//! *across* independent runs.  Each replication gets its own engine, rule,
//! and deterministically derived RNG, so no mutable state is shared and
//! the batch is reproducible from `base_seed` alone.  Parameter sweeps and
//! statistical aggregation stay with the caller.

use rayon::prelude::*;
use ring_core::SimRng;
use ring_rules::UpdateRule;

use crate::{Engine, NoopObserver, RunRecord, SimResult};

/// Run `count` independent replications in parallel.
///
/// `setup` is called once per replication with the replication index and a
/// child RNG derived from `base_seed`; it returns the engine/rule pair for
/// that run.  Results come back indexed by replication.
///
/// # Example
///
/// ```rust,ignore
/// let records = run_replications(32, 42, |_, mut rng| {
///     let engine = random_engine(&mut rng)?;
///     let rule = BoundedVelocityRandom::new(engine.ring(), 5, 0.1, rng)?;
///     Ok((engine, rule))
/// });
/// ```
pub fn run_replications<R, F>(
    count:     usize,
    base_seed: u64,
    setup:     F,
) -> Vec<SimResult<RunRecord>>
where
    R: UpdateRule,
    F: Fn(usize, SimRng) -> SimResult<(Engine, R)> + Sync,
{
    // Child RNGs are derived sequentially from one root so the batch is
    // deterministic regardless of worker scheduling.
    let mut root = SimRng::new(base_seed);
    let rngs: Vec<SimRng> = (0..count).map(|k| root.child(k as u64)).collect();

    rngs.into_par_iter()
        .enumerate()
        .map(|(k, rng)| {
            let (engine, mut rule) = setup(k, rng)?;
            engine.simulate(&mut rule, &mut NoopObserver)
        })
        .collect()
}
