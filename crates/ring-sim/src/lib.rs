//! `ring-sim` — step-loop engine for the ringroad traffic simulator.
//!
//! # The step loop
//!
//! ```text
//! for t in 0..=max_timesteps:
//!   ① Record   — append the current occupancy row to the history.
//!   ② Measure  — space mean velocity and variance over all vehicles;
//!                density / flow over the detector window, if configured.
//!   ③ Advance  — (skipped on the final iteration) rule.apply(state, t),
//!                validate the result, snapshot the rule's light states.
//! ```
//!
//! The loop runs exactly `max_timesteps + 1` iterations: an initial-state
//! recording plus `max_timesteps` transitions.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Rayon-based [`run_replications`] across independent runs |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ring_core::Ring;
//! use ring_rules::BoundedVelocity;
//! use ring_sim::{EngineBuilder, NoopObserver};
//!
//! let engine = EngineBuilder::new(100, 1_000)
//!     .vehicles(vec![0, 10, 20, 30])
//!     .detector(0, 99)
//!     .build()?;
//! let mut rule = BoundedVelocity::new(engine.ring(), 5)?;
//! let record = engine.simulate(&mut rule, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod measure;
pub mod observer;
pub mod record;

#[cfg(feature = "parallel")]
pub mod replicate;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::EngineBuilder;
pub use engine::Engine;
pub use error::{SimError, SimResult};
pub use measure::{DetectorWindow, StepMetrics, WindowSample};
pub use observer::{NoopObserver, SimObserver};
pub use record::{OccupancyHistory, RunRecord};

#[cfg(feature = "parallel")]
pub use replicate::run_replications;
