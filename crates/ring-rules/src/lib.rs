//! `ring-rules` — update-rule variants for the ringroad traffic simulator.
//!
//! An [`UpdateRule`] maps the current [`ring_core::RoadState`] to the next
//! one.  The engine in `ring-sim` is generic over the trait and never
//! depends on a concrete variant.
//!
//! # Variants
//!
//! | Type                    | Behavior                                          |
//! |-------------------------|---------------------------------------------------|
//! | [`Rule184`]             | Binary cellular automaton: advance iff cell ahead is empty |
//! | [`Rule184Random`]       | Rule 184 plus per-vehicle random stalling         |
//! | [`BoundedVelocity`]     | Deterministic car-following with a velocity cap   |
//! | [`BoundedVelocityRandom`] | Car-following plus stochastic braking           |
//! | [`FixedCycleLights`]    | Car-following through fixed-phase traffic lights  |
//! | [`SelfOrganizingLights`]| Car-following through queue-triggered lights      |
//!
//! All stochastic variants own an explicit [`ring_core::SimRng`]; a run is
//! replayable given the same seed and inputs.

pub mod adaptive;
pub mod bounded;
pub mod error;
pub mod lights;
pub mod rule;
pub mod rule184;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use adaptive::{AdaptiveLightConfig, LightController, SelfOrganizingLights};
pub use bounded::{BoundedVelocity, BoundedVelocityRandom};
pub use error::{RuleError, RuleResult};
pub use lights::{FixedCycleConfig, FixedCycleLights, FixedLight};
pub use rule::{LightSignal, UpdateRule};
pub use rule184::{Rule184, Rule184Random};
