//! `ring-core` — foundational types for the `ringroad` traffic simulator.
//!
//! This crate is a dependency of every other `ring-*` crate.  It intentionally
//! has no `ring-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`ring`]   | `Ring` — circular-road geometry and gap computation   |
//! | [`state`]  | `RoadState`, `SortedVehicles`                         |
//! | [`step`]   | `Timestep` — the discrete time counter                |
//! | [`rng`]    | `SimRng` — explicit seedable random generator         |
//! | [`error`]  | `RingError`, `RingResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                   |
//! |---------|----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.      |

pub mod error;
pub mod ring;
pub mod rng;
pub mod state;
pub mod step;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{RingError, RingResult};
pub use ring::Ring;
pub use rng::SimRng;
pub use state::{RoadState, SortedVehicles};
pub use step::Timestep;
