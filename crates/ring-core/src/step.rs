//! Simulation time model.
//!
//! Time is a monotonically increasing `Timestep` counter.  One step is one
//! synchronous update of the whole road: every vehicle's velocity and
//! position change exactly once per step.  Using an integer counter keeps
//! all phase arithmetic (traffic-light cycles, offsets) exact.

use std::fmt;

/// An absolute simulation step counter.
///
/// Stored as `u64`: even at millions of steps per run and millions of runs,
/// the counter never wraps.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestep(pub u64);

impl Timestep {
    pub const ZERO: Timestep = Timestep(0);

    /// Return the step `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Timestep {
        Timestep(self.0 + n)
    }

    /// Steps elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Timestep) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Timestep {
    type Output = Timestep;
    #[inline]
    fn add(self, rhs: u64) -> Timestep {
        Timestep(self.0 + rhs)
    }
}

impl std::ops::Sub for Timestep {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Timestep) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Timestep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}
