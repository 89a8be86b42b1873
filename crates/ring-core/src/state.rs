//! Vehicle configuration at one instant, plus the sorted-order view rules
//! compute in.
//!
//! # Design
//!
//! `RoadState` is pure data: two same-length vectors, one cell position and
//! one velocity per vehicle, both indexed by a stable vehicle index.  A rule
//! consumes the current state and produces a fresh one; the engine replaces
//! its copy wholesale, so a recorded state is never mutated afterwards.
//!
//! Rules that reason about "the vehicle ahead" go through
//! [`SortedVehicles`]: it captures the position-ascending permutation,
//! the rule computes over the sorted arrays, and `into_state` scatters the
//! results back to the original vehicle indexing.  Vehicle `i` therefore
//! keeps its identity across steps even though the update order follows the
//! road, not the index.

use crate::{Ring, RingError, RingResult};

// ── RoadState ─────────────────────────────────────────────────────────────────

/// Positions and velocities of every vehicle at one instant.
///
/// Invariants (checked by [`validate`][Self::validate]):
/// - `positions.len() == velocities.len()`
/// - every position lies in `[0, ring.length())`
/// - positions are pairwise distinct — no two vehicles share a cell
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadState {
    /// Cell index of each vehicle, indexed by vehicle.
    pub positions: Vec<u32>,
    /// Velocity of each vehicle in cells per step, indexed by vehicle.
    pub velocities: Vec<u32>,
}

impl RoadState {
    pub fn new(positions: Vec<u32>, velocities: Vec<u32>) -> Self {
        Self { positions, velocities }
    }

    /// A state with no vehicles.
    pub fn empty() -> Self {
        Self { positions: Vec::new(), velocities: Vec::new() }
    }

    /// Number of vehicles.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Check every `RoadState` invariant against `ring`.
    ///
    /// The velocity bound checked here is the road length — a velocity that
    /// laps the ring in one step can only come from a broken rule.  The
    /// per-step `velocity <= gap` bound is a rule obligation, not a state
    /// invariant.
    pub fn validate(&self, ring: Ring) -> RingResult<()> {
        if self.velocities.len() != self.positions.len() {
            return Err(RingError::VehicleCountMismatch {
                expected: self.positions.len(),
                got:      self.velocities.len(),
                what:     "velocities",
            });
        }
        for &p in &self.positions {
            if p >= ring.length() {
                return Err(RingError::PositionOutOfRange {
                    position:    p,
                    road_length: ring.length(),
                });
            }
        }
        for &v in &self.velocities {
            if v > ring.length() {
                return Err(RingError::VelocityOutOfRange {
                    velocity:    v,
                    road_length: ring.length(),
                });
            }
        }
        // Duplicate scan on a sorted copy; no hashing, n is small.
        let mut sorted = self.positions.clone();
        sorted.sort_unstable();
        for pair in sorted.windows(2) {
            if pair[0] == pair[1] {
                return Err(RingError::DuplicatePosition(pair[0]));
            }
        }
        Ok(())
    }

    /// 0/1 occupancy row for this state, one entry per road cell.
    pub fn occupancy_row(&self, ring: Ring) -> Vec<u8> {
        let mut row = vec![0u8; ring.length() as usize];
        for &p in &self.positions {
            row[p as usize] = 1;
        }
        row
    }
}

// ── SortedVehicles ────────────────────────────────────────────────────────────

/// Position-ascending view of a [`RoadState`], remembering the permutation.
///
/// `positions[k]` is the k-th vehicle along the road; `order[k]` is its
/// index in the originating state.  [`into_state`][Self::into_state]
/// inverts the permutation.
#[derive(Clone, Debug)]
pub struct SortedVehicles {
    /// Original vehicle index of each sorted slot.
    pub order: Vec<usize>,
    /// Positions in ascending order.
    pub positions: Vec<u32>,
    /// Velocities matching `positions` slot-for-slot.
    pub velocities: Vec<u32>,
}

impl SortedVehicles {
    /// Sort `state` by position ascending.
    pub fn from_state(state: &RoadState) -> Self {
        let n = state.len();
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_unstable_by_key(|&i| state.positions[i]);

        let positions:  Vec<u32> = order.iter().map(|&i| state.positions[i]).collect();
        let velocities: Vec<u32> = order.iter().map(|&i| state.velocities[i]).collect();
        Self { order, positions, velocities }
    }

    /// Number of vehicles.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Scatter the (possibly updated) sorted arrays back to the original
    /// vehicle indexing.
    pub fn into_state(self) -> RoadState {
        let n = self.order.len();
        let mut positions  = vec![0u32; n];
        let mut velocities = vec![0u32; n];
        for (slot, &vehicle) in self.order.iter().enumerate() {
            positions[vehicle]  = self.positions[slot];
            velocities[vehicle] = self.velocities[slot];
        }
        RoadState { positions, velocities }
    }
}
