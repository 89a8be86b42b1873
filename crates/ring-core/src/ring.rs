//! Circular-road geometry.
//!
//! The road is a ring of `length` discrete cells indexed `0..length`.  All
//! distance arithmetic is modular: the cell after `length - 1` is `0`.  The
//! gap array computed here is the single source of truth for collision
//! avoidance — a rule must never set a vehicle's velocity above its gap.

/// Geometry of a circular single-lane road.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ring {
    length: u32,
}

impl Ring {
    /// A ring of `length` cells.
    ///
    /// # Panics
    /// Panics if `length == 0` — a zero-cell road is meaningless and every
    /// caller validates its configuration before constructing one.
    pub fn new(length: u32) -> Self {
        assert!(length > 0, "ring length must be positive");
        Self { length }
    }

    /// Number of cells on the ring.
    #[inline]
    pub fn length(self) -> u32 {
        self.length
    }

    /// Reduce `cell` modulo the ring length.
    #[inline]
    pub fn wrap(self, cell: u64) -> u32 {
        (cell % self.length as u64) as u32
    }

    /// The cell reached from `cell` after moving `by` cells forward.
    #[inline]
    pub fn advance(self, cell: u32, by: u32) -> u32 {
        self.wrap(cell as u64 + by as u64)
    }

    /// Circular distance travelling forward from `from` to `to`.
    ///
    /// Returns 0 when the cells coincide; never exceeds `length - 1`.
    #[inline]
    pub fn distance_ahead(self, from: u32, to: u32) -> u32 {
        if to >= from {
            to - from
        } else {
            self.length - from + to
        }
    }

    /// Gap (empty cells) between each vehicle and the vehicle ahead of it.
    ///
    /// `sorted` must hold pairwise-distinct positions in ascending order.
    /// `gap[i]` is the number of empty cells between vehicle `i` and vehicle
    /// `i + 1`; the last vehicle's gap closes the loop against the first
    /// vehicle plus the ring length.  A lone vehicle sees `length - 1` free
    /// cells ahead of itself.
    pub fn gaps(self, sorted: &[u32]) -> Vec<u32> {
        let n = sorted.len();
        let mut gaps = Vec::with_capacity(n);
        if n == 0 {
            return gaps;
        }
        for i in 0..n - 1 {
            gaps.push(sorted[i + 1] - sorted[i] - 1);
        }
        // Wraparound: distance from the last vehicle forward to the first.
        gaps.push(sorted[0] + self.length - sorted[n - 1] - 1);
        gaps
    }
}
