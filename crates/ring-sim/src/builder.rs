//! Fluent builder for constructing an [`Engine`].

use ring_core::{Ring, RoadState};

use crate::measure::DetectorWindow;
use crate::{Engine, SimError, SimResult};

/// Fluent builder for [`Engine`].
///
/// # Required inputs
///
/// - `road_length` — cells on the ring, > 0
/// - `max_timesteps` — transitions per run (≥ 0)
/// - `.vehicles(positions)` — distinct cells in `[0, road_length)`
///
/// # Optional inputs (have defaults)
///
/// | Method                | Default                          |
/// |-----------------------|----------------------------------|
/// | `.velocities(v)`      | All zeros                        |
/// | `.detector(start, end)` | No window — no density/flow series |
///
/// # Example
///
/// ```rust,ignore
/// let engine = EngineBuilder::new(100, 5_000)
///     .vehicles(vec![0, 10, 20])
///     .detector(0, 99)
///     .build()?;
/// ```
pub struct EngineBuilder {
    road_length:   u32,
    max_timesteps: u64,
    positions:     Vec<u32>,
    velocities:    Option<Vec<u32>>,
    window:        Option<(u32, u32)>,
}

impl EngineBuilder {
    pub fn new(road_length: u32, max_timesteps: u64) -> Self {
        Self {
            road_length,
            max_timesteps,
            positions:  Vec::new(),
            velocities: None,
            window:     None,
        }
    }

    /// Initial vehicle positions — distinct cells, one per vehicle.
    pub fn vehicles(mut self, positions: Vec<u32>) -> Self {
        self.positions = positions;
        self
    }

    /// Initial velocities (must match the position count).
    ///
    /// If not called, all vehicles start at rest.
    pub fn velocities(mut self, velocities: Vec<u32>) -> Self {
        self.velocities = Some(velocities);
        self
    }

    /// Sample density/velocity/flow over the inclusive cell range
    /// `[start, end]` every step.
    pub fn detector(mut self, start: u32, end: u32) -> Self {
        self.window = Some((start, end));
        self
    }

    /// Validate all inputs and return a ready-to-run [`Engine`].
    pub fn build(self) -> SimResult<Engine> {
        if self.road_length == 0 {
            return Err(SimError::ZeroRoadLength);
        }
        let ring = Ring::new(self.road_length);

        if self.positions.len() > self.road_length as usize {
            return Err(SimError::TooManyVehicles {
                count:       self.positions.len(),
                road_length: self.road_length,
            });
        }

        let velocities = self
            .velocities
            .unwrap_or_else(|| vec![0; self.positions.len()]);
        let initial = RoadState::new(self.positions, velocities);
        initial.validate(ring)?;

        let window = match self.window {
            None => None,
            Some((start, end)) => {
                if start > end || end >= self.road_length {
                    return Err(SimError::WindowOutOfBounds {
                        start,
                        end,
                        road_length: self.road_length,
                    });
                }
                Some(DetectorWindow { start, end })
            }
        };

        Ok(Engine {
            ring,
            max_timesteps: self.max_timesteps,
            window,
            initial,
        })
    }
}
