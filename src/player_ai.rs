use rand::{rngs::SmallRng, Rng};

use crate::{
    common::PlayerError,
    grid::{FogView, Grid},
    player::Player,
    strategy::{self, TargetMemory},
};

/// Automated opponent: random placement, random non-repeating shots.
#[derive(Debug, Clone)]
pub struct AiPlayer<R = SmallRng> {
    rng: R,
    memory: TargetMemory,
}

impl<R: Rng> AiPlayer<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            memory: TargetMemory::new(),
        }
    }

    /// Coordinates fired at so far.
    pub fn memory(&self) -> &TargetMemory {
        &self.memory
    }
}

impl<R: Rng> Player for AiPlayer<R> {
    fn place_fleet(&mut self, grid: &mut Grid, fleet: &[usize]) -> Result<(), PlayerError> {
        strategy::place_fleet_randomly(grid, fleet, &mut self.rng)?;
        Ok(())
    }

    fn select_target(&mut self, target: FogView<'_>) -> Result<(usize, usize), PlayerError> {
        self.memory
            .next_target(&mut self.rng, target.size())
            .ok_or(PlayerError::TargetsExhausted)
    }
}
