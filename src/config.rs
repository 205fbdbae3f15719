use alloc::vec::Vec;

use crate::common::ConfigError;

pub const DEFAULT_GRID_SIZE: usize = 10;
pub const STANDARD_FLEET: [usize; 10] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Display names used by the console game.
pub const PLAYER_NAME: &str = "Player";
pub const OPPONENT_NAME: &str = "Bot";

/// Grid dimension and fleet manifest shared by both participants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    size: usize,
    fleet: Vec<usize>,
}

impl GameConfig {
    /// Validate and build a configuration.
    pub fn new(size: usize, fleet: Vec<usize>) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if fleet.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        if let Some(&length) = fleet.iter().find(|&&len| len == 0 || len > size) {
            return Err(ConfigError::InvalidShipLength { length, size });
        }
        let cells: usize = fleet.iter().sum();
        let capacity = size * size;
        if cells > capacity {
            return Err(ConfigError::FleetTooLarge { cells, capacity });
        }
        Ok(Self { size, fleet })
    }

    /// The classic 10×10 game: one 4, two 3s, three 2s, four 1s.
    pub fn standard() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            fleet: STANDARD_FLEET.to_vec(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn fleet(&self) -> &[usize] {
        &self.fleet
    }

    /// Total number of ship segments per side.
    pub fn total_ship_cells(&self) -> usize {
        self.fleet.iter().sum()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}
