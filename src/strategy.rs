// Random placement and non-repeating random targeting for the automated side.
// The random source is always passed in so games can be replayed from a seed.

use alloc::collections::BTreeSet;

use log::debug;
use rand::Rng;

use crate::{
    common::GridError,
    grid::Grid,
    ship::Orientation,
};

/// Placement attempts per ship before giving up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Returns a random valid (row, col, Orientation) for a ship of `length`.
pub fn random_placement<R: Rng + ?Sized>(
    grid: &Grid,
    length: usize,
    rng: &mut R,
) -> Result<(usize, usize, Orientation), GridError> {
    let size = grid.size();
    if length == 0 {
        return Err(GridError::ZeroLength);
    }
    if length > size {
        return Err(GridError::ShipOutOfBounds);
    }
    if grid.shots_resolved() > 0 {
        return Err(GridError::BattleStarted);
    }
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let orient = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let max_r = if orient == Orientation::Vertical { size - length } else { size - 1 };
        let max_c = if orient == Orientation::Horizontal { size - length } else { size - 1 };
        let r = rng.random_range(0..=max_r);
        let c = rng.random_range(0..=max_c);
        if grid.check_placement(r, c, length, orient).is_ok() {
            return Ok((r, c, orient));
        }
    }
    Err(GridError::UnableToPlaceShip)
}

/// Place a single ship of `length` at a random valid spot.
pub fn place_ship_randomly<R: Rng + ?Sized>(
    grid: &mut Grid,
    length: usize,
    rng: &mut R,
) -> Result<(usize, usize, Orientation), GridError> {
    let (r, c, o) = random_placement(grid, length, rng)?;
    grid.place_ship(r, c, length, o)?;
    Ok((r, c, o))
}

/// Place every ship of the manifest in order. No backtracking across ships.
pub fn place_fleet_randomly<R: Rng + ?Sized>(
    grid: &mut Grid,
    fleet: &[usize],
    rng: &mut R,
) -> Result<(), GridError> {
    for &length in fleet {
        let (r, c, o) = place_ship_randomly(grid, length, rng)?;
        debug!("auto-placed length {} at ({}, {}) {:?}", length, r, c, o);
    }
    Ok(())
}

/// Coordinates the automated side has already fired at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetMemory {
    fired: BTreeSet<(usize, usize)>,
}

impl TargetMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw uniformly until an unfired coordinate of a `size`×`size` grid
    /// comes up, and remember it. `None` once every coordinate is spent.
    pub fn next_target<R: Rng + ?Sized>(&mut self, rng: &mut R, size: usize) -> Option<(usize, usize)> {
        if size == 0 || self.fired.len() >= size * size {
            return None;
        }
        loop {
            let target = (rng.random_range(0..size), rng.random_range(0..size));
            if self.fired.insert(target) {
                return Some(target);
            }
        }
    }

    pub fn has_fired(&self, row: usize, col: usize) -> bool {
        self.fired.contains(&(row, col))
    }

    pub fn len(&self) -> usize {
        self.fired.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fired.is_empty()
    }
}
