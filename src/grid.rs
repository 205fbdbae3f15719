//! Battle grid: cell matrix, placement rules and shot resolution.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{self, Write};

use log::debug;

use crate::common::{Cell, GridError, ShotOutcome};
use crate::ship::{Orientation, Ship};

/// One participant's N×N battlefield.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
    ships: Vec<Ship>,
    shots: usize,
}

impl Grid {
    /// Create an all-water grid of dimension `size`.
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::ZeroSize);
        }
        Ok(Grid {
            size,
            cells: vec![Cell::Water; size * size],
            ships: Vec::new(),
            shots: 0,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell state at (row, col), `None` when out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Ships placed so far, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of shots that changed the grid.
    pub fn shots_resolved(&self) -> usize {
        self.shots
    }

    /// In bounds and still open water.
    pub fn is_placeable(&self, row: usize, col: usize) -> bool {
        self.cell(row, col) == Some(Cell::Water)
    }

    /// Place a ship of `length` cells at (row, col).
    ///
    /// Every cell of the run must be placeable and must not touch another
    /// ship, diagonals included. The grid is only modified when the whole
    /// run validates.
    pub fn place_ship(
        &mut self,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    ) -> Result<(), GridError> {
        let ship = self.check_placement(row, col, length, orientation)?;
        for (r, c) in ship.cells() {
            self.cells[r * self.size + c] = Cell::Ship;
        }
        debug!("placed ship of length {} at ({}, {}) {:?}", length, row, col, orientation);
        self.ships.push(ship);
        Ok(())
    }

    /// Validate a placement without touching the grid.
    pub fn check_placement(
        &self,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    ) -> Result<Ship, GridError> {
        if self.shots > 0 {
            return Err(GridError::BattleStarted);
        }
        let ship = Ship::new(row, col, length, orientation, self.size)?;
        for (r, c) in ship.cells() {
            if !self.is_placeable(r, c) {
                return Err(GridError::ShipOverlaps);
            }
            if neighborhood(self.size, r, c).any(|(nr, nc)| self.cells[nr * self.size + nc] == Cell::Ship) {
                return Err(GridError::ShipTooClose);
            }
        }
        Ok(ship)
    }

    /// Fire at (row, col). Sink detection is left to the caller.
    pub fn resolve_shot(&mut self, row: usize, col: usize) -> ShotOutcome {
        let Some(idx) = self.index(row, col) else {
            return ShotOutcome::Invalid;
        };
        match self.cells[idx] {
            Cell::Hit | Cell::Miss => ShotOutcome::AlreadyFired,
            Cell::Water => {
                self.cells[idx] = Cell::Miss;
                self.shots += 1;
                ShotOutcome::Miss
            }
            Cell::Ship => {
                self.cells[idx] = Cell::Hit;
                self.shots += 1;
                if let Some(ship) = self.ships.iter_mut().find(|s| s.contains(row, col)) {
                    ship.register_hit();
                }
                ShotOutcome::Hit
            }
        }
    }

    /// `true` while any ship segment is still unhit.
    pub fn has_surviving_units(&self) -> bool {
        self.cells.contains(&Cell::Ship)
    }

    /// Whether the ship owning the `Hit` cell at (row, col) is fully hit.
    pub fn is_ship_destroyed(&self, row: usize, col: usize) -> bool {
        if self.cell(row, col) != Some(Cell::Hit) {
            return false;
        }
        self.ship_at(row, col).is_some_and(Ship::is_sunk)
    }

    /// Turn the water around a destroyed ship into `Miss`.
    ///
    /// (row, col) must be a `Hit` cell of a sunk ship; the buffer around the
    /// whole ship is revealed. Any other cell is left alone, so water can
    /// never turn into `Miss` before the battle. Returns the number of cells
    /// revealed.
    pub fn mark_surrounding_as_missed(&mut self, row: usize, col: usize) -> usize {
        if !self.is_ship_destroyed(row, col) {
            return 0;
        }
        let centres: Vec<(usize, usize)> = match self.ship_at(row, col) {
            Some(ship) => ship.cells().collect(),
            None => return 0,
        };
        let mut revealed = 0;
        for (r, c) in centres {
            for (nr, nc) in neighborhood(self.size, r, c) {
                let idx = nr * self.size + nc;
                if self.cells[idx] == Cell::Water {
                    self.cells[idx] = Cell::Miss;
                    revealed += 1;
                }
            }
        }
        revealed
    }

    /// Text dump of the grid; `hide_ships` renders ships as water.
    pub fn render(&self, hide_ships: bool) -> String {
        let width = digits(self.size - 1);
        let mut out = String::new();
        let _ = write!(out, "{:width$} ", "", width = width);
        for c in 0..self.size {
            let _ = write!(out, " {:>width$}", c, width = width);
        }
        out.push('\n');
        for r in 0..self.size {
            let _ = write!(out, "{:>width$} ", r, width = width);
            for c in 0..self.size {
                let cell = match self.cells[r * self.size + c] {
                    Cell::Ship if hide_ships => Cell::Water,
                    cell => cell,
                };
                let _ = write!(out, " {:>width$}", cell.symbol(), width = width);
            }
            out.push('\n');
        }
        out
    }

    /// Fog-of-war view handed to the opposing side.
    pub fn fog(&self) -> FogView<'_> {
        FogView { grid: self }
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }

    fn ship_at(&self, row: usize, col: usize) -> Option<&Ship> {
        self.ships.iter().find(|s| s.contains(row, col))
    }
}

/// In-bounds cells of the 3×3 block centred on (row, col), centre included.
fn neighborhood(size: usize, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
    let rows = row.saturating_sub(1)..=(row + 1).min(size - 1);
    rows.flat_map(move |r| {
        let cols = col.saturating_sub(1)..=(col + 1).min(size - 1);
        cols.map(move |c| (r, c))
    })
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}

fn digits(mut n: usize) -> usize {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}

/// Read-only view of an enemy grid with ships hidden.
#[derive(Debug, Clone, Copy)]
pub struct FogView<'a> {
    grid: &'a Grid,
}

impl FogView<'_> {
    pub fn size(&self) -> usize {
        self.grid.size
    }

    /// What the shooter can know about (row, col): ships read as water.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.grid.cell(row, col).map(|cell| match cell {
            Cell::Ship => Cell::Water,
            other => other,
        })
    }

    /// Cell was already fired at or revealed.
    pub fn is_resolved(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_some_and(Cell::is_resolved)
    }

    pub fn has_surviving_units(&self) -> bool {
        self.grid.has_surviving_units()
    }

    pub fn render(&self) -> String {
        self.grid.render(true)
    }
}
