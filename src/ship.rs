//! Ship placement records tracked by the grid.

use crate::common::GridError;

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A ship placed on an N×N grid, with its hit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    row: usize,
    col: usize,
    length: usize,
    orientation: Orientation,
    hits: usize,
}

impl Ship {
    /// Describe a ship at (`row`, `col`) extending right or down.
    /// Fails when the run does not fit an N×N grid.
    pub fn new(
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
        n: usize,
    ) -> Result<Self, GridError> {
        if length == 0 {
            return Err(GridError::ZeroLength);
        }
        // `along` is the axis the ship extends on, `across` the fixed one
        let (along, across) = match orientation {
            Orientation::Horizontal => (col, row),
            Orientation::Vertical => (row, col),
        };
        let fits = across < n && along.checked_add(length).is_some_and(|end| end <= n);
        if !fits {
            return Err(GridError::ShipOutOfBounds);
        }
        Ok(Ship {
            row,
            col,
            length,
            orientation,
            hits: 0,
        })
    }

    /// Cells covered by the ship, from the origin outward.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(move |i| match self.orientation {
            Orientation::Horizontal => (self.row, self.col + i),
            Orientation::Vertical => (self.row + i, self.col),
        })
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        match self.orientation {
            Orientation::Horizontal => row == self.row && col >= self.col && col < self.col + self.length,
            Orientation::Vertical => col == self.col && row >= self.row && row < self.row + self.length,
        }
    }

    /// Count one more hit segment. The grid only calls this on a `Ship → Hit` transition.
    pub(crate) fn register_hit(&mut self) {
        if self.hits < self.length {
            self.hits += 1;
        }
    }

    /// All segments hit.
    pub fn is_sunk(&self) -> bool {
        self.hits == self.length
    }

    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn hits(&self) -> usize {
        self.hits
    }
}
