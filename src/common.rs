//! Common types for SeaBattle: cell states, shot outcomes and errors.

use alloc::string::String;
use core::fmt;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Untouched open water.
    Water,
    /// Occupied by a ship, not yet hit.
    Ship,
    /// Ship segment that has been shot.
    Hit,
    /// Open water that has been shot (or revealed around a sunk ship).
    Miss,
}

impl Cell {
    /// Character used when rendering the cell.
    pub fn symbol(self) -> char {
        match self {
            Cell::Water => '~',
            Cell::Ship => 'S',
            Cell::Hit => 'X',
            Cell::Miss => 'O',
        }
    }

    /// `true` for cells that already absorbed a shot.
    pub fn is_resolved(self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }
}

/// Result of resolving a single shot against a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Coordinates outside the grid; nothing changed.
    Invalid,
    /// Cell was already `Hit` or `Miss`; nothing changed.
    AlreadyFired,
    /// Shot landed in water.
    Miss,
    /// Shot struck a ship segment.
    Hit,
}

impl ShotOutcome {
    /// Whether the shot changed the grid and therefore used up the turn.
    pub fn consumes_turn(self) -> bool {
        matches!(self, ShotOutcome::Miss | ShotOutcome::Hit)
    }
}

/// Everything a participant learns about one shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotReport {
    pub row: usize,
    pub col: usize,
    pub outcome: ShotOutcome,
    /// The shot completed a ship.
    pub sunk: bool,
    /// Water cells revealed as `Miss` around a sunk ship.
    pub revealed: usize,
}

/// Errors returned by grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A grid must have at least one row and column.
    ZeroSize,
    /// Ships have at least one cell.
    ZeroLength,
    /// The ship (or part of it) would lie outside the grid.
    ShipOutOfBounds,
    /// A cell of the run is not open water.
    ShipOverlaps,
    /// A cell of the run touches another ship, diagonals included.
    ShipTooClose,
    /// Placement is closed once the first shot has been resolved.
    BattleStarted,
    /// Random placement gave up after its attempt budget.
    UnableToPlaceShip,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::ZeroSize => write!(f, "Grid size must be greater than zero"),
            GridError::ZeroLength => write!(f, "Ship length must be greater than zero"),
            GridError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            GridError::ShipOverlaps => write!(f, "Ship placement overlaps another ship"),
            GridError::ShipTooClose => write!(f, "Ship placement touches another ship"),
            GridError::BattleStarted => write!(f, "Ships cannot be placed after the battle started"),
            GridError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

/// Errors raised while validating a game configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroSize,
    EmptyFleet,
    /// Ship length must be within `1..=size`.
    InvalidShipLength { length: usize, size: usize },
    /// More ship cells than the grid holds.
    FleetTooLarge { cells: usize, capacity: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroSize => write!(f, "Grid size must be greater than zero"),
            ConfigError::EmptyFleet => write!(f, "Fleet manifest is empty"),
            ConfigError::InvalidShipLength { length, size } => {
                write!(f, "Ship length {} does not fit a {}x{} grid", length, size, size)
            }
            ConfigError::FleetTooLarge { cells, capacity } => {
                write!(f, "Fleet needs {} cells but the grid only has {}", cells, capacity)
            }
        }
    }
}

/// Errors raised by a participant's controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    Grid(GridError),
    /// The input stream ended while waiting for the human.
    InputClosed,
    /// Reading input or writing prompts failed.
    Io(String),
    /// Every coordinate of the target grid has already been fired at.
    TargetsExhausted,
}

impl From<GridError> for PlayerError {
    fn from(err: GridError) -> Self {
        PlayerError::Grid(err)
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for PlayerError {
    fn from(err: std::io::Error) -> Self {
        PlayerError::Io(err.to_string())
    }
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerError::Grid(e) => write!(f, "Grid error: {}", e),
            PlayerError::InputClosed => write!(f, "Input closed"),
            PlayerError::Io(e) => write!(f, "I/O error: {}", e),
            PlayerError::TargetsExhausted => write!(f, "No coordinates left to fire at"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}
#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
#[cfg(feature = "std")]
impl std::error::Error for PlayerError {}
