use alloc::boxed::Box;
use alloc::string::String;

use crate::{
    common::{GridError, PlayerError, ShotReport},
    grid::{FogView, Grid},
};

/// Interface implemented by the human and automated controllers.
///
/// A controller only ever sees the enemy grid through a [`FogView`]; shots
/// are resolved by the session on its behalf.
pub trait Player {
    /// Place every ship of `fleet`, in order, onto the provided grid.
    fn place_fleet(&mut self, grid: &mut Grid, fleet: &[usize]) -> Result<(), PlayerError>;

    /// Choose the next coordinate to fire at.
    fn select_target(&mut self, target: FogView<'_>) -> Result<(usize, usize), PlayerError>;

    /// Inform the player of the result of its last shot, including rejected ones.
    fn handle_shot_result(&mut self, _report: &ShotReport, _target: FogView<'_>) {}

    /// Inform the player of an opponent shot against its grid.
    fn handle_opponent_shot(&mut self, _report: &ShotReport, _own: &Grid) {}
}

/// A named side of the battle: its grid plus the controller driving it.
pub struct Participant {
    name: String,
    grid: Grid,
    controller: Box<dyn Player>,
}

impl Participant {
    /// Create a participant with an empty `size`×`size` grid.
    pub fn new(
        name: impl Into<String>,
        size: usize,
        controller: Box<dyn Player>,
    ) -> Result<Self, GridError> {
        Ok(Self {
            name: name.into(),
            grid: Grid::new(size)?,
            controller,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub(crate) fn place_fleet(&mut self, fleet: &[usize]) -> Result<(), PlayerError> {
        self.controller.place_fleet(&mut self.grid, fleet)
    }

    /// Throw away a partial deployment and start again from open water.
    pub(crate) fn clear_grid(&mut self) -> Result<(), GridError> {
        self.grid = Grid::new(self.grid.size())?;
        Ok(())
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub(crate) fn controller(&mut self) -> &mut dyn Player {
        self.controller.as_mut()
    }

    /// Controller and grid borrowed together, for reporting incoming fire.
    pub(crate) fn split_for_report(&mut self) -> (&mut dyn Player, &Grid) {
        (self.controller.as_mut(), &self.grid)
    }
}

impl core::fmt::Debug for Participant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Participant")
            .field("name", &self.name)
            .field("grid", &self.grid)
            .finish_non_exhaustive()
    }
}
