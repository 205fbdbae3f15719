//! Turn loop: Setup → Battle → Finished.

use core::fmt;

use log::{debug, info};

use crate::{
    common::{ConfigError, GridError, PlayerError, ShotOutcome, ShotReport},
    config::GameConfig,
    player::Participant,
};

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Setup,
    Battle,
    Finished,
}

/// Which participant of the session. The player always fires first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Opponent,
}

/// Current status of a game, seen from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Serializable outcome of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionSummary {
    pub status: GameStatus,
    pub winner: Option<Side>,
    pub rounds: usize,
    pub player_shots: usize,
    pub opponent_shots: usize,
}

/// Errors returned by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    Config(ConfigError),
    Grid(GridError),
    Player(PlayerError),
    /// Operation called outside the phase it belongs to.
    WrongPhase { expected: Phase, found: Phase },
    /// A participant's grid does not match the configured size.
    GridSizeMismatch { expected: usize, found: usize },
    /// A controller returned without placing the whole manifest.
    IncompleteFleet { side: Side, placed: usize, expected: usize },
}

impl From<ConfigError> for SessionError {
    fn from(err: ConfigError) -> Self {
        SessionError::Config(err)
    }
}

impl From<GridError> for SessionError {
    fn from(err: GridError) -> Self {
        SessionError::Grid(err)
    }
}

impl From<PlayerError> for SessionError {
    fn from(err: PlayerError) -> Self {
        SessionError::Player(err)
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Config(e) => write!(f, "Config error: {}", e),
            SessionError::Grid(e) => write!(f, "Grid error: {}", e),
            SessionError::Player(e) => write!(f, "Player error: {}", e),
            SessionError::WrongPhase { expected, found } => {
                write!(f, "Expected phase {:?}, session is in {:?}", expected, found)
            }
            SessionError::GridSizeMismatch { expected, found } => {
                write!(f, "Grid size {} does not match configured size {}", found, expected)
            }
            SessionError::IncompleteFleet { side, placed, expected } => {
                write!(f, "{:?} placed {} of {} ships", side, placed, expected)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SessionError {}

/// A game between the player (first mover) and the opponent.
#[derive(Debug)]
pub struct Session {
    config: GameConfig,
    player: Participant,
    opponent: Participant,
    phase: Phase,
    winner: Option<Side>,
    rounds: usize,
    player_shots: usize,
    opponent_shots: usize,
}

impl Session {
    /// Create a session in `Setup`; both grids must be empty and sized per `config`.
    pub fn new(
        config: GameConfig,
        player: Participant,
        opponent: Participant,
    ) -> Result<Self, SessionError> {
        for p in [&player, &opponent] {
            if p.grid().size() != config.size() {
                return Err(SessionError::GridSizeMismatch {
                    expected: config.size(),
                    found: p.grid().size(),
                });
            }
        }
        Ok(Self {
            config,
            player,
            opponent,
            phase: Phase::Setup,
            winner: None,
            rounds: 0,
            player_shots: 0,
            opponent_shots: 0,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &Participant {
        &self.player
    }

    pub fn opponent(&self) -> &Participant {
        &self.opponent
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Completed rounds; a round ends early when the player wins.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn status(&self) -> GameStatus {
        match self.winner {
            None => GameStatus::InProgress,
            Some(Side::Player) => GameStatus::Won,
            Some(Side::Opponent) => GameStatus::Lost,
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            status: self.status(),
            winner: self.winner,
            rounds: self.rounds,
            player_shots: self.player_shots,
            opponent_shots: self.opponent_shots,
        }
    }

    /// Both sides deploy the manifest; moves the session into `Battle`.
    ///
    /// On failure both grids are cleared and the session stays in `Setup`,
    /// so `setup` can be called again from a clean slate.
    pub fn setup(&mut self) -> Result<(), SessionError> {
        self.expect_phase(Phase::Setup)?;
        if let Err(e) = self.deploy_fleets() {
            self.player.clear_grid()?;
            self.opponent.clear_grid()?;
            return Err(e);
        }
        self.phase = Phase::Battle;
        info!(
            "fleets deployed on {}x{} grids, battle begins",
            self.config.size(),
            self.config.size()
        );
        Ok(())
    }

    /// Player fires, then (unless the game just ended) the opponent fires.
    pub fn play_round(&mut self) -> Result<Phase, SessionError> {
        self.expect_phase(Phase::Battle)?;
        self.rounds += 1;

        let report = exchange_fire(&mut self.player, &mut self.opponent)?;
        self.player_shots += 1;
        debug!("round {}: {} fired {:?}", self.rounds, self.player.name(), report);
        if !self.opponent.grid().has_surviving_units() {
            self.finish(Side::Player);
            return Ok(self.phase);
        }

        let report = exchange_fire(&mut self.opponent, &mut self.player)?;
        self.opponent_shots += 1;
        debug!("round {}: {} fired {:?}", self.rounds, self.opponent.name(), report);
        if !self.player.grid().has_surviving_units() {
            self.finish(Side::Opponent);
        }
        Ok(self.phase)
    }

    /// Run setup (if still pending) and rounds until a side has lost.
    pub fn run(&mut self) -> Result<Side, SessionError> {
        if self.phase == Phase::Setup {
            self.setup()?;
        }
        loop {
            if let Some(winner) = self.winner {
                return Ok(winner);
            }
            self.play_round()?;
        }
    }

    fn deploy_fleets(&mut self) -> Result<(), SessionError> {
        let expected = self.config.fleet().len();
        for (side, participant) in [
            (Side::Player, &mut self.player),
            (Side::Opponent, &mut self.opponent),
        ] {
            participant.place_fleet(self.config.fleet())?;
            let placed = participant.grid().ships().len();
            if placed != expected {
                return Err(SessionError::IncompleteFleet { side, placed, expected });
            }
        }
        Ok(())
    }

    fn finish(&mut self, winner: Side) {
        self.phase = Phase::Finished;
        self.winner = Some(winner);
        let name = match winner {
            Side::Player => self.player.name(),
            Side::Opponent => self.opponent.name(),
        };
        info!("{} wins after {} rounds", name, self.rounds);
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), SessionError> {
        if self.phase != expected {
            return Err(SessionError::WrongPhase {
                expected,
                found: self.phase,
            });
        }
        Ok(())
    }
}

/// One turn of `shooter` against `target`.
///
/// Rejected shots (`Invalid`, `AlreadyFired`) are reported back to the
/// shooter and do not use up the turn; it is asked again until a shot lands.
fn exchange_fire(
    shooter: &mut Participant,
    target: &mut Participant,
) -> Result<ShotReport, SessionError> {
    loop {
        let (row, col) = shooter.controller().select_target(target.grid().fog())?;
        let report = resolve(target, row, col);
        shooter.controller().handle_shot_result(&report, target.grid().fog());
        if report.outcome.consumes_turn() {
            let (controller, grid) = target.split_for_report();
            controller.handle_opponent_shot(&report, grid);
            return Ok(report);
        }
        debug!("{} re-aims after {:?} at ({}, {})", shooter.name(), report.outcome, row, col);
    }
}

/// Resolve the shot, then check for a sunk ship and reveal its surroundings.
fn resolve(target: &mut Participant, row: usize, col: usize) -> ShotReport {
    let grid = target.grid_mut();
    let outcome = grid.resolve_shot(row, col);
    let mut sunk = false;
    let mut revealed = 0;
    if outcome == ShotOutcome::Hit && grid.is_ship_destroyed(row, col) {
        sunk = true;
        revealed = grid.mark_surrounding_as_missed(row, col);
    }
    ShotReport {
        row,
        col,
        outcome,
        sunk,
        revealed,
    }
}
