#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod common;
mod config;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
mod session;
mod ship;
pub mod strategy;

pub use common::*;
pub use config::*;
pub use grid::{FogView, Grid};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::{Participant, Player};
pub use player_ai::AiPlayer;
#[cfg(feature = "std")]
pub use player_cli::{parse_coords, parse_orientation, CliPlayer};
pub use session::{GameStatus, Phase, Session, SessionError, SessionSummary, Side};
pub use ship::{Orientation, Ship};
pub use strategy::{place_fleet_randomly, TargetMemory};
