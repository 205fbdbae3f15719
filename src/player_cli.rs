#![cfg(feature = "std")]

use std::io::{BufRead, Write};
use std::string::String;

use rand::rngs::SmallRng;

use crate::{
    common::{PlayerError, ShotOutcome, ShotReport},
    grid::{FogView, Grid},
    player::Player,
    ship::Orientation,
    strategy,
};

/// Interactive player reading commands from `input` and writing prompts to `output`.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
    rng: SmallRng,
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    /// `rng` backs the "ENTER for random placement" shortcut.
    pub fn new(input: R, output: W, rng: SmallRng) -> Self {
        Self { input, output, rng }
    }

    /// Give back the output sink, e.g. to inspect a transcript.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<String, PlayerError> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PlayerError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn read_orientation(&mut self) -> Result<Orientation, PlayerError> {
        loop {
            write!(self.output, "Horizontal? (y/n): ")?;
            let line = self.read_line()?;
            match parse_orientation(&line) {
                Some(o) => return Ok(o),
                None => writeln!(self.output, "✗ Answer y (horizontal) or n (vertical).")?,
            }
        }
    }
}

/// Parse "row col": two whitespace-separated 0-based integers within a `size`×`size` grid.
pub fn parse_coords(input: &str, size: usize) -> Result<(usize, usize), String> {
    if size == 0 {
        return Err("Grid has no cells".to_string());
    }
    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.is_empty() {
        return Err("Empty input".to_string());
    }
    if parts.len() != 2 {
        return Err(format!("Expected two numbers (row column), got {}", parts.len()));
    }
    let row: usize = parts[0]
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 0-{}", parts[0], size - 1))?;
    let col: usize = parts[1]
        .parse()
        .map_err(|_| format!("Invalid column '{}' - must be a number 0-{}", parts[1], size - 1))?;
    if row >= size || col >= size {
        return Err(format!("({}, {}) is off the grid - use 0-{}", row, col, size - 1));
    }
    Ok((row, col))
}

/// `y`/`h` → horizontal, `n`/`v` → vertical.
pub fn parse_orientation(input: &str) -> Option<Orientation> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "h" => Some(Orientation::Horizontal),
        "n" | "no" | "v" => Some(Orientation::Vertical),
        _ => None,
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn place_fleet(&mut self, grid: &mut Grid, fleet: &[usize]) -> Result<(), PlayerError> {
        writeln!(self.output, "\nPlace your ships: enter the bow as 'row col' (e.g. 1 2).")?;
        writeln!(self.output, "Ships may not touch, not even at the corners.")?;
        writeln!(self.output, "Press ENTER for random placement.")?;

        for (i, &length) in fleet.iter().enumerate() {
            loop {
                write!(self.output, "\n{}", grid.render(false))?;
                write!(
                    self.output,
                    "Ship {}/{} (length {}): ",
                    i + 1,
                    fleet.len(),
                    length
                )?;
                let line = self.read_line()?;

                if line.is_empty() {
                    match strategy::place_ship_randomly(grid, length, &mut self.rng) {
                        Ok((r, c, _)) => {
                            writeln!(self.output, "✓ Ship randomly placed at {} {}", r, c)?;
                            break;
                        }
                        Err(e) => {
                            writeln!(self.output, "✗ Cannot place ship here: {}", e)?;
                            continue;
                        }
                    }
                }

                let (r, c) = match parse_coords(&line, grid.size()) {
                    Ok(coord) => coord,
                    Err(e) => {
                        writeln!(self.output, "✗ Error: {}", e)?;
                        continue;
                    }
                };
                let orientation = if length > 1 {
                    self.read_orientation()?
                } else {
                    Orientation::Horizontal
                };

                match grid.place_ship(r, c, length, orientation) {
                    Ok(()) => {
                        writeln!(self.output, "✓ Ship placed at {} {}", r, c)?;
                        break;
                    }
                    Err(e) => writeln!(self.output, "✗ Cannot place ship here: {}", e)?,
                }
            }
        }
        write!(self.output, "\n{}", grid.render(false))?;
        writeln!(self.output, "✓ All ships placed!")?;
        Ok(())
    }

    fn select_target(&mut self, target: FogView<'_>) -> Result<(usize, usize), PlayerError> {
        writeln!(self.output, "\nYour turn. Enemy waters:")?;
        write!(self.output, "{}", target.render())?;
        loop {
            write!(self.output, "Enter target (row col): ")?;
            let line = self.read_line()?;
            match parse_coords(&line, target.size()) {
                Ok((r, c)) if target.is_resolved(r, c) => {
                    writeln!(self.output, "✗ Already fired at {} {}, choose another target.", r, c)?;
                }
                Ok(coord) => return Ok(coord),
                Err(e) => writeln!(self.output, "✗ Invalid coordinates: {}", e)?,
            }
        }
    }

    fn handle_shot_result(&mut self, report: &ShotReport, _target: FogView<'_>) {
        let msg = match (report.outcome, report.sunk) {
            (ShotOutcome::Hit, true) => "💥 Hit! Ship destroyed!",
            (ShotOutcome::Hit, false) => "🎯 Hit!",
            (ShotOutcome::Miss, _) => "💧 Miss.",
            (ShotOutcome::AlreadyFired, _) => "✗ Already fired there, choose another target.",
            (ShotOutcome::Invalid, _) => "✗ Target is off the grid.",
        };
        let _ = writeln!(self.output, "{}", msg);
    }

    fn handle_opponent_shot(&mut self, report: &ShotReport, own: &Grid) {
        let _ = writeln!(self.output, "\nEnemy fires at {} {}.", report.row, report.col);
        let msg = match (report.outcome, report.sunk) {
            (ShotOutcome::Hit, true) => "💀 Your ship was destroyed!",
            (ShotOutcome::Hit, false) => "⚠️  Enemy hit your ship!",
            _ => "Enemy missed.",
        };
        let _ = writeln!(self.output, "{}", msg);
        let _ = write!(self.output, "{}", own.render(false));
    }
}
