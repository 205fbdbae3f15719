#![cfg(feature = "std")]

//! Console logger. The board and the simulator's JSON own stdout, so every
//! record goes to stderr as `[LEVEL target] message`.

use std::env;
use std::io::Write;

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Environment variable holding the maximum level (`error` … `trace`, or `off`).
pub const LOG_ENV: &str = "SEABATTLE_LOG";

/// Records from other crates are only shown from this level up.
const FOREIGN_LEVEL: Level = Level::Warn;

struct GameLogger {
    level: LevelFilter,
}

impl GameLogger {
    fn is_ours(target: &str) -> bool {
        match target.strip_prefix(env!("CARGO_CRATE_NAME")) {
            Some(rest) => rest.is_empty() || rest.starts_with("::"),
            None => false,
        }
    }
}

impl Log for GameLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
            && (Self::is_ours(metadata.target()) || metadata.level() <= FOREIGN_LEVEL)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut err = std::io::stderr().lock();
        let _ = writeln!(err, "{}", format_record(record));
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn format_record(record: &Record) -> String {
    format!("[{:<5} {}] {}", record.level(), record.target(), record.args())
}

/// Level named by `value`, `info` when unset or unparseable.
fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger at the level given by [`LOG_ENV`].
///
/// Calling it again is harmless: the first installed logger stays.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok().as_deref());
    if log::set_boxed_logger(Box::new(GameLogger { level })).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_env_value() {
        assert_eq!(level_from(None), LevelFilter::Info);
        assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
        assert_eq!(level_from(Some(" TRACE ")), LevelFilter::Trace);
        assert_eq!(level_from(Some("off")), LevelFilter::Off);
        assert_eq!(level_from(Some("loud")), LevelFilter::Info);
    }

    #[test]
    fn test_foreign_targets_need_warn() {
        let logger = GameLogger { level: LevelFilter::Debug };
        let ours = Metadata::builder().level(Level::Debug).target("seabattle::session").build();
        let foreign = Metadata::builder().level(Level::Info).target("rand").build();
        let foreign_warn = Metadata::builder().level(Level::Warn).target("rand").build();
        let too_verbose = Metadata::builder().level(Level::Trace).target("seabattle").build();
        assert!(logger.enabled(&ours));
        assert!(!logger.enabled(&foreign));
        assert!(logger.enabled(&foreign_warn));
        assert!(!logger.enabled(&too_verbose));
    }

    #[test]
    fn test_record_layout() {
        let line = format_record(
            &Record::builder()
                .args(format_args!("fleets deployed"))
                .level(Level::Info)
                .target("seabattle::session")
                .build(),
        );
        assert_eq!(line, "[INFO  seabattle::session] fleets deployed");
    }
}
