//! Minimal stderr backend for the `log` facade, installed by the binaries.
//!
//! The level comes from repeated `-v` flags (`-v` debug, `-vv` trace) or,
//! when no flag is given, from the `CHESS_MOVEGEN_LOG` environment variable
//! (`error`, `warn`, `info`, `debug`, `trace`, `off`). The default is `warn`.

use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Environment variable read when no `-v` flag is present.
pub const LOG_ENV: &str = "CHESS_MOVEGEN_LOG";

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut err = std::io::stderr().lock();
        let _ = writeln!(
            err,
            "[{:<5} {}] {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Install the stderr logger at `level`. Fails if a logger is already set.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// Level implied by `-v`/`-vv` flags among `args`, falling back to
/// `env_value` (normally the contents of [`LOG_ENV`]).
#[must_use]
pub fn level_from(args: &[String], env_value: Option<&str>) -> LevelFilter {
    let verbosity: usize = args
        .iter()
        .filter(|a| a.starts_with('-') && !a.starts_with("--") && a[1..].chars().all(|c| c == 'v'))
        .map(|a| a.len() - 1)
        .sum();
    match verbosity {
        0 => env_value
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(LevelFilter::Warn),
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Strip `-v` style flags, leaving the positional arguments.
#[must_use]
pub fn without_verbosity(args: &[String]) -> Vec<String> {
    args.iter()
        .filter(|a| !(a.len() > 1 && a.starts_with('-') && a[1..].chars().all(|c| c == 'v')))
        .cloned()
        .collect()
}

/// Resolve the level from the process arguments and environment, then
/// install the logger. Returns the remaining positional arguments.
pub fn init_from_env(args: &[String]) -> Vec<String> {
    let env_value = std::env::var(LOG_ENV).ok();
    let level = level_from(args, env_value.as_deref());
    if init(level).is_err() {
        log::warn!("logger already installed");
    }
    without_verbosity(args)
}
