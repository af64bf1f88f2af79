//! Logging setup on the `log` facade with an `env_logger` backend.
//!
//! The level comes from, in priority order:
//!
//! 1. `RUST_LOG`, when set
//! 2. `--quiet` (errors only) or `-v`/`-vv` (debug/trace)
//! 3. info
//!
//! Debug builds prefix each line with a timestamp, and with the module path
//! once verbose output is requested. Release builds print level and message.
//!
//! ```rust,no_run
//! use dupesort::logging::init_logging;
//!
//! init_logging(1, false);
//! log::debug!("visible with -v");
//! ```

use std::io::Write;

use env_logger::Builder;
use log::LevelFilter;

/// Environment variable that overrides the CLI-derived level.
pub const LOG_ENV: &str = "RUST_LOG";

/// Initialize logging from the CLI verbosity flags.
///
/// A second call is ignored with a debug message instead of panicking, so
/// the app layer can call this unconditionally.
pub fn init_logging(verbose: u8, quiet: bool) {
    let mut builder = Builder::new();
    let from_env = std::env::var(LOG_ENV).is_ok();

    if from_env {
        builder.parse_env(LOG_ENV);
    } else {
        builder.filter_level(determine_level(verbose, quiet));
    }
    configure_format(&mut builder, verbose);

    match builder.try_init() {
        Ok(()) if from_env => log::debug!("Log level taken from {}", LOG_ENV),
        Ok(()) => log::debug!("Log level set to {}", current_level_name()),
        Err(e) => log::debug!("Logger already initialized: {}", e),
    }
}

/// Map `-v` count and `--quiet` to a level filter. Quiet wins.
fn determine_level(verbose: u8, quiet: bool) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Info,
        (false, 1) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    }
}

#[cfg(debug_assertions)]
fn configure_format(builder: &mut Builder, verbose: u8) {
    builder.format(move |buf, record| {
        let style = buf.default_level_style(record.level());
        let timestamp = buf.timestamp_seconds();
        if verbose >= 1 {
            writeln!(
                buf,
                "{} {style}{:<5}{style:#} [{}] {}",
                timestamp,
                record.level(),
                record.module_path().unwrap_or("unknown"),
                record.args()
            )
        } else {
            writeln!(
                buf,
                "{} {style}{:<5}{style:#} {}",
                timestamp,
                record.level(),
                record.args()
            )
        }
    });
}

#[cfg(not(debug_assertions))]
fn configure_format(builder: &mut Builder, _verbose: u8) {
    builder.format(|buf, record| {
        let style = buf.default_level_style(record.level());
        writeln!(buf, "{style}{:<5}{style:#} {}", record.level(), record.args())
    });
}

/// Name of the active maximum log level.
pub fn current_level_name() -> &'static str {
    match log::max_level() {
        LevelFilter::Off => "off",
        LevelFilter::Error => "error",
        LevelFilter::Warn => "warn",
        LevelFilter::Info => "info",
        LevelFilter::Debug => "debug",
        LevelFilter::Trace => "trace",
    }
}
