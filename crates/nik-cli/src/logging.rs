//! Stderr logging for the `nikparse` binary.
//!
//! `nik-core` emits `tracing` events while loading the catalog and decoding;
//! this module installs the subscriber that prints them. `RUST_LOG` wins
//! when set, otherwise the level follows `--quiet` / `--verbose`.
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Maps the verbosity flags to a maximum level.
///
/// `--quiet` shows errors only, `--verbose` adds debug events, and the
/// default shows warnings and errors.
pub fn level_from_flags(quiet: bool, verbose: bool) -> Level {
    if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

/// Installs the global fmt subscriber writing to stderr.
///
/// Does nothing if a subscriber is already installed.
pub fn init(quiet: bool, verbose: bool) {
    let level = level_from_flags(quiet, verbose);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
