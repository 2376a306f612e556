//! Logging setup for the heft CLI.
//!
//! Structured logging through the `tracing` ecosystem. The analysis crate
//! emits `debug!`/`trace!` events (index construction, closure cache growth,
//! settled cycles); this module decides which of them reach stderr.
//!
//! # Example
//!
//! ```rust,no_run
//! use heft_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false);
//! info!("Loading stats");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used with `--verbose`.
const VERBOSE_FILTER: &str = "heft=debug,heft_graph=debug,heft_cli=debug";

/// Filter used with `--quiet`.
const QUIET_FILTER: &str = "heft=error,heft_graph=error,heft_cli=error";

/// Filter used when neither flag nor `RUST_LOG` is set.
const DEFAULT_FILTER: &str = "heft=info,heft_graph=info,heft_cli=info";

/// Initialize the tracing subscriber with the specified options.
///
/// Call once at the start of the program, before any logging occurs.
///
/// # Verbosity Levels
///
/// 1. `--verbose`: DEBUG for heft crates
/// 2. `--quiet`: ERROR only
/// 3. `RUST_LOG` environment variable: custom filter
/// 4. Default: INFO for heft crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(select_filter(verbose, quiet), no_color);
}

/// Initialize logger with a custom environment filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn select_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}
