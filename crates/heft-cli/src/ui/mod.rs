//! Terminal output helpers: status messages and size tables.
//!
//! Status messages go to stderr so that command output on stdout stays
//! clean for piping.
//!
//! # Examples
//!
//! ```no_run
//! use heft_cli::ui;
//!
//! ui::init_colors(false);
//! ui::success("Wrote 12 nodes and 15 edges to stats.gv");
//! ui::warning("No module is heavier than 400.0K; the graph is empty");
//! ```

mod format;
mod messages;

pub use format::{print_size_table, print_statistics, size_table};
pub use messages::{info, success, warning};

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back to
/// terminal capability detection.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::user_attended_stderr()
}

/// Initialize color support based on environment and the `--no-color` flag.
///
/// Applies the decision globally through `owo-colors`' override switch, so
/// every message helper honours it.
pub fn init_colors(no_color: bool) {
    owo_colors::set_override(!no_color && should_use_color());
}
