//! Heft CLI - find out which modules make a webpack bundle heavy.
//!
//! This crate provides the `heft` command-line interface on top of
//! `heft-graph`. The graph crate stays free of I/O; everything that touches
//! the outside world lives here.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - `graph`, `top` and `why` implementations
//! - [`config`] - Layered configuration (CLI > env > heft.json > defaults)
//! - [`error`] - Error types with actionable hints
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Status messages and size tables
//!
//! # Example
//!
//! ```rust,no_run
//! use heft_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, ConfigError, Result, ResultExt};
