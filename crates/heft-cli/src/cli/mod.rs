//! Command-line interface definition for heft.
//!
//! Defined with clap v4's derive macros.
//!
//! # Command Structure
//!
//! - `heft graph` - Write the size-filtered module graph (DOT or JSON)
//! - `heft top` - List the modules with the largest cumulative size
//! - `heft why` - Show the reason chains that pull a module into the bundle

mod commands;
pub mod enums;
mod validation;

use clap::Parser;

pub use commands::{Command, GraphArgs, TopArgs, WhyArgs};
pub use enums::*;
pub use validation::parse_size;

/// heft - find out which modules make a webpack bundle heavy
#[derive(Parser, Debug)]
#[command(
    name = "heft",
    version,
    about = "Find out which modules make a webpack bundle heavy",
    long_about = "heft reads the stats file written by `webpack --json`, follows every\n\
                  module's inclusion reasons transitively and reports how many bytes each\n\
                  module drags into the bundle. The result can be written as a Graphviz\n\
                  graph, listed as a table, or traced back to the entry points."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
