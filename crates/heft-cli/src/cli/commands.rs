use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::*;
use crate::cli::validation::parse_size;

/// Available heft subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the size-filtered module graph
    ///
    /// Every module whose cumulative size is above the threshold becomes a
    /// node labelled with its own and cumulative size; the reasons pointing
    /// at those modules become edges.
    Graph(GraphArgs),

    /// List the modules with the largest cumulative size
    Top(TopArgs),

    /// Show why a module is in the bundle
    ///
    /// Prints the shortest reason chains from entry modules to the module.
    Why(WhyArgs),
}

/// Arguments for the graph command
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Stats file written by `webpack --json`
    #[arg(value_name = "STATS")]
    pub stats: PathBuf,

    /// Minimum cumulative size for a module to appear
    ///
    /// Plain bytes or a K/M/G suffixed value (powers of 1024).
    ///
    /// Examples:
    ///   --min-size 409600
    ///   --min-size 400K
    #[arg(long, value_name = "SIZE", value_parser = parse_size)]
    pub min_size: Option<u64>,

    /// Output format
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file
    ///
    /// Defaults to the stats path with its extension replaced by `gv`
    /// (dot) or `graph.json` (json).
    #[arg(short = 'o', long, value_name = "PATH", conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Write the graph to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Path to a heft.json config file
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Arguments for the top command
#[derive(Args, Debug, Clone)]
pub struct TopArgs {
    /// Stats file written by `webpack --json`
    #[arg(value_name = "STATS")]
    pub stats: PathBuf,

    /// Number of modules to list
    #[arg(short = 'n', long, default_value_t = 20)]
    pub limit: usize,

    /// Threshold used for the included-module count in the summary
    #[arg(long, value_name = "SIZE", value_parser = parse_size)]
    pub min_size: Option<u64>,

    /// Path to a heft.json config file
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Arguments for the why command
#[derive(Args, Debug, Clone)]
pub struct WhyArgs {
    /// Stats file written by `webpack --json`
    #[arg(value_name = "STATS")]
    pub stats: PathBuf,

    /// Id of the module to explain (numeric or string id from the stats file)
    #[arg(value_name = "MODULE_ID")]
    pub module: String,

    /// Maximum number of chains to print
    #[arg(short = 'n', long, default_value_t = 5)]
    pub limit: usize,
}
