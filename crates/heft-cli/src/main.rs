//! Heft CLI entry point: argument parsing, logging setup and command dispatch.

use clap::Parser;
use heft_cli::{cli, commands, error, logger, ui};
use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Graph(graph_args) => commands::graph_execute(graph_args).await,
        cli::Command::Top(top_args) => commands::top_execute(top_args).await,
        cli::Command::Why(why_args) => commands::why_execute(why_args).await,
    };

    result.map_err(error::cli_error_to_miette)
}
