//! `heft top`: list the modules with the largest cumulative size.

use crate::cli::TopArgs;
use crate::commands::utils;
use crate::config::{ConfigOverrides, HeftConfig};
use crate::error::Result;
use crate::ui;
use heft_graph::SizedModule;

/// Execute the top command.
///
/// Totals are computed once and shared by the table and the summary.
pub async fn execute(args: TopArgs) -> Result<()> {
    let config = HeftConfig::load(&ConfigOverrides::from(&args), args.config.as_deref())?;
    let graph = utils::load_graph(&args.stats).await?;

    let sized = graph.sized_modules()?;
    let statistics = graph.exporter(config.min_size).statistics_for(&sized);
    let heaviest = SizedModule::heaviest_first(sized, args.limit);

    ui::print_size_table(&heaviest);
    ui::print_statistics(&statistics, config.min_size);

    Ok(())
}
