//! `heft why`: show the reason chains that pull a module into the bundle.

use crate::cli::WhyArgs;
use crate::commands::utils;
use crate::error::{CliError, Result, ResultExt};
use crate::ui;
use heft_graph::{BundleGraph, ModuleId};

/// Execute the why command.
///
/// Resolves the module id, searches for reason chains from entry modules
/// and prints them shortest first using module names.
pub async fn execute(args: WhyArgs) -> Result<()> {
    let target = ModuleId::new(args.module.trim())
        .map_err(|e| CliError::InvalidArgument(format!("module id: {}", e)))?;

    let graph = utils::load_graph(&args.stats).await?;
    let sized = graph
        .sized_module(&target)
        .with_hint("Pass a module id from the stats file; `heft top` lists the heaviest modules")?;
    let analysis = graph.chains_to(&target, args.limit)?;

    println!(
        "{} ({} own, {} total)",
        sized.name,
        heft_graph::format_size(sized.own_size),
        heft_graph::format_size(sized.total_size)
    );

    if !analysis.is_reachable() {
        ui::warning(&format!(
            "No reason chain from an entry module reaches '{}'",
            target
        ));
        return Ok(());
    }

    for (n, chain) in analysis.chains.iter().enumerate() {
        println!("  {}. {}", n + 1, chain.format_with(|id| display_name(&graph, id)));
    }

    ui::info(&format!(
        "{} chain(s) from {} entry module(s), depth {}..{}",
        analysis.chains.len(),
        analysis.entry_point_count,
        analysis.min_depth.unwrap_or_default(),
        analysis.max_depth.unwrap_or_default()
    ));

    Ok(())
}

fn display_name(graph: &BundleGraph, id: &ModuleId) -> String {
    graph
        .module(id)
        .map_or_else(|| id.to_string(), |module| module.name.clone())
}
