//! `heft graph`: write the size-filtered module graph.

use crate::cli::{GraphArgs, OutputFormat};
use crate::commands::utils;
use crate::config::{ConfigOverrides, HeftConfig};
use crate::error::{Result, ResultExt};
use crate::ui;
use heft_graph::{GraphExport, format_size};
use tracing::info;

/// Execute the graph command.
///
/// Loads configuration, analyzes the stats file and writes the export either
/// to stdout or to a file next to the stats file.
pub async fn execute(args: GraphArgs) -> Result<()> {
    let config = HeftConfig::load(&ConfigOverrides::from(&args), args.config.as_deref())?;
    let graph = utils::load_graph(&args.stats).await?;

    let export = graph.exporter(config.min_size).export()?;
    let rendered = render(&export, config.format)?;

    if args.stdout {
        utils::write_stdout(&rendered).await?;
        return Ok(());
    }

    let output = config
        .output
        .unwrap_or_else(|| utils::default_output_path(&args.stats, config.format));
    utils::write_output(&output, &rendered)
        .await
        .context(format!("Failed to write {}", output.display()))?;

    info!(
        nodes = export.nodes.len(),
        edges = export.edges.len(),
        path = %output.display(),
        "graph written"
    );

    if export.is_empty() {
        ui::warning(&format!(
            "No module is heavier than {}; the graph is empty",
            format_size(config.min_size)
        ));
    }
    ui::success(&format!(
        "Wrote {} nodes and {} edges to {}",
        export.nodes.len(),
        export.edges.len(),
        output.display()
    ));

    Ok(())
}

fn render(export: &GraphExport, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Dot => export.to_dot(),
        OutputFormat::Json => export.to_json()?,
    })
}
