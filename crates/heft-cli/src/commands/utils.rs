//! Shared helpers for command implementations.

use crate::cli::OutputFormat;
use crate::error::{CliError, Result, ResultExt};
use heft_graph::BundleGraph;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Read a stats file and build the analysis graph from it.
///
/// # Errors
///
/// Returns `CliError::FileNotFound` if the file is missing and
/// `CliError::Analysis` if the report is malformed.
pub async fn load_graph(path: &Path) -> Result<BundleGraph> {
    if path.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "Stats path is a directory: {}",
            path.display()
        )));
    }

    let json = fs::read_to_string(path).await.with_path(path)?;
    let graph = BundleGraph::from_json(&json)?;
    debug!(path = %path.display(), modules = graph.len(), "loaded stats");
    Ok(graph)
}

/// Output path derived from the stats path: `stats.json` becomes `stats.gv`.
pub fn default_output_path(stats: &Path, format: OutputFormat) -> PathBuf {
    stats.with_extension(format.extension())
}

/// Write `contents` to `path`, creating missing parent directories.
pub async fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }
    fs::write(path, contents.as_bytes()).await?;
    Ok(())
}

/// Write `contents` to stdout.
pub async fn write_stdout(contents: &str) -> Result<()> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(contents.as_bytes()).await?;
    if !contents.ends_with('\n') {
        stdout.write_all(b"\n").await?;
    }
    stdout.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_output_path() {
        let stats = Path::new("build/stats.json");
        assert_eq!(
            default_output_path(stats, OutputFormat::Dot),
            PathBuf::from("build/stats.gv")
        );
        assert_eq!(
            default_output_path(stats, OutputFormat::Json),
            PathBuf::from("build/stats.graph.json")
        );
        assert_eq!(
            default_output_path(Path::new("stats"), OutputFormat::Dot),
            PathBuf::from("stats.gv")
        );
    }

    #[tokio::test]
    async fn test_load_graph_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = load_graph(&temp.path().join("missing.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[tokio::test]
    async fn test_load_graph_rejects_directory() {
        let temp = TempDir::new().unwrap();
        let err = load_graph(temp.path()).await.unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_load_graph_and_write_output() {
        let temp = TempDir::new().unwrap();
        let stats = temp.path().join("stats.json");
        std::fs::write(
            &stats,
            r#"{"modules":[{"id":1,"name":"a","size":10,"reasons":[]}]}"#,
        )
        .unwrap();

        let graph = load_graph(&stats).await.unwrap();
        assert_eq!(graph.len(), 1);

        let out = temp.path().join("nested/dir/out.gv");
        write_output(&out, "digraph {}").await.unwrap();
        assert_eq!(std::fs::read_to_string(out).unwrap(), "digraph {}");
    }

    #[tokio::test]
    async fn test_load_graph_reports_bad_json() {
        let temp = TempDir::new().unwrap();
        let stats = temp.path().join("stats.json");
        std::fs::write(&stats, "not json").unwrap();

        let err = load_graph(&stats).await.unwrap_err();
        assert!(matches!(err, CliError::Analysis(_)));
    }
}
