//! Miette diagnostic conversion for CLI errors.

use crate::error::CliError;
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Analysis(e) => analysis_error_to_miette(e),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        _ => miette::miette!("{}", err),
    }
}

/// Convert a heft-graph error to miette Report
pub fn analysis_error_to_miette(err: heft_graph::Error) -> Report {
    match err {
        heft_graph::Error::DanglingReference { id } => miette::miette!(
            "Module '{}' is referenced but has no record in the stats file\n\n\
             Hint: The stats file is inconsistent; regenerate it with `webpack --json` \
             without filtering modules",
            id
        ),
        heft_graph::Error::DuplicateModule { id } => miette::miette!(
            "Module id '{}' appears more than once in the stats file\n\n\
             Hint: Stats from several compilations cannot be analyzed together",
            id
        ),
        heft_graph::Error::InputShape { .. } => miette::miette!(
            "{}\n\nHint: Expected the JSON written by `webpack --json`",
            err
        ),
        _ => miette::miette!("{}", err),
    }
}
