use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format for the exported graph
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Graphviz DOT source
    ///
    /// Render with `dot -Tsvg graph.gv > graph.svg` or any Graphviz viewer.
    #[default]
    #[value(name = "dot")]
    Dot,

    /// JSON with `nodes` and `edges` arrays
    ///
    /// Each node carries its id, label, own size and total size.
    #[value(name = "json")]
    Json,
}

impl OutputFormat {
    /// Extension used when deriving an output path from the stats file.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Dot => "gv",
            Self::Json => "graph.json",
        }
    }
}
