use thiserror::Error;

use super::{ModuleId, ModuleIdError};

/// Error types for heft graph operations.
///
/// Structural problems abort the whole analysis. Reason cycles are not an
/// error and never surface here.
#[derive(Debug, Error)]
pub enum Error {
    /// A report record is missing a required field.
    ///
    /// `index` is the position of the record in the `modules` array, or
    /// `None` when the report itself lacks the field.
    #[error("{}", describe_input_shape(.index, .field))]
    InputShape {
        index: Option<usize>,
        field: &'static str,
    },

    /// Two records share the same module id, so lookups would be ambiguous.
    #[error("duplicate module id '{id}' in report")]
    DuplicateModule { id: ModuleId },

    /// A module id was looked up but no record carries it.
    #[error("module '{id}' is referenced but has no record in the report")]
    DanglingReference { id: ModuleId },

    /// A record carries an id that cannot be canonicalised.
    #[error("invalid module id: {0}")]
    InvalidModuleId(#[from] ModuleIdError),

    /// The report is not valid JSON or has the wrong value types.
    #[error("failed to parse report: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// The module id this error points at, if any.
    pub fn module_id(&self) -> Option<&ModuleId> {
        match self {
            Self::DuplicateModule { id } | Self::DanglingReference { id } => Some(id),
            _ => None,
        }
    }
}

fn describe_input_shape(index: &Option<usize>, field: &str) -> String {
    match index {
        Some(index) => format!("module record #{index} is missing required field '{field}'"),
        None => format!("report is missing required field '{field}'"),
    }
}

/// Result type alias for heft graph operations.
pub type Result<T> = std::result::Result<T, Error>;
