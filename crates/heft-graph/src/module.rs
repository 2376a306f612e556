use serde::{Deserialize, Serialize};

use super::ModuleId;

/// One module record from a bundler report.
///
/// Records are immutable once the graph is built; every derived quantity
/// (closure, total size) is computed from the module list, never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub id: ModuleId,
    /// Display name (webpack's shortened request, e.g. `./src/index.js`).
    pub name: String,
    /// Own size in bytes, excluding anything the module pulls in.
    pub size: u64,
    /// Why the bundler included this module, in report order.
    pub reasons: Vec<Reason>,
    /// True if at least one reason has no causing module (an entry point).
    pub is_entry: bool,
}

impl Module {
    /// Create a new module builder with sensible defaults.
    ///
    /// The display name defaults to the id text and the size to zero.
    pub fn builder(id: ModuleId) -> ModuleBuilder {
        ModuleBuilder {
            module: Self {
                name: id.to_string(),
                id,
                size: 0,
                reasons: Vec::new(),
                is_entry: false,
            },
        }
    }

    /// Get an iterator over the ids of the modules that caused this one.
    ///
    /// Entry reasons (no causing module) are skipped.
    pub fn causers(&self) -> impl Iterator<Item = &ModuleId> {
        self.reasons.iter().filter_map(|reason| reason.module_id.as_ref())
    }

    /// Returns true if the report lists any reason for this module.
    pub fn has_reasons(&self) -> bool {
        !self.reasons.is_empty()
    }
}

/// Builder for `Module` to avoid long argument lists in constructors.
pub struct ModuleBuilder {
    module: Module,
}

impl ModuleBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.module.name = name.into();
        self
    }

    pub fn size(mut self, size: u64) -> Self {
        self.module.size = size;
        self
    }

    /// Append a reason caused by `module_id`.
    pub fn reason(mut self, module_id: ModuleId) -> Self {
        self.module.reasons.push(Reason::caused_by(module_id));
        self
    }

    pub fn reasons(mut self, reasons: Vec<Reason>) -> Self {
        self.module.reasons = reasons;
        self
    }

    pub fn entry(mut self, is_entry: bool) -> Self {
        self.module.is_entry = is_entry;
        self
    }

    pub fn build(mut self) -> Module {
        if self.module.reasons.iter().any(Reason::is_entry) {
            self.module.is_entry = true;
        }
        self.module
    }
}

/// A single inclusion reason: "this module is here because of `module_id`".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reason {
    /// The causing module, `None` for entry points.
    pub module_id: Option<ModuleId>,
    /// Reason kind as reported by the bundler (`harmony import`, `cjs require`, ...).
    pub kind: Option<String>,
    /// The request string written in the causing module.
    pub user_request: Option<String>,
}

impl Reason {
    /// A reason caused by another module, without bundler metadata.
    pub fn caused_by(module_id: ModuleId) -> Self {
        Self {
            module_id: Some(module_id),
            kind: None,
            user_request: None,
        }
    }

    /// An entry reason (no causing module).
    pub fn entry() -> Self {
        Self {
            module_id: None,
            kind: Some("entry".to_string()),
            user_request: None,
        }
    }

    /// Returns true if no module caused this inclusion.
    pub fn is_entry(&self) -> bool {
        self.module_id.is_none()
    }
}
