//! Convert a bundler stats report into validated module records.
//!
//! The report is the document webpack writes with `--json`. Only the
//! `modules` array is read; every other top-level key is ignored.
//!
//! # Design Decisions
//!
//! - **Two-stage parsing**: records deserialize into permissive `Raw*` types
//!   first so a missing `id` or `size` can be reported with the record index
//!   instead of a bare serde message.
//! - **Entry reasons**: webpack emits reasons with `"moduleId": null` for
//!   entry points. They carry no causing module, so they never become edges;
//!   they only mark the module as an entry.
//! - **Display names**: `name` is optional and falls back to the id text.

use serde::Deserialize;
use tracing::debug;

use super::{Error, Module, ModuleId, Reason, Result};

/// Top-level shape of a stats report.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatsReport {
    #[serde(default)]
    modules: Option<Vec<RawModule>>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawModule {
    #[serde(default)]
    id: Option<serde_json::Value>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    size: Option<u64>,
    #[serde(default)]
    reasons: Option<Vec<RawReason>>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawReason {
    #[serde(default, rename = "moduleId")]
    module_id: Option<ModuleId>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default, rename = "userRequest")]
    user_request: Option<String>,
}

impl StatsReport {
    /// Parse a report from its JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of module records in the report (zero if `modules` is absent).
    pub fn module_count(&self) -> usize {
        self.modules.as_ref().map_or(0, Vec::len)
    }

    /// Validate every record and convert it into a [`Module`].
    ///
    /// Fails on the first record that lacks `id` or `size`; no partial
    /// module list is ever returned.
    pub fn into_modules(self) -> Result<Vec<Module>> {
        let raw_modules = self.modules.ok_or(Error::InputShape {
            index: None,
            field: "modules",
        })?;

        let modules = raw_modules
            .into_iter()
            .enumerate()
            .map(|(index, raw)| convert_raw_module(index, raw))
            .collect::<Result<Vec<_>>>()?;

        debug!(modules = modules.len(), "parsed bundler report");
        Ok(modules)
    }
}

/// Parse a report and return its validated module list.
pub fn parse_report(json: &str) -> Result<Vec<Module>> {
    StatsReport::from_json(json)?.into_modules()
}

fn convert_raw_module(index: usize, raw: RawModule) -> Result<Module> {
    let id = convert_raw_id(index, raw.id)?;
    let size = raw.size.ok_or(Error::InputShape {
        index: Some(index),
        field: "size",
    })?;

    let reasons = raw
        .reasons
        .unwrap_or_default()
        .into_iter()
        .map(convert_raw_reason)
        .collect();

    let mut builder = Module::builder(id).size(size).reasons(reasons);
    if let Some(name) = raw.name {
        builder = builder.name(name);
    }
    Ok(builder.build())
}

/// Integers and strings are ids; null, absent or any other JSON type is not.
fn convert_raw_id(index: usize, raw: Option<serde_json::Value>) -> Result<ModuleId> {
    match raw {
        Some(serde_json::Value::String(text)) => Ok(ModuleId::new(text)?),
        Some(value @ serde_json::Value::Number(_)) => Ok(serde_json::from_value(value)?),
        _ => Err(Error::InputShape {
            index: Some(index),
            field: "id",
        }),
    }
}

fn convert_raw_reason(raw: RawReason) -> Reason {
    Reason {
        module_id: raw.module_id,
        kind: raw.kind,
        user_request: raw.user_request,
    }
}
