//! # heft-graph
//!
//! Dependency closure and cumulative size analysis for bundler module reports.
//!
//! Given the `modules` array of a webpack stats report, this crate answers
//! "how many bytes does this module drag into the bundle?" by following
//! inclusion reasons transitively, and produces a size-filtered graph for a
//! renderer.
//!
//! ## Overview
//!
//! - **Pure**: no I/O, the report text is passed in by the caller
//! - **Cycle-safe**: reason cycles are broken by a call-local path guard and
//!   never surface as errors
//! - **Memoized**: every closure is computed once per analysis and shared
//!   behind an `Arc`
//! - **Strict sizes**: a size that would need a missing record fails with the
//!   offending id instead of silently under-reporting
//!
//! ## Architecture
//!
//! ```text
//!   stats.json ──► report::parse_report ──► Vec<Module>
//!                                              │
//!                                              ▼
//!                                   ┌─────────────────────┐
//!                                   │     BundleGraph     │
//!                                   └──────────┬──────────┘
//!                 ┌────────────────────────────┼───────────────────────┐
//!                 ▼                            ▼                       ▼
//!        RequirementIndex ───────────► ClosureResolver          GraphExporter
//!        (causer -> caused)            (memoized reach)      (threshold, nodes,
//!                                                               edges, stats)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use heft_graph::{BundleGraph, ModuleId};
//!
//! # fn main() -> heft_graph::Result<()> {
//! let graph = BundleGraph::from_json(
//!     r#"{ "modules": [
//!         { "id": 1, "name": "./index.js", "size": 1000, "reasons": [] },
//!         { "id": 2, "name": "./big.js", "size": 1000, "reasons": [{ "moduleId": 1 }] }
//!     ] }"#,
//! )?;
//!
//! assert_eq!(graph.total_size(&ModuleId::from(1))?, 2000);
//!
//! let export = graph.exporter(0).export()?;
//! assert_eq!(export.nodes.len(), 2);
//! assert_eq!(export.edges.len(), 1);
//! # Ok(())
//! # }
//! ```

mod chains;
mod closure;
mod error;
mod export;
mod graph;
mod module;
mod module_id;
mod report;
mod requirements;
mod size;
mod statistics;

pub use chains::{ChainAnalysis, DependencyChain, MAX_CHAIN_DEPTH};
pub use closure::{ClosureResolver, ClosureSet};
pub use error::{Error, Result};
pub use export::{DEFAULT_MIN_SIZE, GraphExport, GraphExporter, GraphNode};
pub use graph::{BundleGraph, SizedModule};
pub use module::{Module, ModuleBuilder, Reason};
pub use module_id::{ModuleId, ModuleIdError};
pub use report::{StatsReport, parse_report};
pub use requirements::{ReasonEdge, RequirementIndex};
pub use size::{format_size, size_label};
pub use statistics::GraphStatistics;

#[cfg(test)]
mod tests;
