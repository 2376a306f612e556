//! Size-filtered node and edge lists for rendering.
//!
//! The exporter keeps every module whose total size is strictly greater than
//! the threshold, and every reason edge pointing at such a module. The result
//! is an abstract [`GraphExport`]; DOT and JSON text are provided for
//! convenience, layout and drawing are left to external tools.

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::graph::{BundleGraph, SizedModule};
use super::size::size_label;
use super::statistics::GraphStatistics;
use super::{Module, ModuleId, ReasonEdge, Result};

/// Default minimum total size for a module to be exported (400 KiB).
pub const DEFAULT_MIN_SIZE: u64 = 409_600;

/// One exported node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: ModuleId,
    /// `"{name} ({own}/{total})"` with human-readable sizes
    pub label: String,
    pub own_size: u64,
    pub total_size: u64,
}

/// Filtered graph ready for a renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphExport {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<ReasonEdge>,
}

/// Threshold filter over a [`BundleGraph`].
#[derive(Debug, Clone, Copy)]
pub struct GraphExporter<'a> {
    graph: &'a BundleGraph,
    min_size: u64,
}

impl<'a> GraphExporter<'a> {
    pub fn new(graph: &'a BundleGraph, min_size: u64) -> Self {
        Self { graph, min_size }
    }

    pub fn total_size(&self, id: &ModuleId) -> Result<u64> {
        self.graph.total_size(id)
    }

    /// Returns true if the total size of `id` is strictly above the threshold.
    pub fn should_include(&self, id: &ModuleId) -> Result<bool> {
        Ok(self.total_size(id)? > self.min_size)
    }

    /// Nodes for every included module, in report order.
    pub fn nodes(&self) -> Result<Vec<GraphNode>> {
        Ok(self
            .included()?
            .into_iter()
            .map(|(module, total)| node(module, total))
            .collect())
    }

    /// Deduplicated reason edges into included modules, in first-seen order.
    ///
    /// Entry reasons and self-reasons never become edges. The causing side is
    /// not filtered, so an edge may start at a module that is not a node.
    pub fn edges(&self) -> Result<Vec<ReasonEdge>> {
        let included = self.included()?;
        Ok(collect_edges(included.iter().map(|(module, _)| *module)))
    }

    /// Nodes and edges in one pass over the module list.
    pub fn export(&self) -> Result<GraphExport> {
        let included = self.included()?;
        let edges = collect_edges(included.iter().map(|(module, _)| *module));
        let nodes: Vec<GraphNode> = included
            .into_iter()
            .map(|(module, total)| node(module, total))
            .collect();

        debug!(
            min_size = self.min_size,
            nodes = nodes.len(),
            edges = edges.len(),
            "exported graph"
        );
        Ok(GraphExport { nodes, edges })
    }

    /// Summary counts for the whole report under this threshold.
    pub fn statistics(&self) -> Result<GraphStatistics> {
        Ok(self.statistics_for(&self.graph.sized_modules()?))
    }

    /// Summary counts from totals the caller already computed.
    ///
    /// `sized` must come from [`BundleGraph::sized_modules`] on the same
    /// graph; a caller that also ranks modules can size them once and pass
    /// the list here.
    pub fn statistics_for(&self, sized: &[SizedModule]) -> GraphStatistics {
        let graph = self.graph;
        let modules = graph.modules();

        GraphStatistics {
            module_count: modules.len(),
            entry_count: graph.entries().count(),
            edge_count: graph.index().edge_count(),
            included_count: sized
                .iter()
                .filter(|module| module.total_size > self.min_size)
                .count(),
            cyclic_module_count: modules.iter().filter(|m| graph.is_cyclic(&m.id)).count(),
            total_own_size: modules
                .iter()
                .fold(0u64, |total, m| total.saturating_add(m.size)),
        }
    }

    /// Included modules with their total size, in report order.
    fn included(&self) -> Result<Vec<(&'a Module, u64)>> {
        let mut included = Vec::new();
        for module in self.graph.modules() {
            let total = self.total_size(&module.id)?;
            if total > self.min_size {
                included.push((module, total));
            }
        }
        Ok(included)
    }
}

fn node(module: &Module, total_size: u64) -> GraphNode {
    GraphNode {
        id: module.id.clone(),
        label: size_label(&module.name, module.size, total_size),
        own_size: module.size,
        total_size,
    }
}

fn collect_edges<'m>(modules: impl Iterator<Item = &'m Module>) -> Vec<ReasonEdge> {
    let mut edges: IndexSet<ReasonEdge, FxBuildHasher> = IndexSet::default();
    for module in modules.filter(|m| m.has_reasons()) {
        for causer in module.causers() {
            if let Some(edge) = ReasonEdge::new(causer.clone(), module.id.clone()) {
                edges.insert(edge);
            }
        }
    }
    edges.into_iter().collect()
}

/// Escape a string for use inside a quoted DOT identifier.
fn escape_label(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

impl GraphExport {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Render as a Graphviz `digraph`.
    pub fn to_dot(&self) -> String {
        let mut output = String::from("digraph BundleGraph {\n");

        for node in &self.nodes {
            output.push_str("    \"");
            output.push_str(&escape_label(node.id.as_str()));
            output.push_str("\" [label=\"");
            output.push_str(&escape_label(&node.label));
            output.push_str("\"];\n");
        }

        for edge in &self.edges {
            output.push_str("    \"");
            output.push_str(&escape_label(edge.from.as_str()));
            output.push_str("\" -> \"");
            output.push_str(&escape_label(edge.to.as_str()));
            output.push_str("\";\n");
        }

        output.push_str("}\n");
        output
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
