//! Reverse-reason index: causing module -> modules it caused to be included.
//!
//! A report stores edges on the *caused* side (`module.reasons[].moduleId`).
//! Closure computation walks from causers outward, so the index flips every
//! reason into a `causer -> caused` adjacency list.
//!
//! # Ordering
//!
//! Causers and their successor lists both keep first-seen order from the
//! module list, and repeated reasons collapse into one entry. Two builds over
//! the same module list therefore produce identical iteration orders.

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Module, ModuleId};

type SuccessorSet = IndexSet<ModuleId, FxBuildHasher>;

/// Directed "caused by" relation: `from` caused `to` to be included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReasonEdge {
    pub from: ModuleId,
    pub to: ModuleId,
}

impl ReasonEdge {
    /// Create an edge, rejecting self-edges.
    pub fn new(from: ModuleId, to: ModuleId) -> Option<Self> {
        (from != to).then_some(Self { from, to })
    }
}

/// Immutable adjacency structure from causer id to caused ids.
///
/// Invariant: no id appears in its own successor list.
#[derive(Debug, Clone, Default)]
pub struct RequirementIndex {
    successors: IndexMap<ModuleId, SuccessorSet, FxBuildHasher>,
    edge_count: usize,
}

impl RequirementIndex {
    /// Build the index from a full module list.
    ///
    /// Referenced causers are not checked against the module list; a reason
    /// that names a pruned module still becomes an edge and only fails later
    /// if its size is needed.
    pub fn build(modules: &[Module]) -> Self {
        let mut index = Self::default();
        let mut self_reasons = 0usize;
        let mut entry_reasons = 0usize;

        for module in modules {
            for reason in &module.reasons {
                let Some(causer) = &reason.module_id else {
                    entry_reasons += 1;
                    continue;
                };

                match ReasonEdge::new(causer.clone(), module.id.clone()) {
                    Some(edge) => index.insert(edge),
                    None => self_reasons += 1,
                }
            }
        }

        debug!(
            causers = index.successors.len(),
            edges = index.edge_count,
            self_reasons,
            entry_reasons,
            "built requirement index"
        );
        index
    }

    fn insert(&mut self, edge: ReasonEdge) {
        if self
            .successors
            .entry(edge.from)
            .or_default()
            .insert(edge.to)
        {
            self.edge_count += 1;
        }
    }

    /// Direct successors of `id`: the modules it caused, in first-seen order.
    ///
    /// Ids with no entry (leaves, or ids unknown to the report) yield nothing.
    pub fn successors<'a>(
        &'a self,
        id: &ModuleId,
    ) -> impl Iterator<Item = &'a ModuleId> + use<'a> {
        self.successors.get(id).into_iter().flatten()
    }

    /// Number of direct successors of `id`.
    pub fn successor_count(&self, id: &ModuleId) -> usize {
        self.successors.get(id).map_or(0, IndexSet::len)
    }

    /// Returns true if `id` caused at least one other module.
    pub fn is_causer(&self, id: &ModuleId) -> bool {
        self.successors.contains_key(id)
    }

    /// Iterate every deduplicated edge in first-seen order.
    pub fn edges(&self) -> impl Iterator<Item = ReasonEdge> + '_ {
        self.successors.iter().flat_map(|(from, targets)| {
            targets.iter().map(move |to| ReasonEdge {
                from: from.clone(),
                to: to.clone(),
            })
        })
    }

    /// Number of distinct causing modules.
    pub fn causer_count(&self) -> usize {
        self.successors.len()
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}
