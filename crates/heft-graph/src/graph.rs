//! `BundleGraph`: the analysis facade over one loaded report.
//!
//! Owns the immutable module list, the id lookup table, the requirement index
//! and the closure resolver. Everything below it is read-only after
//! [`BundleGraph::new`]; only the resolver cache grows.

use std::sync::Arc;

use rustc_hash::FxHashMap as HashMap;
use serde::Serialize;
use tracing::debug;

use super::chains::{ChainAnalysis, find_chains};
use super::closure::{ClosureResolver, ClosureSet};
use super::export::GraphExporter;
use super::{Error, Module, ModuleId, RequirementIndex, Result, parse_report};

/// A module with its own and cumulative size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizedModule {
    pub id: ModuleId,
    pub name: String,
    pub own_size: u64,
    /// Own size plus the own size of every module in its closure.
    pub total_size: u64,
}

impl SizedModule {
    /// Bytes pulled in by this module beyond its own size.
    pub fn dependency_size(&self) -> u64 {
        self.total_size - self.own_size
    }

    /// Sort by total size, heaviest first, and keep the first `limit`.
    ///
    /// The sort is stable, so ties keep their input order.
    pub fn heaviest_first(mut sized: Vec<SizedModule>, limit: usize) -> Vec<SizedModule> {
        sized.sort_by(|a, b| b.total_size.cmp(&a.total_size));
        sized.truncate(limit);
        sized
    }
}

/// Analysis facade over a fully loaded module list.
#[derive(Debug)]
pub struct BundleGraph {
    modules: Vec<Module>,
    positions: HashMap<ModuleId, usize>,
    resolver: ClosureResolver,
}

impl BundleGraph {
    /// Build the graph from a parsed module list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateModule`] if two records share an id.
    pub fn new(modules: Vec<Module>) -> Result<Self> {
        let mut positions = HashMap::default();
        positions.reserve(modules.len());

        for (position, module) in modules.iter().enumerate() {
            if positions.insert(module.id.clone(), position).is_some() {
                return Err(Error::DuplicateModule {
                    id: module.id.clone(),
                });
            }
        }

        let index = RequirementIndex::build(&modules);
        debug!(modules = modules.len(), "built bundle graph");

        Ok(Self {
            modules,
            positions,
            resolver: ClosureResolver::new(index),
        })
    }

    /// Parse a stats report and build the graph in one step.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::new(parse_report(json)?)
    }

    /// Look up a module record.
    pub fn module(&self, id: &ModuleId) -> Option<&Module> {
        self.positions.get(id).map(|&position| &self.modules[position])
    }

    /// All module records in report order.
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn index(&self) -> &RequirementIndex {
        self.resolver.index()
    }

    pub fn resolver(&self) -> &ClosureResolver {
        &self.resolver
    }

    /// Every id transitively caused by `id`. Never contains `id` itself.
    pub fn resolve(&self, id: &ModuleId) -> Arc<ClosureSet> {
        self.resolver.resolve(id)
    }

    /// Own size of `id` plus the own size of every module in its closure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DanglingReference`] if `id`, one of the causers named
    /// in its reasons, or one of its closure members has no record.
    pub fn total_size(&self, id: &ModuleId) -> Result<u64> {
        let module = self.require(id)?;
        for causer in module.causers() {
            self.require(causer)?;
        }

        self.resolve(id).iter().try_fold(module.size, |total, member| {
            Ok(total.saturating_add(self.require(member)?.size))
        })
    }

    /// Own and total size of one module.
    pub fn sized_module(&self, id: &ModuleId) -> Result<SizedModule> {
        let module = self.require(id)?;
        Ok(SizedModule {
            id: module.id.clone(),
            name: module.name.clone(),
            own_size: module.size,
            total_size: self.total_size(id)?,
        })
    }

    /// Own and total size of every module, in report order.
    pub fn sized_modules(&self) -> Result<Vec<SizedModule>> {
        self.modules
            .iter()
            .map(|module| self.sized_module(&module.id))
            .collect()
    }

    /// Modules with the largest total size, heaviest first.
    ///
    /// Ties keep report order.
    pub fn heaviest(&self, limit: usize) -> Result<Vec<SizedModule>> {
        Ok(SizedModule::heaviest_first(self.sized_modules()?, limit))
    }

    /// Modules the bundler started from.
    ///
    /// A module counts as an entry when one of its reasons has no causer, or
    /// when it has no reasons at all.
    pub fn entries(&self) -> impl Iterator<Item = &Module> {
        self.modules
            .iter()
            .filter(|module| module.is_entry || !module.has_reasons())
    }

    /// Returns true if `id` sits on a reason cycle.
    pub fn is_cyclic(&self, id: &ModuleId) -> bool {
        self.index()
            .successors(id)
            .any(|successor| self.resolve(successor).contains(id))
    }

    /// Filter/exporter view with the given minimum total size.
    pub fn exporter(&self, min_size: u64) -> GraphExporter<'_> {
        GraphExporter::new(self, min_size)
    }

    /// Reason chains from entry modules down to `target`, shortest first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DanglingReference`] if `target` has no record.
    pub fn chains_to(&self, target: &ModuleId, limit: usize) -> Result<ChainAnalysis> {
        self.require(target)?;

        let entry_points: Vec<ModuleId> = self.entries().map(|module| module.id.clone()).collect();
        let chains = find_chains(
            &entry_points,
            target,
            limit,
            |module| self.index().successors(module).cloned().collect(),
            |module| {
                self.module(module)
                    .into_iter()
                    .flat_map(Module::causers)
                    .filter(|causer| *causer != module)
                    .cloned()
                    .collect()
            },
        );

        Ok(ChainAnalysis::from_chains(target.clone(), chains))
    }

    fn require(&self, id: &ModuleId) -> Result<&Module> {
        self.module(id)
            .ok_or_else(|| Error::DanglingReference { id: id.clone() })
    }
}
