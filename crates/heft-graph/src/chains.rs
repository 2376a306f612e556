//! Reason chain analysis: why is this module in the bundle?
//!
//! A chain is one path of reasons from an entry module down to a target,
//! following causer -> caused edges. Chains come out shortest first.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};
use serde::{Deserialize, Serialize};

use super::ModuleId;

/// Maximum chain depth explored before a path is abandoned.
///
/// Bounds the breadth-first search on very deep or densely connected reports.
pub const MAX_CHAIN_DEPTH: usize = 50;

/// One path of reasons from an entry module to a target module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyChain {
    /// Module ids from entry to target
    pub path: Vec<ModuleId>,
    /// Number of edges in the path
    pub depth: usize,
}

impl DependencyChain {
    pub fn new(path: Vec<ModuleId>) -> Self {
        let depth = path.len().saturating_sub(1);
        Self { path, depth }
    }

    /// First module in the chain.
    pub fn entry_point(&self) -> Option<&ModuleId> {
        self.path.first()
    }

    /// Last module in the chain.
    pub fn target(&self) -> Option<&ModuleId> {
        self.path.last()
    }

    /// Format the chain as `"a -> b -> c"`.
    pub fn format_chain(&self) -> String {
        self.format_with(|id| id.to_string())
    }

    /// Format the chain with a custom rendering for each id.
    pub fn format_with(&self, mut render: impl FnMut(&ModuleId) -> String) -> String {
        self.path
            .iter()
            .map(&mut render)
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

/// All reason chains found for one module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainAnalysis {
    pub target: ModuleId,
    /// Chains in breadth-first order (shortest first)
    pub chains: Vec<DependencyChain>,
    pub min_depth: Option<usize>,
    pub max_depth: Option<usize>,
    pub avg_depth: f64,
    /// Number of distinct entry modules the chains start from
    pub entry_point_count: usize,
}

impl ChainAnalysis {
    pub fn from_chains(target: ModuleId, chains: Vec<DependencyChain>) -> Self {
        let min_depth = chains.iter().map(|c| c.depth).min();
        let max_depth = chains.iter().map(|c| c.depth).max();
        let avg_depth = if chains.is_empty() {
            0.0
        } else {
            chains.iter().map(|c| c.depth).sum::<usize>() as f64 / chains.len() as f64
        };

        let entry_point_count = chains
            .iter()
            .filter_map(DependencyChain::entry_point)
            .collect::<HashSet<_>>()
            .len();

        Self {
            target,
            chains,
            min_depth,
            max_depth,
            avg_depth,
            entry_point_count,
        }
    }

    /// Returns true if at least one entry module reaches the target.
    pub fn is_reachable(&self) -> bool {
        !self.chains.is_empty()
    }

    pub fn shortest_chain(&self) -> Option<&DependencyChain> {
        self.chains.iter().min_by_key(|c| c.depth)
    }
}

/// Search for up to `limit` chains from `entry_points` to `target`, shortest first.
///
/// Distances to the target are computed once by walking `get_predecessors`
/// backwards from it. Partial paths are then expanded best-first by
/// `edges so far + distance left`, so only modules that can still reach the
/// target are ever entered and the work grows with the number of chains
/// requested rather than with the number of paths in the report.
///
/// A path never visits the same module twice, stops at the target, and is
/// dropped once it would exceed [`MAX_CHAIN_DEPTH`] edges.
pub(crate) fn find_chains<S, P>(
    entry_points: &[ModuleId],
    target: &ModuleId,
    limit: usize,
    mut get_successors: S,
    get_predecessors: P,
) -> Vec<DependencyChain>
where
    S: FnMut(&ModuleId) -> Vec<ModuleId>,
    P: FnMut(&ModuleId) -> Vec<ModuleId>,
{
    let mut chains = Vec::new();
    if limit == 0 {
        return chains;
    }

    let distance = distances_to(target, get_predecessors);
    let mut frontier = BinaryHeap::new();
    let mut seq = 0;
    let mut seen_entries = HashSet::default();

    for entry in entry_points {
        if !seen_entries.insert(entry) {
            continue;
        }
        if let Some(&left) = distance.get(entry) {
            frontier.push(Candidate::new(left, vec![entry.clone()], &mut seq));
        }
    }

    while let Some(Candidate { bound, path, .. }) = frontier.pop() {
        if bound > MAX_CHAIN_DEPTH {
            break;
        }
        let Some(current) = path.last() else {
            continue;
        };

        if current == target {
            chains.push(DependencyChain::new(path));
            if chains.len() >= limit {
                break;
            }
            continue;
        }

        for successor in get_successors(current) {
            let Some(&left) = distance.get(&successor) else {
                continue;
            };
            if path.contains(&successor) {
                continue;
            }
            let mut next = path.clone();
            next.push(successor);
            frontier.push(Candidate::new(path.len() + left, next, &mut seq));
        }
    }

    chains
}

/// Edge distance from every module that can reach `target` to `target`.
fn distances_to<P>(target: &ModuleId, mut get_predecessors: P) -> HashMap<ModuleId, usize>
where
    P: FnMut(&ModuleId) -> Vec<ModuleId>,
{
    let mut distance = HashMap::default();
    distance.insert(target.clone(), 0);
    let mut queue = VecDeque::from([(target.clone(), 0)]);

    while let Some((module, dist)) = queue.pop_front() {
        if dist >= MAX_CHAIN_DEPTH {
            continue;
        }
        for predecessor in get_predecessors(&module) {
            if !distance.contains_key(&predecessor) {
                distance.insert(predecessor.clone(), dist + 1);
                queue.push_back((predecessor, dist + 1));
            }
        }
    }

    distance
}

/// Partial path in the search frontier.
///
/// `bound` is the length of the shortest chain the path can still become.
/// The heap pops the smallest bound first, then the longest path, then the
/// earliest pushed.
struct Candidate {
    bound: usize,
    seq: usize,
    path: Vec<ModuleId>,
}

impl Candidate {
    fn new(bound: usize, path: Vec<ModuleId>, seq: &mut usize) -> Self {
        *seq += 1;
        Self {
            bound,
            seq: *seq,
            path,
        }
    }

    fn key(&self) -> (Reverse<usize>, usize, Reverse<usize>) {
        (Reverse(self.bound), self.path.len(), Reverse(self.seq))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str) -> ModuleId {
        ModuleId::new(name).unwrap()
    }

    /// Successor lookup over a static `(from, to)` edge list.
    fn successors(edges: &[(&str, &str)]) -> impl FnMut(&ModuleId) -> Vec<ModuleId> + use<> {
        let edges: Vec<(ModuleId, ModuleId)> =
            edges.iter().map(|(from, to)| (id(from), id(to))).collect();
        move |module| {
            edges
                .iter()
                .filter(|(from, _)| from == module)
                .map(|(_, to)| to.clone())
                .collect()
        }
    }

    /// Predecessor lookup over the same edge list.
    fn predecessors(edges: &[(&str, &str)]) -> impl FnMut(&ModuleId) -> Vec<ModuleId> + use<> {
        let edges: Vec<(ModuleId, ModuleId)> =
            edges.iter().map(|(from, to)| (id(from), id(to))).collect();
        move |module| {
            edges
                .iter()
                .filter(|(_, to)| to == module)
                .map(|(from, _)| from.clone())
                .collect()
        }
    }

    fn search(
        entries: &[&str],
        target: &str,
        limit: usize,
        edges: &[(&str, &str)],
    ) -> Vec<DependencyChain> {
        let entries: Vec<ModuleId> = entries.iter().map(|e| id(e)).collect();
        find_chains(&entries, &id(target), limit, successors(edges), predecessors(edges))
    }

    #[test]
    fn test_dependency_chain_creation() {
        let chain = DependencyChain::new(vec![id("entry"), id("utils"), id("target")]);
        assert_eq!(chain.depth, 2);
        assert_eq!(chain.entry_point(), Some(&id("entry")));
        assert_eq!(chain.target(), Some(&id("target")));
        assert_eq!(chain.format_chain(), "entry -> utils -> target");
    }

    #[test]
    fn test_empty_chain_has_zero_depth() {
        let chain = DependencyChain::new(vec![]);
        assert_eq!(chain.depth, 0);
        assert!(chain.entry_point().is_none());
    }

    #[test]
    fn test_find_chains_multiple_paths_shortest_first() {
        let chains = search(
            &["entry"],
            "target",
            10,
            &[("entry", "a"), ("entry", "target"), ("a", "target")],
        );

        assert_eq!(chains.len(), 2);
        assert_eq!(chains[0].depth, 1);
        assert_eq!(chains[1].depth, 2);
    }

    #[test]
    fn test_find_chains_respects_limit() {
        let chains = search(&["e"], "t", 1, &[("e", "a"), ("e", "b"), ("a", "t"), ("b", "t")]);
        assert_eq!(chains.len(), 1);
    }

    #[test]
    fn test_find_chains_terminates_on_cycles() {
        let chains = search(&["e"], "t", 10, &[("e", "a"), ("a", "b"), ("b", "a"), ("b", "t")]);

        assert_eq!(chains.len(), 1);
        assert_eq!(chains[0].format_chain(), "e -> a -> b -> t");
    }

    #[test]
    fn test_entry_that_is_the_target() {
        let chains = search(&["t"], "t", 10, &[]);
        assert_eq!(chains.len(), 1);
        assert_eq!(chains[0].depth, 0);
    }

    #[test]
    fn test_branches_that_cannot_reach_target_are_ignored() {
        let chains = search(
            &["e", "lonely"],
            "t",
            10,
            &[("e", "x"), ("x", "y"), ("e", "t"), ("lonely", "x")],
        );
        assert_eq!(chains.len(), 1);
        assert_eq!(chains[0].format_chain(), "e -> t");
    }

    #[test]
    fn test_chains_longer_than_max_depth_are_dropped() {
        let names: Vec<String> = (0..=MAX_CHAIN_DEPTH + 1).map(|n| format!("m{n}")).collect();
        let edges: Vec<(&str, &str)> = names
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
            .collect();
        let last = names[MAX_CHAIN_DEPTH + 1].as_str();

        assert!(search(&["m0"], last, 5, &edges).is_empty());
        assert_eq!(search(&["m1"], last, 5, &edges)[0].depth, MAX_CHAIN_DEPTH);
    }

    #[test]
    fn test_ladder_of_diamonds_stays_linear() {
        // Two modules per layer, each causing both modules of the next layer:
        // 2^40 distinct paths lead to the bottom.
        const LAYERS: usize = 40;
        let names: Vec<[String; 2]> = (0..LAYERS)
            .map(|layer| [format!("l{layer}a"), format!("l{layer}b")])
            .collect();
        let mut edges = Vec::new();
        for pair in names.windows(2) {
            for from in &pair[0] {
                for to in &pair[1] {
                    edges.push((from.as_str(), to.as_str()));
                }
            }
        }

        let mut expansions = 0;
        let mut get_successors = successors(&edges);
        let chains = find_chains(
            &[id("l0a"), id("l0b")],
            &id("l39a"),
            5,
            |module| {
                expansions += 1;
                get_successors(module)
            },
            predecessors(&edges),
        );

        assert_eq!(chains.len(), 5);
        assert!(chains.iter().all(|chain| chain.depth == LAYERS - 1));
        assert!(chains.iter().all(|chain| chain.target() == Some(&id("l39a"))));
        assert!(expansions <= 5 * LAYERS * 2, "expanded {expansions} paths");
    }

    #[test]
    fn test_chain_analysis() {
        let target = id("target");
        let chains = vec![
            DependencyChain::new(vec![id("entry1"), target.clone()]),
            DependencyChain::new(vec![id("entry2"), id("middle"), target.clone()]),
        ];

        let analysis = ChainAnalysis::from_chains(target, chains);

        assert!(analysis.is_reachable());
        assert_eq!(analysis.min_depth, Some(1));
        assert_eq!(analysis.max_depth, Some(2));
        assert_eq!(analysis.avg_depth, 1.5);
        assert_eq!(analysis.entry_point_count, 2);
        assert_eq!(analysis.shortest_chain().map(|c| c.depth), Some(1));
    }

    #[test]
    fn test_chain_analysis_unreachable() {
        let analysis = ChainAnalysis::from_chains(id("unreachable"), vec![]);

        assert!(!analysis.is_reachable());
        assert_eq!(analysis.min_depth, None);
        assert_eq!(analysis.avg_depth, 0.0);
        assert_eq!(analysis.entry_point_count, 0);
    }
}
