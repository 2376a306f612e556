//! Property-based tests for heft-graph using proptest.
//!
//! Random reason graphs (cycles and self-reasons included) are checked
//! against a naive breadth-first reachability, and the size and threshold
//! invariants are checked over every module.

use std::collections::{HashSet, VecDeque};

use proptest::prelude::*;

use crate::{BundleGraph, Module, ModuleId, RequirementIndex};

/// Module sizes plus `(causer, caused)` index pairs, all within `0..n`.
fn report_strategy() -> impl Strategy<Value = (Vec<u64>, Vec<(usize, usize)>)> {
    (1usize..=12).prop_flat_map(|n| {
        (
            prop::collection::vec(1u64..=10_000, n),
            prop::collection::vec((0..n, 0..n), 0..=30),
        )
    })
}

fn build(sizes: &[u64], reasons: &[(usize, usize)]) -> BundleGraph {
    let modules = sizes
        .iter()
        .enumerate()
        .map(|(n, size)| {
            reasons
                .iter()
                .filter(|(_, caused)| *caused == n)
                .fold(Module::builder(ModuleId::from(n as i64)).size(*size), |builder, (causer, _)| {
                    builder.reason(ModuleId::from(*causer as i64))
                })
                .build()
        })
        .collect();
    BundleGraph::new(modules).unwrap()
}

/// Reachable set by plain breadth-first search, start id excluded.
fn naive_reach(index: &RequirementIndex, start: &ModuleId) -> HashSet<ModuleId> {
    let mut seen = HashSet::new();
    let mut queue: VecDeque<&ModuleId> = index.successors(start).collect();
    while let Some(id) = queue.pop_front() {
        if seen.insert(id.clone()) {
            queue.extend(index.successors(id));
        }
    }
    seen.remove(start);
    seen
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: the resolver matches naive reachability in any query order.
    #[test]
    fn prop_resolve_matches_naive_reachability(
        (sizes, reasons) in report_strategy(),
        order_seed in any::<u64>(),
    ) {
        let graph = build(&sizes, &reasons);
        let n = sizes.len();

        // Rotate the query order so cached cycle members get hit from every side.
        let offset = (order_seed % n as u64) as usize;
        for step in 0..n {
            let id = ModuleId::from(((step + offset) % n) as i64);
            let resolved: HashSet<ModuleId> = graph.resolve(&id).iter().cloned().collect();
            prop_assert_eq!(&resolved, &naive_reach(graph.index(), &id));
            prop_assert!(!resolved.contains(&id));
        }
    }

    /// Property: total size never drops below own size; equal iff nothing is reachable.
    #[test]
    fn prop_total_size_bounds((sizes, reasons) in report_strategy()) {
        let graph = build(&sizes, &reasons);

        for module in graph.modules() {
            let total = graph.total_size(&module.id).unwrap();
            prop_assert!(total >= module.size);
            prop_assert_eq!(total == module.size, graph.resolve(&module.id).is_empty());
        }
    }

    /// Property: raising the threshold never adds a module to the export.
    #[test]
    fn prop_threshold_monotonic(
        (sizes, reasons) in report_strategy(),
        low in 0u64..50_000,
        delta in 0u64..50_000,
    ) {
        let graph = build(&sizes, &reasons);
        let high = low + delta;

        for module in graph.modules() {
            let included_high = graph.exporter(high).should_include(&module.id).unwrap();
            let included_low = graph.exporter(low).should_include(&module.id).unwrap();
            prop_assert!(!included_high || included_low);
        }
    }

    /// Property: exported edges are unique, never self-edges, and end at a node.
    #[test]
    fn prop_edges_unique_and_point_at_nodes(
        (sizes, reasons) in report_strategy(),
        min_size in 0u64..20_000,
    ) {
        let graph = build(&sizes, &reasons);
        let export = graph.exporter(min_size).export().unwrap();

        let nodes: HashSet<_> = export.nodes.iter().map(|n| n.id.clone()).collect();
        let mut seen = HashSet::new();
        for edge in &export.edges {
            prop_assert_ne!(&edge.from, &edge.to);
            prop_assert!(seen.insert(edge.clone()));
            prop_assert!(nodes.contains(&edge.to));
        }
    }
}
