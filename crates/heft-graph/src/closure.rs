//! Transitive closure over the requirement index.
//!
//! `resolve(id)` answers "which modules are in the bundle because of `id`,
//! directly or indirectly". The resolver keeps two strictly separated pieces
//! of state:
//!
//! - a **closure cache** owned by the resolver, shared by every call, which
//!   only ever grows and never overwrites an entry;
//! - a **path guard** owned by a single top-level call, holding the ids whose
//!   resolution is still in progress. Meeting one of them again means a
//!   reason cycle: that branch contributes nothing and the walk backs up.
//!
//! A value computed while the path guard cut a branch is incomplete for the
//! module that produced it, so it is never cached on its own. Instead the
//! traversal tracks the oldest guarded id each branch ran into; once the
//! module that started a cycle finishes, every module of that cycle group
//! reaches exactly the same set, and the group is cached in one step with
//! each member's own id removed. Cached values are therefore independent of
//! the order in which ids are queried.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};
use tracing::trace;

use super::{ModuleId, RequirementIndex};

/// Fully resolved set of module ids reachable from one module.
pub type ClosureSet = HashSet<ModuleId>;

/// Memoizing resolver for transitive reason closures.
///
/// The cache sits behind a lock so a resolver can be shared across threads.
/// Each call builds its own path guard; only the cache is shared.
#[derive(Debug, Default)]
pub struct ClosureResolver {
    index: RequirementIndex,
    cache: RwLock<HashMap<ModuleId, Arc<ClosureSet>>>,
}

impl ClosureResolver {
    /// Create a resolver with an empty cache.
    pub fn new(index: RequirementIndex) -> Self {
        Self {
            index,
            cache: RwLock::new(HashMap::default()),
        }
    }

    /// The requirement index this resolver walks.
    pub fn index(&self) -> &RequirementIndex {
        &self.index
    }

    /// Every id reachable from `id` through the requirement index.
    ///
    /// The result never contains `id` itself, even when `id` sits on a
    /// reason cycle. Ids without successors (including ids the report does
    /// not know) resolve to the empty set.
    pub fn resolve(&self, id: &ModuleId) -> Arc<ClosureSet> {
        if let Some(closure) = self.cached(id) {
            return closure;
        }

        Traversal::new(&self.index, &self.cache).visit(id);

        let closure = self.cached(id).unwrap_or_default();
        trace!(module = %id, reachable = closure.len(), "resolved closure");
        closure
    }

    /// Returns true if `id` already has a cached closure.
    pub fn is_resolved(&self, id: &ModuleId) -> bool {
        self.cache.read().contains_key(id)
    }

    /// Number of cached closures.
    pub fn cached_count(&self) -> usize {
        self.cache.read().len()
    }

    fn cached(&self, id: &ModuleId) -> Option<Arc<ClosureSet>> {
        self.cache.read().get(id).cloned()
    }
}

/// State of one top-level `resolve` call.
struct Traversal<'a> {
    index: &'a RequirementIndex,
    cache: &'a RwLock<HashMap<ModuleId, Arc<ClosureSet>>>,
    /// Ids whose resolution is in progress, with their discovery order.
    path_guard: HashMap<ModuleId, usize>,
    /// The same ids in discovery order; the tail above a finished cycle
    /// start is that cycle's group.
    pending: Vec<ModuleId>,
    next_order: usize,
}

/// An id whose successors are still being walked.
struct Frame<'a> {
    id: ModuleId,
    order: usize,
    /// Length of `pending` before this id was pushed.
    group_start: usize,
    /// Oldest discovery order reached through the path guard so far.
    low: usize,
    reach: ClosureSet,
    successors: std::vec::IntoIter<&'a ModuleId>,
}

/// What one visited id contributes to its caller.
struct Visit {
    reach: Reach,
    /// Oldest discovery order the branch ran into through the path guard.
    low: usize,
}

enum Reach {
    /// The id's closure is final and cached.
    Settled(Arc<ClosureSet>),
    /// The id is part of a cycle group that is still being explored.
    Open(ClosureSet),
    /// The path guard cut this branch.
    Guarded,
}

/// Outcome of stepping onto an id.
enum Step<'a> {
    Enter(Frame<'a>),
    Done(Visit),
}

impl Visit {
    fn settled(closure: Arc<ClosureSet>) -> Self {
        Self {
            reach: Reach::Settled(closure),
            low: usize::MAX,
        }
    }

    fn absorb_into(self, parent: &mut Frame<'_>) {
        parent.low = parent.low.min(self.low);
        match self.reach {
            Reach::Settled(closure) => parent.reach.extend(closure.iter().cloned()),
            Reach::Open(reach) => parent.reach.extend(reach),
            Reach::Guarded => {}
        }
    }
}

impl<'a> Traversal<'a> {
    fn new(
        index: &'a RequirementIndex,
        cache: &'a RwLock<HashMap<ModuleId, Arc<ClosureSet>>>,
    ) -> Self {
        Self {
            index,
            cache,
            path_guard: HashMap::default(),
            pending: Vec::new(),
            next_order: 0,
        }
    }

    /// Depth-first walk from `id` on an explicit stack of frames.
    ///
    /// Every group finished on the way, `id`'s own included, ends up in the
    /// cache.
    fn visit(&mut self, id: &ModuleId) {
        let Step::Enter(root) = self.enter(id) else {
            return;
        };

        let mut stack = vec![root];
        while let Some(mut frame) = stack.pop() {
            if let Some(successor) = frame.successors.next() {
                frame.reach.insert(successor.clone());
                match self.enter(successor) {
                    Step::Enter(child) => {
                        stack.push(frame);
                        stack.push(child);
                    }
                    Step::Done(child) => {
                        child.absorb_into(&mut frame);
                        stack.push(frame);
                    }
                }
                continue;
            }

            let finished = self.finish(frame);
            if let Some(parent) = stack.last_mut() {
                finished.absorb_into(parent);
            }
        }
    }

    fn enter(&mut self, id: &ModuleId) -> Step<'a> {
        let cached = self.cache.read().get(id).cloned();
        if let Some(closure) = cached {
            return Step::Done(Visit::settled(closure));
        }

        if let Some(&order) = self.path_guard.get(id) {
            return Step::Done(Visit {
                reach: Reach::Guarded,
                low: order,
            });
        }

        let order = self.next_order;
        self.next_order += 1;
        let group_start = self.pending.len();
        self.path_guard.insert(id.clone(), order);
        self.pending.push(id.clone());

        let index = self.index;
        let successors: Vec<&'a ModuleId> = index.successors(id).collect();
        Step::Enter(Frame {
            id: id.clone(),
            order,
            group_start,
            low: order,
            reach: ClosureSet::default(),
            successors: successors.into_iter(),
        })
    }

    fn finish(&mut self, frame: Frame<'a>) -> Visit {
        if frame.low < frame.order {
            // A cycle through an older id is still open; that id settles us.
            return Visit {
                reach: Reach::Open(frame.reach),
                low: frame.low,
            };
        }

        let group = self.pending.split_off(frame.group_start);
        for member in &group {
            self.path_guard.remove(member);
        }
        Visit::settled(self.settle(&frame.id, &group, frame.reach))
    }

    /// Cache the closure of every member of a finished group.
    ///
    /// All members reach the same set; a member's closure is that set
    /// without the member itself.
    fn settle(&self, root: &ModuleId, group: &[ModuleId], reach: ClosureSet) -> Arc<ClosureSet> {
        let mut cache = self.cache.write();

        if let [single] = group {
            return Arc::clone(cache.entry(single.clone()).or_insert_with(|| Arc::new(reach)));
        }

        trace!(
            root = %root,
            members = group.len(),
            reachable = reach.len(),
            "settled reason cycle"
        );

        let mut root_closure = None;
        for member in group {
            let closure = cache.entry(member.clone()).or_insert_with(|| {
                let mut closure = reach.clone();
                closure.remove(member);
                Arc::new(closure)
            });
            if member == root {
                root_closure = Some(Arc::clone(closure));
            }
        }
        root_closure.unwrap_or_default()
    }
}
