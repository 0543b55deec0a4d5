//! Shared bookkeeping for the searches: the priority queue entry used by greedy and A*, the
//! index-based parent arena and path reconstruction.
use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use std::cmp::Ordering;
use std::collections::VecDeque;

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Parent index of the root of a backward chain.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// A frontier entry keyed by `(priority, seq)`. `seq` is handed out in push order, so equal
/// priorities pop first-in first-out and the ordering is total.
pub(crate) struct SmallestCostHolder<T> {
    pub priority: f64,
    pub seq: usize,
    pub item: T,
}

impl<T> Eq for SmallestCostHolder<T> {}

impl<T> PartialEq for SmallestCostHolder<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> PartialOrd for SmallestCostHolder<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for SmallestCostHolder<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so that BinaryHeap, a max-heap, pops the smallest key first
        match other.priority.total_cmp(&self.priority) {
            Ordering::Equal => other.seq.cmp(&self.seq),
            s => s,
        }
    }
}

/// Hands out strictly increasing insertion numbers.
#[derive(Default)]
pub(crate) struct Sequence(usize);

impl Sequence {
    pub fn next(&mut self) -> usize {
        let n = self.0;
        self.0 += 1;
        n
    }
}

/// Frontier discipline of an uninformed search.
pub(crate) trait Frontier<T>: Default {
    fn push(&mut self, item: T);
    fn pop(&mut self) -> Option<T>;
}

/// First-in first-out, breadth-first order.
pub(crate) struct Queue<T>(VecDeque<T>);

// Written out so that no `T: Default` bound is implied
impl<T> Default for Queue<T> {
    fn default() -> Self {
        Queue(VecDeque::new())
    }
}

impl<T> Frontier<T> for Queue<T> {
    fn push(&mut self, item: T) {
        self.0.push_back(item)
    }
    fn pop(&mut self) -> Option<T> {
        self.0.pop_front()
    }
}

/// Last-in first-out, depth-first order.
pub(crate) struct Stack<T>(Vec<T>);

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack(Vec::new())
    }
}

impl<T> Frontier<T> for Stack<T> {
    fn push(&mut self, item: T) {
        self.0.push(item)
    }
    fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }
}

/// Follows parent indices from `start` back to the root and returns the nodes root first.
/// `lookup` maps an index to its node and the index of its parent ([NO_PARENT] at the root).
pub(crate) fn reverse_path<N, F>(mut lookup: F, start: usize) -> Vec<N>
where
    F: FnMut(usize) -> Option<(N, usize)>,
{
    let mut next = Some(start);
    let mut path: Vec<N> = std::iter::from_fn(|| {
        let (node, parent) = lookup(next?)?;
        next = Some(parent);
        Some(node)
    })
    .collect();
    path.reverse();
    path
}
