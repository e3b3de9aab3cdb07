//! Cost-ordered frontier.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::node::SearchNode;

/// A frontier entry wrapping a node with its ordering key.
///
/// `BinaryHeap` is a max-heap, so the key is `Reverse<(cost, seq)>` to pop
/// the lowest cumulative cost first; `seq` is a monotone insertion counter,
/// so equal-cost nodes pop in insertion order.
#[derive(Debug)]
struct Entry {
    key: Reverse<(u64, u64)>,
    node: SearchNode,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Min-heap of search nodes ordered by cumulative cost, ties broken by
/// insertion order.
///
/// Ordering by raw accumulated cost (no heuristic term in the key) is what
/// makes the first goal-satisfying pop optimal.
#[derive(Debug, Default)]
pub struct CostFrontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl CostFrontier {
    /// Creates an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a node onto the frontier.
    pub fn push(&mut self, node: SearchNode) {
        let key = Reverse((node.cost(), self.next_seq));
        self.next_seq += 1;
        self.heap.push(Entry { key, node });
    }

    /// Pops the lowest-cost node, or `None` if the frontier is empty.
    pub fn pop(&mut self) -> Option<SearchNode> {
        self.heap.pop().map(|e| e.node)
    }

    /// Current frontier size.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use decant_core::{State, Transfer};

    fn node_with_cost(cost: u64) -> SearchNode {
        let root = SearchNode::root(State::new(vec![cost as u32 + 1, 0]));
        if cost == 0 {
            return root;
        }
        let t = Transfer::new(0, 1, cost as u32);
        root.child(root.state().apply(&t), t)
    }

    #[test]
    fn test_pop_returns_lowest_cost_first() {
        let mut frontier = CostFrontier::new();
        frontier.push(node_with_cost(10));
        frontier.push(node_with_cost(5));
        frontier.push(node_with_cost(15));

        assert_eq!(frontier.pop().unwrap().cost(), 5);
        assert_eq!(frontier.pop().unwrap().cost(), 10);
        assert_eq!(frontier.pop().unwrap().cost(), 15);
        assert!(frontier.pop().is_none());
    }

    #[test]
    fn test_ties_break_by_insertion_order() {
        let mut frontier = CostFrontier::new();
        let first = SearchNode::root(State::new(vec![1, 0]));
        let second = SearchNode::root(State::new(vec![2, 0]));
        frontier.push(first);
        frontier.push(second);

        assert_eq!(frontier.pop().unwrap().state().volumes(), &[1, 0]);
        assert_eq!(frontier.pop().unwrap().state().volumes(), &[2, 0]);
    }

    #[test]
    fn test_len_and_is_empty() {
        let mut frontier = CostFrontier::new();
        assert!(frontier.is_empty());
        frontier.push(node_with_cost(0));
        assert_eq!(frontier.len(), 1);
        let _ = frontier.pop();
        assert!(frontier.is_empty());
    }
}
