//! Search node representation.

use decant_core::{State, Transfer};

/// A node in the search: a reached state, the full transfer path from the
/// start, and the cumulative cost. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct SearchNode {
    state: State,
    path: Vec<Transfer>,
    cost: u64,
}

impl SearchNode {
    /// Creates the root node: empty path, cost zero.
    pub fn root(state: State) -> Self {
        Self {
            state,
            path: Vec::new(),
            cost: 0,
        }
    }

    /// Creates the child reached by applying `transfer` to this node.
    pub fn child(&self, state: State, transfer: Transfer) -> Self {
        let cost = self.cost + transfer.weight;
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(transfer);
        Self { state, path, cost }
    }

    /// Returns the state at this node.
    #[inline]
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Returns the transfer path from the start to this node.
    #[inline]
    pub fn path(&self) -> &[Transfer] {
        &self.path
    }

    /// Returns the cumulative cost of the path.
    #[inline]
    pub fn cost(&self) -> u64 {
        self.cost
    }

    /// Returns the path length.
    #[inline]
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Consumes the node, yielding its path.
    pub fn into_path(self) -> Vec<Transfer> {
        self.path
    }
}
