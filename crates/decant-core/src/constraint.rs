//! Transfer constraints.
//!
//! A constraint is a predicate over `(state, from, to, amount)` deciding
//! whether a candidate transfer is legal. Constraints see only the immediate
//! pre-transfer state and the proposed move, never search history, so they
//! compose independently of search order. A constraint either rejects the
//! whole candidate or admits it unchanged; the amount is never reduced to
//! satisfy it.

use std::fmt;

use crate::state::State;

/// Predicate restricting which candidate transfers are legal.
pub trait TransferConstraint: Send + Sync {
    /// Returns `true` if pouring `amount` units from `from` to `to` is
    /// allowed in `state`.
    fn is_allowed(&self, state: &State, from: usize, to: usize, amount: u32) -> bool;
}

/// Closures are transfer constraints, for ad-hoc policies built by callers.
impl<F> TransferConstraint for F
where
    F: Fn(&State, usize, usize, u32) -> bool + Send + Sync,
{
    fn is_allowed(&self, state: &State, from: usize, to: usize, amount: u32) -> bool {
        self(state, from, to, amount)
    }
}

/// Forbids transfers along one specific (from, to) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForbidPair {
    from: usize,
    to: usize,
}

impl ForbidPair {
    /// Creates a constraint blocking pours from `from` into `to`.
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

impl TransferConstraint for ForbidPair {
    fn is_allowed(&self, _state: &State, from: usize, to: usize, _amount: u32) -> bool {
        !(from == self.from && to == self.to)
    }
}

/// Forbids a specific container from receiving any transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForbidReceiving {
    to: usize,
}

impl ForbidReceiving {
    /// Creates a constraint blocking all pours into `to`.
    pub fn new(to: usize) -> Self {
        Self { to }
    }
}

impl TransferConstraint for ForbidReceiving {
    fn is_allowed(&self, _state: &State, _from: usize, to: usize, _amount: u32) -> bool {
        to != self.to
    }
}

/// Caps the volume any single transfer may move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxAmount {
    limit: u32,
}

impl MaxAmount {
    /// Creates a constraint admitting transfers of at most `limit` units.
    pub fn new(limit: u32) -> Self {
        Self { limit }
    }
}

impl TransferConstraint for MaxAmount {
    fn is_allowed(&self, _state: &State, _from: usize, _to: usize, amount: u32) -> bool {
        amount <= self.limit
    }
}

/// Requires every transfer to move at least a minimum volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinAmount {
    minimum: u32,
}

impl MinAmount {
    /// Creates a constraint admitting transfers of at least `minimum` units.
    pub fn new(minimum: u32) -> Self {
        Self { minimum }
    }
}

impl TransferConstraint for MinAmount {
    fn is_allowed(&self, _state: &State, _from: usize, _to: usize, amount: u32) -> bool {
        amount >= self.minimum
    }
}

/// Only even-indexed containers may send.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvenSendersOnly;

impl TransferConstraint for EvenSendersOnly {
    fn is_allowed(&self, _state: &State, from: usize, _to: usize, _amount: u32) -> bool {
        from % 2 == 0
    }
}

/// An AND-combined collection of constraints.
///
/// A candidate transfer is admitted only if every registered constraint
/// admits it; the empty set admits everything.
///
/// # Example
///
/// ```
/// use decant_core::{ConstraintSet, ForbidPair, MaxAmount, State};
///
/// let set = ConstraintSet::new()
///     .with(ForbidPair::new(0, 1))
///     .with(MaxAmount::new(4));
/// let state = State::new(vec![5, 0, 0]);
/// assert!(!set.allows(&state, 0, 1, 3));
/// assert!(!set.allows(&state, 0, 2, 5));
/// assert!(set.allows(&state, 0, 2, 3));
/// ```
#[derive(Default)]
pub struct ConstraintSet {
    constraints: Vec<Box<dyn TransferConstraint>>,
}

impl ConstraintSet {
    /// Creates an empty constraint set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a constraint.
    pub fn push(&mut self, constraint: impl TransferConstraint + 'static) {
        self.constraints.push(Box::new(constraint));
    }

    /// Registers a constraint, builder style.
    pub fn with(mut self, constraint: impl TransferConstraint + 'static) -> Self {
        self.push(constraint);
        self
    }

    /// Returns the number of registered constraints.
    #[inline]
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Returns whether no constraints are registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Returns `true` if every registered constraint admits the candidate.
    pub fn allows(&self, state: &State, from: usize, to: usize, amount: u32) -> bool {
        self.constraints
            .iter()
            .all(|c| c.is_allowed(state, from, to, amount))
    }
}

impl fmt::Debug for ConstraintSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstraintSet")
            .field("len", &self.constraints.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_is_vacuously_true() {
        let set = ConstraintSet::new();
        assert!(set.allows(&State::new(vec![1, 1]), 0, 1, 1));
    }

    #[test]
    fn test_forbid_pair() {
        let c = ForbidPair::new(0, 1);
        let state = State::new(vec![5, 0, 0]);
        assert!(!c.is_allowed(&state, 0, 1, 3));
        assert!(c.is_allowed(&state, 1, 0, 3));
        assert!(c.is_allowed(&state, 0, 2, 3));
    }

    #[test]
    fn test_forbid_receiving() {
        let c = ForbidReceiving::new(2);
        let state = State::new(vec![5, 0, 0]);
        assert!(!c.is_allowed(&state, 0, 2, 1));
        assert!(c.is_allowed(&state, 0, 1, 1));
    }

    #[test]
    fn test_amount_bounds() {
        let state = State::new(vec![9, 0]);
        assert!(MaxAmount::new(4).is_allowed(&state, 0, 1, 4));
        assert!(!MaxAmount::new(4).is_allowed(&state, 0, 1, 5));
        assert!(MinAmount::new(2).is_allowed(&state, 0, 1, 2));
        assert!(!MinAmount::new(2).is_allowed(&state, 0, 1, 1));
    }

    #[test]
    fn test_even_senders_only() {
        let state = State::new(vec![3, 3, 3]);
        assert!(EvenSendersOnly.is_allowed(&state, 0, 1, 1));
        assert!(!EvenSendersOnly.is_allowed(&state, 1, 0, 1));
        assert!(EvenSendersOnly.is_allowed(&state, 2, 1, 1));
    }

    #[test]
    fn test_closure_constraint() {
        let no_draining = |state: &State, from: usize, _to: usize, amount: u32| {
            state.volumes()[from] > amount
        };
        let state = State::new(vec![5, 0]);
        assert!(no_draining.is_allowed(&state, 0, 1, 3));
        assert!(!no_draining.is_allowed(&state, 0, 1, 5));
    }

    #[test]
    fn test_and_composition() {
        let set = ConstraintSet::new()
            .with(MinAmount::new(2))
            .with(MaxAmount::new(4));
        let state = State::new(vec![9, 0]);
        assert!(set.allows(&state, 0, 1, 3));
        assert!(!set.allows(&state, 0, 1, 1));
        assert!(!set.allows(&state, 0, 1, 5));
    }
}
