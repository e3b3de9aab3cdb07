//! Container states and capacities.
//!
//! A [`State`] is an immutable snapshot of per-container volumes with value
//! equality and hashing, so it can serve as a deduplication key during
//! search. A [`Capacities`] vector is fixed per problem instance and owns
//! the construction boundary: volumes enter the system only through
//! [`Capacities::admit`], which rejects anything over capacity.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::transfer::Transfer;

/// Error raised when a volume vector violates the container invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// The volume vector has a different length than the capacity vector.
    #[error("expected {expected} containers, got {actual}")]
    LengthMismatch {
        /// Number of containers the problem instance defines.
        expected: usize,
        /// Number of volumes supplied.
        actual: usize,
    },

    /// A container would hold more than its capacity.
    #[error("container {index} holds {volume} but its capacity is {capacity}")]
    OverCapacity {
        /// Index of the offending container.
        index: usize,
        /// Supplied volume.
        volume: u32,
        /// Maximum volume for that container.
        capacity: u32,
    },
}

/// An immutable snapshot of per-container volumes.
///
/// Two states are equal iff their volume sequences are equal element-wise;
/// the derived `Hash` is consistent with that equality. States are value
/// types: every transfer application produces a fresh snapshot.
///
/// # Example
///
/// ```
/// use decant_core::{State, Transfer};
///
/// let state = State::new(vec![5, 0]);
/// let next = state.apply(&Transfer::new(0, 1, 3));
/// assert_eq!(next.volumes(), &[2, 3]);
/// assert_eq!(state.volumes(), &[5, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct State {
    volumes: Vec<u32>,
}

impl State {
    /// Creates a state from raw volumes.
    ///
    /// Capacity invariants are not checked here; use [`Capacities::admit`]
    /// at the boundary where untrusted volumes enter.
    pub fn new(volumes: Vec<u32>) -> Self {
        Self { volumes }
    }

    /// Returns the per-container volumes.
    #[inline]
    pub fn volumes(&self) -> &[u32] {
        &self.volumes
    }

    /// Returns the volume of one container, if the index is in range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<u32> {
        self.volumes.get(index).copied()
    }

    /// Returns the number of containers.
    #[inline]
    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    /// Returns whether there are no containers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }

    /// Returns the total volume across all containers.
    pub fn total(&self) -> u64 {
        self.volumes.iter().map(|&v| u64::from(v)).sum()
    }

    /// Applies a transfer, producing the post-pour snapshot.
    ///
    /// Assumes the transfer was produced by the move generator and is legal
    /// for this state; legality is only debug-asserted, not re-validated in
    /// the hot path.
    pub fn apply(&self, transfer: &Transfer) -> State {
        debug_assert_ne!(transfer.from, transfer.to);
        debug_assert!(transfer.amount > 0);
        debug_assert!(self.volumes[transfer.from] >= transfer.amount);

        let mut volumes = self.volumes.clone();
        volumes[transfer.from] -= transfer.amount;
        volumes[transfer.to] += transfer.amount;
        State { volumes }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.volumes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

/// The fixed per-container capacity vector of a problem instance.
///
/// Read-only for the lifetime of a search; defines both the legality of
/// transfers and the admissible volume range of every container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capacities {
    limits: Vec<u32>,
}

impl Capacities {
    /// Creates a capacity vector.
    pub fn new(limits: Vec<u32>) -> Self {
        Self { limits }
    }

    /// Returns the per-container capacity limits.
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.limits
    }

    /// Returns the capacity of one container, if the index is in range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<u32> {
        self.limits.get(index).copied()
    }

    /// Returns the number of containers.
    #[inline]
    pub fn len(&self) -> usize {
        self.limits.len()
    }

    /// Returns whether there are no containers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }

    /// Returns how much more container `index` can receive in `state`.
    #[inline]
    pub fn free_space(&self, state: &State, index: usize) -> u32 {
        self.limits[index].saturating_sub(state.volumes()[index])
    }

    /// Validates raw volumes against these capacities, producing a state.
    ///
    /// This is the construction boundary from the error taxonomy: invariant
    /// violations are rejected here and never enter the search.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::LengthMismatch`] or [`StateError::OverCapacity`].
    pub fn admit(&self, volumes: Vec<u32>) -> Result<State, StateError> {
        if volumes.len() != self.limits.len() {
            return Err(StateError::LengthMismatch {
                expected: self.limits.len(),
                actual: volumes.len(),
            });
        }
        for (index, (&volume, &capacity)) in volumes.iter().zip(self.limits.iter()).enumerate() {
            if volume > capacity {
                return Err(StateError::OverCapacity {
                    index,
                    volume,
                    capacity,
                });
            }
        }
        Ok(State::new(volumes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_value_equality_and_hash() {
        use std::collections::HashSet;

        let a = State::new(vec![1, 2, 3]);
        let b = State::new(vec![1, 2, 3]);
        let c = State::new(vec![3, 2, 1]);

        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
        assert!(!set.contains(&c));
    }

    #[test]
    fn test_apply_preserves_total_volume() {
        let state = State::new(vec![5, 0, 2]);
        let next = state.apply(&Transfer::new(0, 1, 3));

        assert_eq!(next.volumes(), &[2, 3, 2]);
        assert_eq!(next.total(), state.total());
    }

    #[test]
    fn test_apply_leaves_original_untouched() {
        let state = State::new(vec![4, 4]);
        let _ = state.apply(&Transfer::new(0, 1, 2));
        assert_eq!(state.volumes(), &[4, 4]);
    }

    #[test]
    fn test_display() {
        assert_eq!(State::new(vec![5, 0, 3]).to_string(), "[5, 0, 3]");
        assert_eq!(State::new(vec![]).to_string(), "[]");
    }

    #[test]
    fn test_admit_accepts_valid_volumes() {
        let caps = Capacities::new(vec![5, 3]);
        let state = caps.admit(vec![5, 0]).unwrap();
        assert_eq!(state.volumes(), &[5, 0]);
    }

    #[test]
    fn test_admit_rejects_length_mismatch() {
        let caps = Capacities::new(vec![5, 3]);
        assert_eq!(
            caps.admit(vec![1, 2, 3]),
            Err(StateError::LengthMismatch {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn test_admit_rejects_over_capacity() {
        let caps = Capacities::new(vec![5, 3]);
        assert_eq!(
            caps.admit(vec![2, 4]),
            Err(StateError::OverCapacity {
                index: 1,
                volume: 4,
                capacity: 3
            })
        );
    }

    #[test]
    fn test_free_space() {
        let caps = Capacities::new(vec![8, 5]);
        let state = State::new(vec![3, 5]);
        assert_eq!(caps.free_space(&state, 0), 5);
        assert_eq!(caps.free_space(&state, 1), 0);
    }
}
