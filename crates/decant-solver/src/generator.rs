//! Move generation.
//!
//! For a state, enumerates every legal pour: for each ordered pair
//! `(from, to)` with a non-empty source, the candidate amount is
//! `min(source volume, destination free space)` — always the full pour, a
//! constraint either rejects the whole candidate or admits it unchanged.
//! Iteration order is ascending `from`, then ascending `to`, so frontier
//! tie-breaking stays reproducible.

use decant_core::{Capacities, ConstraintSet, State, Transfer};

/// The outcome of applying one candidate transfer: the resulting state and
/// the transfer that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// The post-pour state.
    pub state: State,
    /// The transfer that was applied.
    pub transfer: Transfer,
}

/// Pure, stateless successor generator over capacities and constraints.
///
/// # Example
///
/// ```
/// use decant_core::{Capacities, ConstraintSet, State};
/// use decant_solver::MoveGenerator;
///
/// let capacities = Capacities::new(vec![5, 3]);
/// let constraints = ConstraintSet::new();
/// let generator = MoveGenerator::new(&capacities, &constraints);
///
/// let state = State::new(vec![5, 0]);
/// let moves: Vec<_> = generator.successors(&state).collect();
/// assert_eq!(moves.len(), 1);
/// assert_eq!(moves[0].state.volumes(), &[2, 3]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MoveGenerator<'a> {
    capacities: &'a Capacities,
    constraints: &'a ConstraintSet,
}

impl<'a> MoveGenerator<'a> {
    /// Creates a generator over the given capacities and constraints.
    pub fn new(capacities: &'a Capacities, constraints: &'a ConstraintSet) -> Self {
        Self {
            capacities,
            constraints,
        }
    }

    /// Lazily enumerates the legal moves from `state`, in deterministic
    /// order (ascending `from`, then ascending `to`).
    ///
    /// At most `n * (n - 1)` candidates are considered per call.
    pub fn successors<'s>(&'s self, state: &'s State) -> impl Iterator<Item = MoveResult> + 's {
        let n = state.len();
        (0..n).flat_map(move |from| (0..n).filter_map(move |to| self.candidate(state, from, to)))
    }

    fn candidate(&self, state: &State, from: usize, to: usize) -> Option<MoveResult> {
        if from == to {
            return None;
        }
        let available = state.volumes()[from];
        if available == 0 {
            return None;
        }
        let amount = available.min(self.capacities.free_space(state, to));
        if amount == 0 {
            return None;
        }
        if !self.constraints.allows(state, from, to, amount) {
            return None;
        }
        let transfer = Transfer::new(from, to, amount);
        Some(MoveResult {
            state: state.apply(&transfer),
            transfer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use decant_core::{ForbidPair, MaxAmount};

    fn generate(capacities: &Capacities, constraints: &ConstraintSet, state: &State) -> Vec<MoveResult> {
        MoveGenerator::new(capacities, constraints)
            .successors(state)
            .collect()
    }

    #[test]
    fn test_amounts_within_bounds() {
        let capacities = Capacities::new(vec![8, 5, 3]);
        let constraints = ConstraintSet::new();
        let state = State::new(vec![6, 2, 1]);

        for result in generate(&capacities, &constraints, &state) {
            let t = &result.transfer;
            assert!(t.amount > 0);
            assert!(t.amount <= state.volumes()[t.from]);
            assert!(t.amount <= capacities.free_space(&state, t.to));
        }
    }

    #[test]
    fn test_conserves_total_volume() {
        let capacities = Capacities::new(vec![8, 5, 3]);
        let constraints = ConstraintSet::new();
        let state = State::new(vec![8, 0, 0]);

        for result in generate(&capacities, &constraints, &state) {
            assert_eq!(result.state.total(), state.total());
        }
    }

    #[test]
    fn test_deterministic_ordering() {
        let capacities = Capacities::new(vec![4, 4, 4]);
        let constraints = ConstraintSet::new();
        let state = State::new(vec![2, 2, 2]);

        let pairs: Vec<(usize, usize)> = generate(&capacities, &constraints, &state)
            .iter()
            .map(|r| (r.transfer.from, r.transfer.to))
            .collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1)]);
    }

    #[test]
    fn test_skips_empty_sources_and_full_destinations() {
        let capacities = Capacities::new(vec![5, 3]);
        let constraints = ConstraintSet::new();

        // Source empty: nothing moves out of container 1.
        let state = State::new(vec![5, 0]);
        let moves = generate(&capacities, &constraints, &state);
        assert!(moves.iter().all(|r| r.transfer.from == 0));

        // Destination full: nothing moves into container 1.
        let state = State::new(vec![2, 3]);
        let moves = generate(&capacities, &constraints, &state);
        assert!(moves.iter().all(|r| r.transfer.to != 1));
    }

    #[test]
    fn test_constraint_rejects_whole_candidate() {
        let capacities = Capacities::new(vec![9, 9]);
        // Candidate amount would be 5; the cap does not shrink it to 4,
        // the whole move disappears.
        let constraints = ConstraintSet::new().with(MaxAmount::new(4));
        let state = State::new(vec![5, 0]);

        let moves = generate(&capacities, &constraints, &state);
        assert!(moves.is_empty());
    }

    #[test]
    fn test_forbidden_pair_filtered() {
        let capacities = Capacities::new(vec![4, 4, 4]);
        let constraints = ConstraintSet::new().with(ForbidPair::new(0, 1));
        let state = State::new(vec![4, 0, 0]);

        let pairs: Vec<(usize, usize)> = generate(&capacities, &constraints, &state)
            .iter()
            .map(|r| (r.transfer.from, r.transfer.to))
            .collect();
        assert_eq!(pairs, vec![(0, 2)]);
    }
}
