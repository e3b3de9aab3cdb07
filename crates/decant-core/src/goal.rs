//! Goal conditions.
//!
//! A goal condition is a stateless predicate over a [`State`]. The search
//! engine never inspects what a goal means, only whether a state satisfies
//! it, so new variants can be added without touching the search loop.

mod expr;

pub use expr::{parse_goal, ExprParseError, ExpressionGoal};

use crate::state::State;

/// Predicate determining whether a state is an accepted solution.
pub trait GoalCondition: Send + Sync {
    /// Returns `true` if `state` meets this goal.
    fn is_satisfied(&self, state: &State) -> bool;
}

/// Closures are goal conditions, for ad-hoc goals built by callers.
///
/// # Example
///
/// ```
/// use decant_core::{GoalCondition, State};
///
/// let total_is_six = |state: &State| state.total() == 6;
/// assert!(total_is_six.is_satisfied(&State::new(vec![4, 2])));
/// ```
impl<F> GoalCondition for F
where
    F: Fn(&State) -> bool + Send + Sync,
{
    fn is_satisfied(&self, state: &State) -> bool {
        self(state)
    }
}

/// Goal requiring every container to match a target volume exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactMatchGoal {
    target: Vec<u32>,
}

impl ExactMatchGoal {
    /// Creates a goal matching the given target volumes.
    pub fn new(target: Vec<u32>) -> Self {
        Self { target }
    }
}

impl GoalCondition for ExactMatchGoal {
    fn is_satisfied(&self, state: &State) -> bool {
        state.volumes() == self.target.as_slice()
    }
}

/// Goal requiring one specific container to reach a target volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingleContainerGoal {
    index: usize,
    target: u32,
}

impl SingleContainerGoal {
    /// Creates a goal on container `index` with the desired `target` volume.
    pub fn new(index: usize, target: u32) -> Self {
        Self { index, target }
    }
}

impl GoalCondition for SingleContainerGoal {
    fn is_satisfied(&self, state: &State) -> bool {
        state.get(self.index) == Some(self.target)
    }
}

/// Goal requiring all containers to hold the same volume.
///
/// Vacuously satisfied for zero containers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvenDistributionGoal;

impl GoalCondition for EvenDistributionGoal {
    fn is_satisfied(&self, state: &State) -> bool {
        let volumes = state.volumes();
        volumes.windows(2).all(|w| w[0] == w[1])
    }
}

/// Conjunction of two goal conditions.
pub struct AndGoal {
    left: Box<dyn GoalCondition>,
    right: Box<dyn GoalCondition>,
}

impl AndGoal {
    /// Creates a goal satisfied only when both sub-goals are satisfied.
    pub fn new(left: impl GoalCondition + 'static, right: impl GoalCondition + 'static) -> Self {
        Self {
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl GoalCondition for AndGoal {
    fn is_satisfied(&self, state: &State) -> bool {
        self.left.is_satisfied(state) && self.right.is_satisfied(state)
    }
}

impl std::fmt::Debug for AndGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AndGoal").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let goal = ExactMatchGoal::new(vec![2, 3]);
        assert!(goal.is_satisfied(&State::new(vec![2, 3])));
        assert!(!goal.is_satisfied(&State::new(vec![3, 2])));
    }

    #[test]
    fn test_single_container() {
        let goal = SingleContainerGoal::new(1, 4);
        assert!(goal.is_satisfied(&State::new(vec![0, 4, 9])));
        assert!(!goal.is_satisfied(&State::new(vec![4, 0, 9])));
    }

    #[test]
    fn test_single_container_out_of_range_never_satisfied() {
        let goal = SingleContainerGoal::new(5, 0);
        assert!(!goal.is_satisfied(&State::new(vec![1, 2])));
    }

    #[test]
    fn test_even_distribution() {
        let goal = EvenDistributionGoal;
        assert!(goal.is_satisfied(&State::new(vec![3, 3, 3])));
        assert!(!goal.is_satisfied(&State::new(vec![3, 3, 2])));
        assert!(goal.is_satisfied(&State::new(vec![7])));
        assert!(goal.is_satisfied(&State::new(vec![])));
    }

    #[test]
    fn test_and_goal() {
        let goal = AndGoal::new(
            SingleContainerGoal::new(0, 2),
            SingleContainerGoal::new(1, 3),
        );
        assert!(goal.is_satisfied(&State::new(vec![2, 3])));
        assert!(!goal.is_satisfied(&State::new(vec![2, 0])));
    }

    #[test]
    fn test_closure_goal() {
        let goal = |state: &State| state.get(0) >= Some(3);
        assert!(goal.is_satisfied(&State::new(vec![4, 0])));
        assert!(!goal.is_satisfied(&State::new(vec![2, 0])));
    }
}
