//! The transfer search engine.
//!
//! Two search modes over the same move generation:
//!
//! - **Best path** ([`TransferSolver::solve`]): a frontier ordered by
//!   cumulative cost. Because the ordering key is raw accumulated cost and
//!   transfer weights are positive, the first goal-satisfying node popped is
//!   optimal (uniform-cost search).
//! - **Exhaustive enumeration** ([`TransferSolver::find_all_solutions`]): a
//!   plain FIFO traversal bounded by a maximum path length. Goal states do
//!   not terminate their branch; expansion continues to the depth bound.
//!
//! Both modes deduplicate globally by state: a state is enqueued at most
//! once, so enumeration yields one path per distinct state, not every
//! distinct path. That is a deliberate design constant.
//!
//! The engine imposes no time or node budget of its own. Callers needing
//! bounded runtime must bound `max_depth` or wrap the call externally.

use std::collections::{HashSet, VecDeque};

use decant_core::{Capacities, ConstraintSet, GoalCondition, State, StateError, Transfer, TransferConstraint};
use tracing::{debug, info, trace};

use crate::frontier::CostFrontier;
use crate::generator::MoveGenerator;
use crate::node::SearchNode;

/// Solver over a fixed capacity vector and constraint set.
///
/// Self-contained and free of global state: independent instances can run
/// concurrently without sharing anything mutable.
///
/// # Example
///
/// ```
/// use decant_core::{Capacities, ExactMatchGoal, State};
/// use decant_solver::TransferSolver;
///
/// let solver = TransferSolver::new(Capacities::new(vec![5, 3]));
/// let path = solver
///     .solve(&State::new(vec![5, 0]), &ExactMatchGoal::new(vec![2, 3]))
///     .unwrap()
///     .expect("reachable goal");
/// assert_eq!(path.len(), 1);
/// ```
#[derive(Debug)]
pub struct TransferSolver {
    capacities: Capacities,
    constraints: ConstraintSet,
}

impl TransferSolver {
    /// Creates a solver with the given capacities and no constraints.
    pub fn new(capacities: Capacities) -> Self {
        Self {
            capacities,
            constraints: ConstraintSet::new(),
        }
    }

    /// Registers a transfer constraint, builder style.
    pub fn with_constraint(mut self, constraint: impl TransferConstraint + 'static) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Replaces the constraint set.
    pub fn with_constraints(mut self, constraints: ConstraintSet) -> Self {
        self.constraints = constraints;
        self
    }

    /// Returns the capacity vector.
    pub fn capacities(&self) -> &Capacities {
        &self.capacities
    }

    /// Returns the constraint set.
    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// Validates the start state at the API boundary; invariant violations
    /// never enter the search.
    fn admit_start(&self, start: &State) -> Result<State, StateError> {
        self.capacities.admit(start.volumes().to_vec())
    }

    /// Finds a lowest-cost transfer sequence from `start` to a state
    /// satisfying `goal`.
    ///
    /// Returns `Ok(None)` when no reachable state satisfies the goal — a
    /// legitimate outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StateError`] if `start` violates the capacity invariants.
    pub fn solve(
        &self,
        start: &State,
        goal: &dyn GoalCondition,
    ) -> Result<Option<Vec<Transfer>>, StateError> {
        let start = self.admit_start(start)?;
        debug!(containers = start.len(), "starting best-path search");

        let generator = MoveGenerator::new(&self.capacities, &self.constraints);
        let mut frontier = CostFrontier::new();
        let mut visited: HashSet<State> = HashSet::new();
        let mut expansions: u64 = 0;

        visited.insert(start.clone());
        frontier.push(SearchNode::root(start));

        while let Some(node) = frontier.pop() {
            if goal.is_satisfied(node.state()) {
                info!(
                    steps = node.depth(),
                    cost = node.cost(),
                    expansions,
                    "solution found"
                );
                return Ok(Some(node.into_path()));
            }

            trace!(state = %node.state(), cost = node.cost(), "expanding");
            expansions += 1;

            for next in generator.successors(node.state()) {
                if visited.insert(next.state.clone()) {
                    frontier.push(node.child(next.state, next.transfer));
                }
            }
        }

        debug!(expansions, "frontier exhausted without reaching the goal");
        Ok(None)
    }

    /// Enumerates solution paths breadth-first up to `max_depth` transfers.
    ///
    /// Every dequeued node whose state satisfies the goal contributes its
    /// path, and its branch keeps expanding until the depth bound. States
    /// are deduplicated globally, so the result holds one path per distinct
    /// goal state reached. An empty result is a legitimate outcome.
    ///
    /// # Errors
    ///
    /// Returns [`StateError`] if `start` violates the capacity invariants.
    pub fn find_all_solutions(
        &self,
        start: &State,
        goal: &dyn GoalCondition,
        max_depth: usize,
    ) -> Result<Vec<Vec<Transfer>>, StateError> {
        let start = self.admit_start(start)?;
        debug!(
            containers = start.len(),
            max_depth, "starting exhaustive enumeration"
        );

        let generator = MoveGenerator::new(&self.capacities, &self.constraints);
        let mut queue: VecDeque<SearchNode> = VecDeque::new();
        let mut visited: HashSet<State> = HashSet::new();
        let mut solutions: Vec<Vec<Transfer>> = Vec::new();

        visited.insert(start.clone());
        queue.push_back(SearchNode::root(start));

        while let Some(node) = queue.pop_front() {
            if goal.is_satisfied(node.state()) {
                trace!(state = %node.state(), depth = node.depth(), "solution recorded");
                solutions.push(node.path().to_vec());
            }

            if node.depth() >= max_depth {
                continue;
            }

            for next in generator.successors(node.state()) {
                if visited.insert(next.state.clone()) {
                    queue.push_back(node.child(next.state, next.transfer));
                }
            }
        }

        debug!(count = solutions.len(), "enumeration complete");
        Ok(solutions)
    }

    /// Depth-unbounded variant of [`find_all_solutions`].
    ///
    /// Terminates because the state space under fixed capacities is finite
    /// and each state is expanded at most once.
    ///
    /// [`find_all_solutions`]: TransferSolver::find_all_solutions
    ///
    /// # Errors
    ///
    /// Returns [`StateError`] if `start` violates the capacity invariants.
    pub fn find_all_paths(
        &self,
        start: &State,
        goal: &dyn GoalCondition,
    ) -> Result<Vec<Vec<Transfer>>, StateError> {
        self.find_all_solutions(start, goal, usize::MAX)
    }
}
