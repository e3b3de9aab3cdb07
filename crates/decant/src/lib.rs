//! Decant - a container transfer planner
//!
//! Given per-container capacities, a start configuration and a goal,
//! Decant searches for the cheapest sequence of pours that reaches the
//! goal, or enumerates all solutions up to a depth bound.
//!
//! # Example
//!
//! ```rust
//! use decant::{Capacities, ExactMatchGoal, State, TransferSolver};
//!
//! let solver = TransferSolver::new(Capacities::new(vec![5, 3]));
//! let path = solver
//!     .solve(&State::new(vec![5, 0]), &ExactMatchGoal::new(vec![2, 3]))
//!     .unwrap()
//!     .expect("reachable");
//! assert_eq!(path.len(), 1);
//! ```
//!
//! Problems can also be defined in TOML or YAML:
//!
//! ```rust
//! use decant::{ProblemConfig, TransferSolver};
//!
//! let config = ProblemConfig::from_toml_str(r#"
//!     capacities = [8, 5, 3]
//!     start = [8, 0, 0]
//!
//!     [goal]
//!     type = "exact_match"
//!     target = [4, 4, 0]
//! "#).unwrap();
//!
//! let solver = TransferSolver::new(config.capacities())
//!     .with_constraints(config.build_constraints());
//! let path = solver
//!     .solve(&config.start_state().unwrap(), config.build_goal().unwrap().as_ref())
//!     .unwrap();
//! assert!(path.is_some());
//! ```

// Value types
pub use decant_core::{Capacities, State, StateError, Transfer};

// Goal conditions
pub use decant_core::{
    parse_goal, AndGoal, EvenDistributionGoal, ExactMatchGoal, ExprParseError, ExpressionGoal,
    GoalCondition, SingleContainerGoal,
};

// Transfer constraints
pub use decant_core::{
    ConstraintSet, EvenSendersOnly, ForbidPair, ForbidReceiving, MaxAmount, MinAmount,
    TransferConstraint,
};

// Heuristics (a decoupled capability; not part of frontier ordering)
pub use decant_core::{
    EvenDistributionHeuristic, Heuristic, SingleContainerHeuristic, TotalVolumeHeuristic,
    ZeroHeuristic,
};

// Search engine
pub use decant_solver::{replay, CostFrontier, MoveGenerator, MoveResult, SearchNode, TransferSolver};

// Problem configuration
pub use decant_config::{ConfigError, ConstraintConfig, GoalConfig, ProblemConfig};
