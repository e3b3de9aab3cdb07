//! Decant Core - Core types and traits for container transfer planning
//!
//! This crate provides the fundamental abstractions for Decant:
//! - `State` and `Capacities` for modeling container volumes
//! - `Transfer` for describing a single pour between containers
//! - `GoalCondition` predicates, including a parsed expression goal
//! - `TransferConstraint` predicates for restricting legal moves
//! - `Heuristic` cost-to-goal estimators

pub mod constraint;
pub mod goal;
pub mod heuristic;
pub mod state;
pub mod transfer;

pub use constraint::{
    ConstraintSet, EvenSendersOnly, ForbidPair, ForbidReceiving, MaxAmount, MinAmount,
    TransferConstraint,
};
pub use goal::{
    parse_goal, AndGoal, EvenDistributionGoal, ExactMatchGoal, ExprParseError, ExpressionGoal,
    GoalCondition, SingleContainerGoal,
};
pub use heuristic::{
    EvenDistributionHeuristic, Heuristic, SingleContainerHeuristic, TotalVolumeHeuristic,
    ZeroHeuristic,
};
pub use state::{Capacities, State, StateError};
pub use transfer::Transfer;
