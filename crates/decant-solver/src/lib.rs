//! Decant Solver Engine
//!
//! This crate provides the search engine for container transfer planning:
//! - `MoveGenerator` for lazy, constraint-filtered successor enumeration
//! - `SearchNode` and `CostFrontier` for cost-ordered exploration
//! - `TransferSolver` with best-path search and exhaustive enumeration
//! - `replay` for recomputing the states along a solution path
//!
//! The engine is single-threaded and synchronous. A solver instance is
//! self-contained (capacities plus constraints), so independent instances
//! parallelize trivially across problem instances.

pub mod engine;
pub mod frontier;
pub mod generator;
pub mod node;
pub mod replay;

pub use engine::TransferSolver;
pub use frontier::CostFrontier;
pub use generator::{MoveGenerator, MoveResult};
pub use node::SearchNode;
pub use replay::replay;
