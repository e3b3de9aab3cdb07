//! Cost-to-goal estimators.
//!
//! Heuristics are a pluggable capability kept decoupled from the search:
//! the frontier orders by accumulated cost alone, which is what makes the
//! first goal pop optimal. Wiring an estimate into the ordering key would
//! change that guarantee, so these stay injectable strategies for a future
//! `f = g + h` ordering rather than part of the loop today.

use crate::state::State;

/// Estimates the remaining cost from a state to the goal.
pub trait Heuristic: Send + Sync {
    /// Returns an estimate of the cost still needed to reach the goal.
    fn estimate(&self, state: &State) -> u64;
}

/// The zero estimate; search ordered by this alone is Dijkstra's algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _state: &State) -> u64 {
        0
    }
}

/// Estimates the distance to an even distribution.
///
/// Half the summed absolute deviation from the integer mean: every unit
/// above the mean must be poured into some container below it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvenDistributionHeuristic;

impl Heuristic for EvenDistributionHeuristic {
    fn estimate(&self, state: &State) -> u64 {
        if state.is_empty() {
            return 0;
        }
        let mean = (state.total() / state.len() as u64) as i64;
        let deviation: u64 = state
            .volumes()
            .iter()
            .map(|&v| i64::from(v).abs_diff(mean))
            .sum();
        deviation / 2
    }
}

/// Estimates the distance of one container from its target volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingleContainerHeuristic {
    index: usize,
    target: u32,
}

impl SingleContainerHeuristic {
    /// Creates an estimator for container `index` reaching `target`.
    pub fn new(index: usize, target: u32) -> Self {
        Self { index, target }
    }
}

impl Heuristic for SingleContainerHeuristic {
    fn estimate(&self, state: &State) -> u64 {
        match state.get(self.index) {
            Some(volume) => u64::from(volume.abs_diff(self.target)),
            None => 0,
        }
    }
}

/// Estimates the distance of the total volume from a target total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TotalVolumeHeuristic {
    target: u64,
}

impl TotalVolumeHeuristic {
    /// Creates an estimator for the total volume reaching `target`.
    pub fn new(target: u64) -> Self {
        Self { target }
    }
}

impl Heuristic for TotalVolumeHeuristic {
    fn estimate(&self, state: &State) -> u64 {
        state.total().abs_diff(self.target)
    }
}
