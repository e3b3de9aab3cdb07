//! Solution replay.
//!
//! Recomputes every intermediate state along a transfer path. Consumers
//! that render or export a solution (out of scope here) only need this pure
//! recomputation; nothing feeds back into the engine.

use decant_core::{State, Transfer};

/// Replays `path` from `start`, returning every state along the way.
///
/// The result always begins with `start` and has `path.len() + 1` entries.
///
/// # Example
///
/// ```
/// use decant_core::{State, Transfer};
/// use decant_solver::replay;
///
/// let states = replay(&State::new(vec![5, 0]), &[Transfer::new(0, 1, 3)]);
/// assert_eq!(states.len(), 2);
/// assert_eq!(states[1].volumes(), &[2, 3]);
/// ```
pub fn replay(start: &State, path: &[Transfer]) -> Vec<State> {
    let mut states = Vec::with_capacity(path.len() + 1);
    let mut current = start.clone();
    states.push(current.clone());
    for transfer in path {
        current = current.apply(transfer);
        states.push(current.clone());
    }
    states
}
