//! A single pour between two containers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single transfer: pour `amount` units from container `from` into
/// container `to`, at cost `weight`.
///
/// Under the default cost policy the weight equals the amount moved, so a
/// path's cumulative cost is the total volume poured. [`with_weight`]
/// overrides that for callers with a different cost metric.
///
/// [`with_weight`]: Transfer::with_weight
///
/// # Example
///
/// ```
/// use decant_core::Transfer;
///
/// let t = Transfer::new(0, 1, 3);
/// assert_eq!(t.weight, 3);
/// assert_eq!(
///     t.to_string(),
///     "Transfer 3 units from container 0 to container 1"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transfer {
    /// Index of the source container.
    pub from: usize,
    /// Index of the destination container.
    pub to: usize,
    /// Volume moved, always positive.
    pub amount: u32,
    /// Cost contribution of this transfer.
    pub weight: u64,
}

impl Transfer {
    /// Creates a transfer with the default weight-equals-amount cost policy.
    pub fn new(from: usize, to: usize, amount: u32) -> Self {
        debug_assert_ne!(from, to);
        debug_assert!(amount > 0);
        Self {
            from,
            to,
            amount,
            weight: u64::from(amount),
        }
    }

    /// Overrides the cost weight of this transfer.
    pub fn with_weight(mut self, weight: u64) -> Self {
        self.weight = weight;
        self
    }
}

impl fmt::Display for Transfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transfer {} units from container {} to container {}",
            self.amount, self.from, self.to
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weight_equals_amount() {
        let t = Transfer::new(2, 0, 7);
        assert_eq!(t.weight, 7);
    }

    #[test]
    fn test_with_weight() {
        let t = Transfer::new(0, 1, 4).with_weight(1);
        assert_eq!(t.amount, 4);
        assert_eq!(t.weight, 1);
    }

    #[test]
    fn test_display() {
        let t = Transfer::new(1, 2, 5);
        assert_eq!(
            t.to_string(),
            "Transfer 5 units from container 1 to container 2"
        );
    }
}
