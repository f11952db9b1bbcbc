use serde::Serialize;
use std::fmt;

/// Outcome of a minimum-loss scan over a price series.
///
/// Positions are 1-based and `buy < sell` always holds for `Found`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LossOutcome {
    Found { buy: usize, sell: usize, loss: f64 },
    NotFound,
}

impl LossOutcome {
    /// Minimal loss, or `f64::INFINITY` when no pair qualifies.
    pub fn loss(&self) -> f64 {
        match self {
            LossOutcome::Found { loss, .. } => *loss,
            LossOutcome::NotFound => f64::INFINITY,
        }
    }

    /// 1-based `(buy, sell)` positions of the winning pair.
    pub fn positions(&self) -> Option<(usize, usize)> {
        match self {
            LossOutcome::Found { buy, sell, .. } => Some((*buy, *sell)),
            LossOutcome::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, LossOutcome::Found { .. })
    }

    /// Flat triple view. `NotFound` becomes the `(0, 0, inf)` sentinel.
    pub fn as_tuple(&self) -> (usize, usize, f64) {
        match self {
            LossOutcome::Found { buy, sell, loss } => (*buy, *sell, *loss),
            LossOutcome::NotFound => (0, 0, f64::INFINITY),
        }
    }
}

impl fmt::Display for LossOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (buy, sell, loss) = self.as_tuple();
        write!(f, "({}, {}, {})", buy, sell, loss)
    }
}

/// Strategy used to search for the minimal-loss pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanStrategy {
    /// Every `(i, j)` pair, O(n²).
    #[default]
    BruteForce,
    /// Sorted map of earlier prices, O(n log n).
    Ordered,
}
