use super::types::{LossOutcome, ScanStrategy};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

/// Find the buy/sell pair with the smallest strictly positive loss.
///
/// Scans every `(i, j)` with `i < j` in order (`i` ascending, then `j`).
/// A pair qualifies when `prices[j] < prices[i]`; it replaces the current
/// best only when its loss is strictly smaller, so the first pair reaching
/// the minimum wins.
///
/// # Returns
/// `LossOutcome::Found` with 1-based positions, or `LossOutcome::NotFound`
/// when the series is non-decreasing or shorter than two prices.
pub fn find_min_loss(prices: &[f64]) -> LossOutcome {
    let mut best = LossOutcome::NotFound;
    for (i, &buy_price) in prices.iter().enumerate() {
        for (offset, &sell_price) in prices[i + 1..].iter().enumerate() {
            if sell_price < buy_price && buy_price - sell_price < best.loss() {
                best = LossOutcome::Found {
                    buy: i + 1,
                    sell: i + offset + 2,
                    loss: buy_price - sell_price,
                };
            }
        }
    }
    best
}

/// Same outcome as [`find_min_loss`] in O(n log n).
///
/// For each sell position the best partner is the smallest earlier price
/// strictly above it, taken at its earliest index. The winner is the
/// lexicographic minimum of `(loss, buy, sell)`.
///
/// Agrees with the brute-force scan whenever distinct prices give distinct
/// losses against the same sell price (always true for integer-valued
/// prices below 2^53).
pub fn find_min_loss_ordered(prices: &[f64]) -> LossOutcome {
    let mut earlier: BTreeMap<PriceKey, usize> = BTreeMap::new();
    let mut best: Option<(f64, usize, usize)> = None;

    for (j, &sell_price) in prices.iter().enumerate() {
        let Some(key) = PriceKey::new(sell_price) else {
            continue;
        };
        if let Some((above, &i)) = earlier.range((Excluded(key), Unbounded)).next() {
            let loss = above.0 - sell_price;
            let better = match best {
                None => true,
                Some((best_loss, bi, bj)) => match loss.total_cmp(&best_loss) {
                    Ordering::Less => true,
                    Ordering::Equal => (i, j) < (bi, bj),
                    Ordering::Greater => false,
                },
            };
            if better && loss < f64::INFINITY {
                best = Some((loss, i, j));
            }
        }
        earlier.entry(key).or_insert(j);
    }

    match best {
        Some((loss, i, j)) => LossOutcome::Found {
            buy: i + 1,
            sell: j + 1,
            loss,
        },
        None => LossOutcome::NotFound,
    }
}

/// Run the scan selected by `strategy`.
pub fn scan(prices: &[f64], strategy: ScanStrategy) -> LossOutcome {
    let outcome = match strategy {
        ScanStrategy::BruteForce => find_min_loss(prices),
        ScanStrategy::Ordered => find_min_loss_ordered(prices),
    };
    tracing::debug!(len = prices.len(), ?strategy, %outcome, "[SCAN] done");
    outcome
}

/// Totally ordered price used as a map key. NaN is rejected and `-0.0`
/// folds into `0.0` so equal prices share one key.
#[derive(Debug, Clone, Copy)]
struct PriceKey(f64);

impl PriceKey {
    fn new(price: f64) -> Option<Self> {
        if price.is_nan() {
            None
        } else {
            Some(Self(price + 0.0))
        }
    }
}

impl PartialEq for PriceKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PriceKey {}

impl PartialOrd for PriceKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PriceKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}
