pub mod minimizer;
pub mod types;

pub use minimizer::{find_min_loss, find_min_loss_ordered, scan};
pub use types::{LossOutcome, ScanStrategy};
