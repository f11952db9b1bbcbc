//! Miscellaneous helper utilities.

use crate::config::OutputFormat;
use crate::errors::Result;
use crate::loss::LossOutcome;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize `tracing` subscriber with env-based filter.
///
/// If `RUST_LOG` is not set, defaults to `info` level.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

/// Render an outcome for stdout.
pub fn render_outcome(outcome: &LossOutcome, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Tuple => Ok(outcome.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(outcome)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuple_matches_display() {
        let found = LossOutcome::Found {
            buy: 2,
            sell: 5,
            loss: 2.0,
        };
        assert_eq!(render_outcome(&found, OutputFormat::Tuple).unwrap(), "(2, 5, 2)");
        assert_eq!(
            render_outcome(&LossOutcome::NotFound, OutputFormat::Tuple).unwrap(),
            "(0, 0, inf)"
        );
    }

    #[test]
    fn json_is_tagged_by_status() {
        let found = LossOutcome::Found {
            buy: 1,
            sell: 3,
            loss: 0.5,
        };
        assert_eq!(
            render_outcome(&found, OutputFormat::Json).unwrap(),
            r#"{"status":"found","buy":1,"sell":3,"loss":0.5}"#
        );
        assert_eq!(
            render_outcome(&LossOutcome::NotFound, OutputFormat::Json).unwrap(),
            r#"{"status":"not_found"}"#
        );
    }
}
