//! Configuration loader and application settings.

use crate::errors::{AppError, Result};
use crate::loss::ScanStrategy;
use crate::models::PriceSeries;

/// How the binary prints the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `(buy, sell, loss)`
    #[default]
    Tuple,
    Json,
}

/// Consolidated application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Prices to scan (`PRICES`), defaults to the sample series.
    pub prices: PriceSeries,
    /// Output format (`OUTPUT_FORMAT`: tuple | json).
    pub output: OutputFormat,
    /// Scan strategy (`SCAN_STRATEGY`: brute | ordered).
    pub strategy: ScanStrategy,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prices = match lookup("PRICES") {
            Some(raw) => raw.parse()?,
            None => PriceSeries::sample(),
        };
        let output = match lookup("OUTPUT_FORMAT").as_deref().map(str::trim) {
            None | Some("") | Some("tuple") => OutputFormat::Tuple,
            Some("json") => OutputFormat::Json,
            Some(other) => {
                return Err(AppError::Config(format!(
                    "OUTPUT_FORMAT must be tuple or json, got {other:?}"
                )));
            }
        };
        let strategy = match lookup("SCAN_STRATEGY").as_deref().map(str::trim) {
            None | Some("") | Some("brute") => ScanStrategy::BruteForce,
            Some("ordered") => ScanStrategy::Ordered,
            Some(other) => {
                return Err(AppError::Config(format!(
                    "SCAN_STRATEGY must be brute or ordered, got {other:?}"
                )));
            }
        };
        Ok(Self {
            prices,
            output,
            strategy,
        })
    }
}
