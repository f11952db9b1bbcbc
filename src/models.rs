//! Shared data structures used throughout the application.

use crate::errors::{AppError, Result};
use std::ops::Deref;
use std::str::FromStr;

/// Prices from the sample exercise, used when nothing else is configured.
pub const SAMPLE_PRICES: [f64; 5] = [20.0, 15.0, 7.0, 2.0, 13.0];

/// Ordered, immutable series of finite prices.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriceSeries(Vec<f64>);

impl PriceSeries {
    pub fn new(prices: Vec<f64>) -> Result<Self> {
        if let Some((idx, &value)) = prices.iter().enumerate().find(|(_, p)| !p.is_finite()) {
            return Err(AppError::NonFinitePrice {
                position: idx + 1,
                value,
            });
        }
        Ok(Self(prices))
    }

    pub fn sample() -> Self {
        Self(SAMPLE_PRICES.to_vec())
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl Deref for PriceSeries {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

/// Parses comma and/or whitespace separated prices, e.g. `"20, 15 7,2"`.
/// Blank input yields an empty series.
impl FromStr for PriceSeries {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        let prices = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|tok| !tok.is_empty())
            .map(|tok| {
                tok.parse::<f64>().map_err(|source| AppError::ParseFloat {
                    token: tok.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        Self::new(prices)
    }
}
