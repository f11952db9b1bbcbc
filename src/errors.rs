use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse float error for {token:?}: {source}")]
    ParseFloat {
        token: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("Non-finite price {value} at position {position}")]
    NonFinitePrice { position: usize, value: f64 },

    #[error("Serialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
