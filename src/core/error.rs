use thiserror::Error;

/// Failure while turning a raw cloud API payload into a normalized model.
#[derive(Error, Debug)]
pub enum MapperError {
    #[error("Missing field: {field}")]
    MissingField { field: &'static str },
    #[error("Metric '{metric}' not present in group")]
    MissingMetric { metric: String },
    #[error("Invalid amount '{value}': {source}")]
    InvalidAmount {
        value: String,
        #[source]
        source: rust_decimal::Error,
    },
    #[error("Amount overflow while adding {amount}")]
    AmountOverflow { amount: rust_decimal::Decimal },
    #[error("Expected {expected} group keys, got {keys:?}")]
    UnexpectedKeyArity { expected: usize, keys: Vec<String> },
    #[error("Failed to parse response: {0}")]
    Json(#[from] serde_json::Error),
}

impl MapperError {
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }
}
