//! Error types for the Black-76 engine

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Input field named by a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Forward,
    Strike,
    TimeToExpiry,
    Rate,
    Volatility,
    MarketPrice,
    OptionType,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Forward => "forward",
            Field::Strike => "strike",
            Field::TimeToExpiry => "time_to_expiry",
            Field::Rate => "rate",
            Field::Volatility => "volatility",
            Field::MarketPrice => "market_price",
            Field::OptionType => "option_type",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rejected input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: Field,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: Field, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

#[derive(Error, Debug)]
pub enum Black76Error {
    #[error("Invalid input: {}", join_errors(.errors))]
    Validation { errors: Vec<ValidationError> },

    #[error(
        "Market price {market_price} outside attainable range [{lower}, {upper}] for any volatility"
    )]
    OutOfBounds {
        market_price: f64,
        lower: f64,
        upper: f64,
    },

    #[error(
        "Implied volatility did not converge after {iterations} iterations \
         (last vol {volatility}, residual {residual})"
    )]
    DidNotConverge {
        iterations: usize,
        volatility: f64,
        residual: f64,
    },

    #[error("Market data error: {0}")]
    Market(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Black76Result<T> = Result<T, Black76Error>;

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl Black76Error {
    pub fn invalid(field: Field, reason: impl Into<String>) -> Self {
        Self::Validation {
            errors: vec![ValidationError::new(field, reason)],
        }
    }

    pub fn market(msg: impl Into<String>) -> Self {
        Self::Market(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Fields rejected by validation, in the order they were checked
    pub fn fields(&self) -> Vec<Field> {
        match self {
            Self::Validation { errors } => errors.iter().map(|e| e.field).collect(),
            _ => Vec::new(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

impl From<serde_json::Error> for Black76Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}
