//! Core error types for the Coinfolio engine.
//!
//! Calculation failures are reported as tagged errors instead of letting
//! NaN or infinite values leak into published numbers.

use thiserror::Error;

use coinfolio_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the portfolio engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Portfolio calculation failed: {0}")]
    Calculation(#[from] CalculatorError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors that occur during portfolio calculations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// A percentage was requested against a zero baseline.
    #[error("Division by zero while computing {context}")]
    DivisionByZero { context: String },

    /// A result does not fit in a `Decimal`.
    #[error("Numeric overflow while computing {context}")]
    Overflow { context: String },
}

impl CalculatorError {
    pub fn division_by_zero(context: impl Into<String>) -> Self {
        Self::DivisionByZero {
            context: context.into(),
        }
    }

    pub fn overflow(context: impl Into<String>) -> Self {
        Self::Overflow {
            context: context.into(),
        }
    }
}

/// Validation errors for configured holdings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Duplicate symbol '{0}' in registry")]
    DuplicateSymbol(String),

    #[error("{field} for {symbol} must be greater than zero")]
    NotPositive { symbol: String, field: &'static str },
}
