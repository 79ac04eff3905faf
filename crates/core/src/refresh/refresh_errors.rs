use coinfolio_market_data::{MarketDataError, RetryClass};
use thiserror::Error;

use crate::errors::CalculatorError;

/// Why a refresh cycle published nothing.
#[derive(Error, Debug)]
pub enum RefreshError {
    /// The batched price or 24h stats request failed.
    #[error(transparent)]
    MarketData(#[from] MarketDataError),

    /// Totals could not be computed, e.g. no holding resolved this cycle.
    #[error(transparent)]
    Calculation(#[from] CalculatorError),
}

impl RefreshError {
    pub fn retry_class(&self) -> RetryClass {
        match self {
            RefreshError::MarketData(e) => e.retry_class(),
            RefreshError::Calculation(_) => RetryClass::NextCycle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_class_follows_market_data_error() {
        let err = RefreshError::from(MarketDataError::Timeout {
            provider: "BINANCE".to_string(),
        });
        assert_eq!(err.retry_class(), RetryClass::NextCycle);

        let err = RefreshError::from(MarketDataError::SymbolNotFound("XUSDT".to_string()));
        assert_eq!(err.retry_class(), RetryClass::Never);
    }

    #[test]
    fn test_display_is_transparent() {
        let err = RefreshError::from(CalculatorError::division_by_zero("total pnl percentage"));
        assert_eq!(
            err.to_string(),
            "Division by zero while computing total pnl percentage"
        );
    }
}
