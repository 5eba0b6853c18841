//! Error types for the Monex library.

use crate::types::Currency;
use thiserror::Error;

/// A specialized Result type for Monex operations.
pub type MonexResult<T> = Result<T, MonexError>;

/// The main error type for Monex operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MonexError {
    /// No exchange rate is registered for an ordered currency pair.
    ///
    /// Rates are directed: a registered CHF→USD rate says nothing about
    /// USD→CHF. The identity pair (c, c) never produces this error.
    #[error("No exchange rate registered for {from} -> {to}")]
    MissingRate {
        /// Source currency of the failed lookup.
        from: Currency,
        /// Target currency of the failed lookup.
        to: Currency,
    },
}

impl MonexError {
    /// Creates a missing rate error.
    #[must_use]
    pub fn missing_rate(from: impl Into<Currency>, to: impl Into<Currency>) -> Self {
        Self::MissingRate {
            from: from.into(),
            to: to.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MonexError::missing_rate("CHF", "USD");
        assert_eq!(
            err.to_string(),
            "No exchange rate registered for CHF -> USD"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            MonexError::missing_rate("CHF", "USD"),
            MonexError::missing_rate("CHF", "USD")
        );
        assert_ne!(
            MonexError::missing_rate("CHF", "USD"),
            MonexError::missing_rate("USD", "CHF")
        );
    }
}
