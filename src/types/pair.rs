//! Ordered currency pair used as the rate-table key.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Currency;

/// An ordered `(from, to)` currency pair.
///
/// The pair is directed, not symmetric: `(CHF, USD)` and `(USD, CHF)` are
/// distinct keys. Equality and hashing are structural over both components
/// in order, which is what lets the pair serve as a `HashMap` key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    /// Source currency
    from: Currency,
    /// Target currency
    to: Currency,
}

impl CurrencyPair {
    /// Creates an ordered pair.
    #[must_use]
    pub fn new(from: Currency, to: Currency) -> Self {
        Self { from, to }
    }

    /// Returns the source currency.
    #[must_use]
    pub fn from_currency(&self) -> &Currency {
        &self.from
    }

    /// Returns the target currency.
    #[must_use]
    pub fn to_currency(&self) -> &Currency {
        &self.to
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.from, self.to)
    }
}
