//! Opaque currency identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque currency identifier, e.g. `"USD"` or `"CHF"`.
///
/// The crate owns no catalog of currencies: callers supply whatever codes
/// they use, and two identifiers name the same currency exactly when their
/// codes match by value. Identity never enters into it, so independently
/// constructed tokens with equal codes compare equal.
///
/// # Example
///
/// ```rust
/// use monex::types::Currency;
///
/// let usd = Currency::new("USD");
/// assert_eq!(usd, Currency::from("USD"));
/// assert_eq!(usd.code(), "USD");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency(String);

impl Currency {
    /// Creates a currency identifier from a code.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the underlying code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
