//! Money: a concrete amount in one currency.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

use super::{Currency, Expression, Sum};
use crate::bank::Bank;
use crate::error::MonexResult;

/// A concrete integer amount in one currency.
///
/// `Money` is the terminal variant of [`Expression`]: every expression tree
/// bottoms out in `Money` leaves, and reducing any tree yields one `Money`
/// in the requested currency. Instances are immutable and compare by value
/// on `(amount, currency)`.
///
/// # Example
///
/// ```rust
/// use monex::prelude::*;
///
/// let five = Money::new(5, Currency::from("USD"));
/// assert_eq!(five.scale(2), Money::new(10, Currency::from("USD")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    /// Amount in minor units of the currency
    amount: i64,
    /// Currency of the amount
    currency: Currency,
}

impl Money {
    /// Creates a new monetary value.
    #[must_use]
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Returns the amount.
    #[must_use]
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Returns the currency.
    #[must_use]
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Converts this value into currency `to` using the bank's rate table.
    ///
    /// The amount is divided by the looked-up rate with truncating integer
    /// division. When `to` equals this value's currency the implicit
    /// identity rate of 1 applies and the quantity passes through unchanged.
    pub fn reduce(&self, bank: &Bank, to: &Currency) -> MonexResult<Money> {
        let rate = bank.rate(&self.currency, to)?;
        Ok(Money::new(self.amount / rate, to.clone()))
    }

    /// Returns a new value with the amount multiplied by `multiplier`.
    #[must_use]
    pub fn scale(&self, multiplier: i64) -> Money {
        Money::new(self.amount * multiplier, self.currency.clone())
    }

    /// Combines this value with another expression into a [`Sum`].
    pub fn combine(self, other: impl Into<Expression>) -> Expression {
        Sum::new(self.into(), other.into()).into()
    }
}

/// The textual form `Money{amount=3, currency='USD'}`.
///
/// Consumers assert on this literal form, so it is a contract rather than
/// an incidental debug string.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Money{{amount={}, currency='{}'}}",
            self.amount, self.currency
        )
    }
}

impl Add for Money {
    type Output = Expression;

    fn add(self, other: Money) -> Expression {
        self.combine(other)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, multiplier: i64) -> Money {
        self.scale(multiplier)
    }
}
