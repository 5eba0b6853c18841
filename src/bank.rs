//! Bank: the exchange-rate table that drives reduction.

use log::{debug, trace};
use std::collections::HashMap;

use crate::error::{MonexError, MonexResult};
use crate::types::{Currency, CurrencyPair, Expression, Money};

/// Owner of an exchange-rate table, and the entry point for reducing
/// expressions.
///
/// Rates are directed integer divisors keyed by ordered [`CurrencyPair`]:
/// registering a CHF→USD rate of 2 means 2 CHF reduce to 1 USD, and implies
/// nothing about USD→CHF. The identity rate `rate(c, c) == 1` holds for every
/// currency without registration.
///
/// A `Bank` is an explicit value, not global state: independent rate tables
/// can coexist, and each reduction names the table it uses. The table is
/// configure-then-read; mutation is not synchronized.
///
/// # Example
///
/// ```rust
/// use monex::prelude::*;
///
/// let mut bank = Bank::new();
/// bank.add_rate(Currency::from("CHF"), Currency::from("USD"), 2);
///
/// let francs = Money::new(2, Currency::from("CHF"));
/// let reduced = bank.reduce(&francs.into(), &Currency::from("USD")).unwrap();
/// assert_eq!(reduced, Money::new(1, Currency::from("USD")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Bank {
    rates: HashMap<CurrencyPair, i64>,
}

impl Bank {
    /// Creates a bank with an empty rate table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the rate for the ordered pair `(from, to)`, overwriting any
    /// prior rate for that pair. There is no removal operation.
    pub fn add_rate(&mut self, from: Currency, to: Currency, rate: i64) {
        debug!("registering rate {}/{} = {}", from, to, rate);
        self.rates.insert(CurrencyPair::new(from, to), rate);
    }

    /// Returns the conversion rate from `from` to `to`.
    ///
    /// Identical currencies always convert at 1, ignoring any registered
    /// entry for the pair.
    ///
    /// # Errors
    ///
    /// Returns [`MonexError::MissingRate`] when the currencies differ and no
    /// rate was registered for the ordered pair.
    pub fn rate(&self, from: &Currency, to: &Currency) -> MonexResult<i64> {
        if from == to {
            return Ok(1);
        }
        self.rates
            .get(&CurrencyPair::new(from.clone(), to.clone()))
            .copied()
            .ok_or_else(|| MonexError::MissingRate {
                from: from.clone(),
                to: to.clone(),
            })
    }

    /// Reduces `expression` to a single [`Money`] in currency `to`.
    ///
    /// Pure delegation to the expression; this is the bank-facing entry
    /// point so callers never thread a foreign bank through a tree by hand.
    pub fn reduce(&self, expression: &Expression, to: &Currency) -> MonexResult<Money> {
        trace!("reducing expression to {}", to);
        expression.reduce(self, to)
    }
}
