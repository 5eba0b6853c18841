//! The closed expression variant set.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

use super::{Currency, Money, Sum};
use crate::bank::Bank;
use crate::error::MonexResult;

/// A monetary expression: either a terminal [`Money`] value or a composite
/// [`Sum`] of two sub-expressions.
///
/// The variant set is closed: every operation matches exhaustively over the
/// two variants, so a third variant cannot slip through reduction unchecked.
/// Expressions are immutable; sharing a sub-expression across several trees
/// is safe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expression {
    /// A terminal monetary value.
    Money(Money),
    /// A composite sum of two sub-expressions.
    Sum(Box<Sum>),
}

impl Expression {
    /// Collapses this expression to a single [`Money`] in currency `to`.
    pub fn reduce(&self, bank: &Bank, to: &Currency) -> MonexResult<Money> {
        match self {
            Expression::Money(money) => money.reduce(bank, to),
            Expression::Sum(sum) => sum.reduce(bank, to),
        }
    }

    /// Multiplies every leaf amount by `multiplier`, preserving shape.
    #[must_use]
    pub fn scale(&self, multiplier: i64) -> Expression {
        match self {
            Expression::Money(money) => money.scale(multiplier).into(),
            Expression::Sum(sum) => sum.scale(multiplier).into(),
        }
    }

    /// Combines this expression with another into a [`Sum`].
    pub fn combine(self, other: impl Into<Expression>) -> Expression {
        Sum::new(self, other.into()).into()
    }
}

impl From<Money> for Expression {
    fn from(money: Money) -> Self {
        Expression::Money(money)
    }
}

impl From<Sum> for Expression {
    fn from(sum: Sum) -> Self {
        Expression::Sum(Box::new(sum))
    }
}

impl<T: Into<Expression>> Add<T> for Expression {
    type Output = Expression;

    fn add(self, other: T) -> Expression {
        self.combine(other)
    }
}

impl Mul<i64> for Expression {
    type Output = Expression;

    fn mul(self, multiplier: i64) -> Expression {
        self.scale(multiplier)
    }
}
