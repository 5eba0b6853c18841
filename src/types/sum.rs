//! Sum: the addition of two sub-expressions.

use serde::{Deserialize, Serialize};

use super::{Currency, Expression, Money};
use crate::bank::Bank;
use crate::error::MonexResult;

/// The composite expression variant: two owned sub-expressions.
///
/// Both children are themselves [`Expression`]s, so sums nest to arbitrary
/// depth. Children are owned at construction and never reassigned; trees are
/// built bottom-up from immutable pieces, so no cycles can form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sum {
    /// Left operand
    augend: Expression,
    /// Right operand
    addend: Expression,
}

impl Sum {
    /// Creates a sum of two expressions.
    #[must_use]
    pub fn new(augend: Expression, addend: Expression) -> Self {
        Self { augend, addend }
    }

    /// Returns the left operand.
    #[must_use]
    pub fn augend(&self) -> &Expression {
        &self.augend
    }

    /// Returns the right operand.
    #[must_use]
    pub fn addend(&self) -> &Expression {
        &self.addend
    }

    /// Reduces both operands to currency `to` and adds the amounts.
    pub fn reduce(&self, bank: &Bank, to: &Currency) -> MonexResult<Money> {
        let augend = self.augend.reduce(bank, to)?;
        let addend = self.addend.reduce(bank, to)?;
        Ok(Money::new(augend.amount() + addend.amount(), to.clone()))
    }

    /// Scales both operands, preserving the sum structure.
    #[must_use]
    pub fn scale(&self, multiplier: i64) -> Sum {
        Sum::new(self.augend.scale(multiplier), self.addend.scale(multiplier))
    }

    /// Combines this sum with another expression into a larger [`Sum`].
    pub fn combine(self, other: impl Into<Expression>) -> Expression {
        Sum::new(self.into(), other.into()).into()
    }
}
