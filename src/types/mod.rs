//! Domain types for the monetary expression algebra.
//!
//! This module provides type-safe representations of the core concepts:
//!
//! - [`Currency`]: Opaque, caller-supplied currency identifier
//! - [`Money`]: A concrete amount in one currency (terminal expression)
//! - [`Sum`]: The addition of two sub-expressions (composite expression)
//! - [`Expression`]: The closed union over the two expression variants
//! - [`CurrencyPair`]: Ordered (from, to) key for rate lookups

mod currency;
mod expression;
mod money;
mod pair;
mod sum;

pub use currency::Currency;
pub use expression::Expression;
pub use money::Money;
pub use pair::CurrencyPair;
pub use sum::Sum;
