//! # Monex
//!
//! A small algebra of multi-currency monetary values.
//!
//! This crate provides the building blocks for composing monetary amounts in
//! different currencies and collapsing the result to a single currency:
//!
//! - **Types**: Domain-specific types like [`Money`], [`Sum`], [`Currency`]
//! - **Expressions**: A closed two-variant expression tree built with
//!   `combine` (addition) and `scale` (multiplication)
//! - **Bank**: The exchange-rate table that reduces any expression to one
//!   concrete amount in a requested target currency
//!
//! ## Design Philosophy
//!
//! - **Closed Variant Set**: an expression is either a `Money` leaf or a
//!   `Sum`, and every operation matches exhaustively over the two
//! - **Value Semantics**: every domain type is immutable and compares by value
//! - **No Hidden State**: the rate table is always an explicit parameter,
//!   never a process-wide singleton
//!
//! ## Example
//!
//! ```rust
//! use monex::prelude::*;
//!
//! let mut bank = Bank::new();
//! bank.add_rate(Currency::from("CHF"), Currency::from("USD"), 2);
//!
//! let five_bucks = Money::new(5, Currency::from("USD"));
//! let ten_francs = Money::new(10, Currency::from("CHF"));
//!
//! let sum = five_bucks.combine(ten_francs);
//! let reduced = bank.reduce(&sum, &Currency::from("USD")).unwrap();
//! assert_eq!(reduced, Money::new(10, Currency::from("USD")));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod bank;
pub mod error;
pub mod types;

#[cfg(test)]
mod validation_tests;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bank::Bank;
    pub use crate::error::{MonexError, MonexResult};
    pub use crate::types::{Currency, CurrencyPair, Expression, Money, Sum};
}

// Re-export commonly used types at crate root
pub use bank::Bank;
pub use error::{MonexError, MonexResult};
pub use types::{Currency, CurrencyPair, Expression, Money, Sum};
