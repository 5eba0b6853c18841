//! Property-based validation of the expression algebra.
//!
//! These properties pin down the observable contract: scaling arithmetic,
//! the reduced-currency invariant, and the identity/directedness rules of
//! the rate table.

#[cfg(test)]
mod algebra_properties {
    use crate::prelude::*;
    use proptest::prelude::*;

    /// Builds a left-leaning sum tree over same-currency leaves.
    fn tree(amounts: &[i64], currency: &Currency) -> Expression {
        let mut leaves = amounts
            .iter()
            .map(|&a| Expression::from(Money::new(a, currency.clone())));
        let first = leaves.next().expect("at least one leaf");
        leaves.fold(first, Expression::combine)
    }

    fn currency_code() -> impl Strategy<Value = String> {
        "[A-Z]{3}"
    }

    proptest! {
        #[test]
        fn scaling_multiplies_amount_and_preserves_currency(
            amount in -1_000_000i64..1_000_000,
            multiplier in -1_000i64..1_000,
            code in currency_code(),
        ) {
            let money = Money::new(amount, Currency::from(code.as_str()));
            let scaled = money.scale(multiplier);
            prop_assert_eq!(scaled.amount(), amount * multiplier);
            prop_assert_eq!(scaled.currency(), &Currency::from(code.as_str()));
        }

        #[test]
        fn reducing_to_shared_leaf_currency_sums_amounts(
            amounts in prop::collection::vec(-10_000i64..10_000, 1..16),
            code in currency_code(),
        ) {
            let currency = Currency::from(code.as_str());
            let bank = Bank::new();
            let reduced = bank.reduce(&tree(&amounts, &currency), &currency).unwrap();
            prop_assert_eq!(reduced.currency(), &currency);
            prop_assert_eq!(reduced.amount(), amounts.iter().sum::<i64>());
        }

        #[test]
        fn identity_rate_needs_no_registration(code in currency_code()) {
            let bank = Bank::new();
            let currency = Currency::from(code.as_str());
            prop_assert_eq!(bank.rate(&currency, &currency).unwrap(), 1);
        }

        #[test]
        fn registered_rates_are_directed(
            from in currency_code(),
            to in currency_code(),
            rate in 1i64..10_000,
        ) {
            prop_assume!(from != to);
            let (from, to) = (Currency::from(from.as_str()), Currency::from(to.as_str()));
            let mut bank = Bank::new();
            bank.add_rate(from.clone(), to.clone(), rate);
            prop_assert_eq!(bank.rate(&from, &to).unwrap(), rate);
            prop_assert!(bank.rate(&to, &from).is_err());
        }

        #[test]
        fn scaling_distributes_over_sums(
            a in -10_000i64..10_000,
            b in -10_000i64..10_000,
            multiplier in -100i64..100,
            code in currency_code(),
        ) {
            let currency = Currency::from(code.as_str());
            let bank = Bank::new();
            let sum = Money::new(a, currency.clone()).combine(Money::new(b, currency.clone()));
            let reduced = bank.reduce(&sum.scale(multiplier), &currency).unwrap();
            prop_assert_eq!(reduced.amount(), (a + b) * multiplier);
        }
    }
}
