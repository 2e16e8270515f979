//! Comprehensive unit tests for the Money module
//!
//! Tests cover money creation, arithmetic operations, currency handling,
//! rate application, and edge cases.

use core_kernel::{Currency, Money, MoneyError, Rate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_creates_money_with_correct_amount() {
        let m = Money::new(dec!(100.50), Currency::USD);
        assert_eq!(m.amount(), dec!(100.50));
        assert_eq!(m.currency(), Currency::USD);
    }

    #[test]
    fn test_new_rounds_to_four_decimal_places() {
        let m = Money::new(dec!(100.123456789), Currency::USD);
        assert_eq!(m.amount(), dec!(100.1235));
    }

    #[test]
    fn test_from_minor_converts_cents_correctly() {
        let m = Money::from_minor(10050, Currency::USD);
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_from_minor_respects_currency_decimal_places() {
        // JPY has no minor unit
        let m = Money::from_minor(10050, Currency::JPY);
        assert_eq!(m.amount(), dec!(10050));
    }

    #[test]
    fn test_zero_is_zero() {
        let m = Money::zero(Currency::EUR);
        assert!(m.is_zero());
        assert!(!m.is_positive());
        assert!(!m.is_negative());
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_checked_add_same_currency() {
        let a = Money::new(dec!(100.00), Currency::USD);
        let b = Money::new(dec!(50.25), Currency::USD);
        assert_eq!(a.checked_add(&b).unwrap().amount(), dec!(150.25));
    }

    #[test]
    fn test_checked_sub_can_go_negative() {
        let a = Money::new(dec!(100.00), Currency::USD);
        let b = Money::new(dec!(150.00), Currency::USD);
        let diff = a.checked_sub(&b).unwrap();
        assert!(diff.is_negative());
        assert_eq!(diff.amount(), dec!(-50.00));
    }

    #[test]
    fn test_checked_sub_to_zero_floors() {
        let a = Money::new(dec!(100.00), Currency::USD);
        let b = Money::new(dec!(150.00), Currency::USD);
        let diff = a.checked_sub_to_zero(&b).unwrap();
        assert!(diff.is_zero());
    }

    #[test]
    fn test_checked_sub_to_zero_keeps_positive_difference() {
        let a = Money::new(dec!(150.00), Currency::USD);
        let b = Money::new(dec!(100.00), Currency::USD);
        assert_eq!(a.checked_sub_to_zero(&b).unwrap().amount(), dec!(50.00));
    }

    #[test]
    fn test_checked_min_picks_smaller() {
        let claimed = Money::new(dec!(80000), Currency::USD);
        let limit = Money::new(dec!(50000), Currency::USD);
        assert_eq!(claimed.checked_min(&limit).unwrap(), limit);
    }

    #[test]
    fn test_multiply_by_scalar() {
        let m = Money::new(dec!(100.00), Currency::USD);
        assert_eq!(m.multiply(dec!(0.2)).amount(), dec!(20.00));
        assert_eq!((m * dec!(3)).amount(), dec!(300.00));
    }

    #[test]
    fn test_currency_mismatch_is_an_error() {
        let usd = Money::new(dec!(100.00), Currency::USD);
        let eur = Money::new(dec!(100.00), Currency::EUR);

        assert!(matches!(
            usd.checked_add(&eur),
            Err(MoneyError::CurrencyMismatch(_, _))
        ));
        assert!(usd.checked_sub(&eur).is_err());
        assert!(usd.checked_sub_to_zero(&eur).is_err());
        assert!(usd.checked_min(&eur).is_err());
    }
}

mod rounding {
    use super::*;

    #[test]
    fn test_round_to_currency_two_places_for_usd() {
        let m = Money::new(dec!(150.0495), Currency::USD);
        assert_eq!(m.round_to_currency().amount(), dec!(150.05));
    }

    #[test]
    fn test_round_to_currency_zero_places_for_jpy() {
        let m = Money::new(dec!(1000.4), Currency::JPY);
        assert_eq!(m.round_to_currency().amount(), dec!(1000));
    }
}

mod rates {
    use super::*;

    #[test]
    fn test_rate_from_percentage() {
        let rate = Rate::from_percentage(dec!(20));
        assert_eq!(rate.as_decimal(), dec!(0.2));
        assert_eq!(rate.as_percentage(), dec!(20));
    }

    #[test]
    fn test_rate_apply_computes_copay() {
        let rate = Rate::from_percentage(dec!(20));
        let after_deductible = Money::new(dec!(14500), Currency::USD);
        assert_eq!(rate.apply(&after_deductible).amount(), dec!(2900));
    }

    #[test]
    fn test_zero_rate_yields_zero() {
        let rate = Rate::new(Decimal::ZERO);
        let m = Money::new(dec!(500), Currency::USD);
        assert!(rate.apply(&m).is_zero());
    }
}

mod display {
    use super::*;

    #[test]
    fn test_display_uses_currency_symbol_and_places() {
        let m = Money::new(dec!(11600), Currency::USD);
        assert_eq!(m.to_string(), "$ 11600.00");

        let yen = Money::new(dec!(1000), Currency::JPY);
        assert_eq!(yen.to_string(), "¥ 1000");
    }
}
