//! Property-Based Test Generators
//!
//! Proptest strategies for generating random test data that maintains
//! domain invariants.

use core_kernel::{Currency, Money};
use domain_claims::ClaimType;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating valid Currency values
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::USD),
        Just(Currency::EUR),
        Just(Currency::GBP),
        Just(Currency::INR),
        Just(Currency::JPY),
    ]
}

/// Strategy for generating non-negative claim amounts in minor units
pub fn claim_amount_minor_strategy() -> impl Strategy<Value = i64> {
    0i64..10_000_000_00i64
}

/// Strategy for generating non-negative USD Money values
pub fn usd_money_strategy() -> impl Strategy<Value = Money> {
    claim_amount_minor_strategy().prop_map(|amount| Money::from_minor(amount, Currency::USD))
}

/// Strategy for generating valid copay percentages (0 to 100)
pub fn copay_percentage_strategy() -> impl Strategy<Value = Decimal> {
    (0u32..10000u32).prop_map(|n| Decimal::new(n as i64, 2))
}

/// Strategy for generating confidence scores in [0, 1]
pub fn confidence_strategy() -> impl Strategy<Value = f64> {
    0.0f64..=1.0f64
}

/// Strategy for generating claim types
pub fn claim_type_strategy() -> impl Strategy<Value = ClaimType> {
    prop_oneof![
        Just(ClaimType::Medical),
        Just(ClaimType::Hospitalization),
        Just(ClaimType::Surgery),
        Just(ClaimType::Medication),
        Just(ClaimType::Accident),
        Just(ClaimType::PropertyDamage),
        Just(ClaimType::Theft),
        Just(ClaimType::Liability),
        Just(ClaimType::DeathBenefit),
    ]
}

/// Strategy for generating incident descriptions of varying specificity
pub fn incident_description_strategy() -> impl Strategy<Value = String> {
    "[a-z ]{10,200}"
}
