//! Tests for the policy domain

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money};
use domain_policy::{CoverageItem, Exclusion, Policy, PolicyStatus, PolicyType};

fn usd(amount: rust_decimal::Decimal) -> Money {
    Money::new(amount, Currency::USD)
}

fn health_policy() -> Policy {
    let mut policy = Policy::new(
        "HP-2024-0042",
        PolicyType::Health,
        "John Doe",
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
    )
    .unwrap();

    policy.add_coverage(
        CoverageItem::new(
            "hospitalization",
            "In-patient hospital room and board",
            usd(dec!(50000)),
            usd(dec!(500)),
            dec!(20),
        )
        .unwrap()
        .with_annual_aggregate(usd(dec!(100000)))
        .with_waiting_period(30),
    );
    policy.add_coverage(
        CoverageItem::new(
            "surgery",
            "Surgical procedures",
            usd(dec!(75000)),
            usd(dec!(1000)),
            dec!(10),
        )
        .unwrap()
        .with_preauthorization(),
    );

    policy.add_exclusion(
        Exclusion::new(
            "pre-existing conditions",
            "Conditions diagnosed within 24 months before policy start",
        )
        .with_keywords(vec!["pre-existing".to_string(), "chronic".to_string()])
        .with_exceptions(vec![
            "Conditions disclosed during application and accepted".to_string()
        ]),
    );
    policy.add_exclusion(
        Exclusion::new("fraudulent claims", "Claims arising from fraudulent acts").absolute(),
    );

    policy
}

#[test]
fn test_applicable_coverage_matches_claim_type() {
    let policy = health_policy();

    let matches = policy.applicable_coverage("hospitalization");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].limit_amount.amount(), dec!(50000));

    let matches = policy.applicable_coverage("Surgery");
    assert_eq!(matches.len(), 1);
    assert!(matches[0].requires_preauthorization);

    assert!(policy.applicable_coverage("theft").is_empty());
}

#[test]
fn test_candidate_exclusions_by_keyword() {
    let policy = health_policy();

    let candidates = policy.candidate_exclusions("flare-up of a chronic back condition");
    // The keyword exclusion matches, and the keyword-less absolute one is
    // always a candidate.
    assert_eq!(candidates.len(), 2);

    let candidates = policy.candidate_exclusions("broken arm from a fall");
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].category, "fraudulent claims");
}

#[test]
fn test_in_force_bounds() {
    let policy = health_policy();

    assert!(policy.in_force_on(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
    assert!(policy.in_force_on(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()));
    assert!(!policy.in_force_on(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()));
}

#[test]
fn test_cancelled_policy_not_in_force() {
    let mut policy = health_policy();
    policy.status = PolicyStatus::Cancelled;

    assert!(!policy.in_force_on(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()));
}
