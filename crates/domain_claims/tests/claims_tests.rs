//! Tests for the claims domain

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money, PolicyId};
use domain_claims::{Claim, ClaimError, ClaimStatus, ClaimType};

fn submitted_claim() -> Claim {
    Claim::submit(
        PolicyId::new_v7(),
        "John Doe",
        ClaimType::Hospitalization,
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        "Emergency appendectomy surgery due to acute appendicitis",
        Money::new(dec!(15000), Currency::USD),
    )
    .unwrap()
}

#[test]
fn test_claim_submit() {
    let claim = submitted_claim();

    assert_eq!(claim.status, ClaimStatus::Submitted);
    assert_eq!(claim.claim_type, ClaimType::Hospitalization);
    assert!(claim.claim_number.starts_with("CLM-"));
    assert!(claim.incident_location.is_none());
}

#[test]
fn test_negative_amount_rejected() {
    let result = Claim::submit(
        PolicyId::new_v7(),
        "John Doe",
        ClaimType::Theft,
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        "Laptop stolen from parked car",
        Money::new(dec!(-100), Currency::USD),
    );

    assert!(matches!(result, Err(ClaimError::InvalidAmount(_))));
}

#[test]
fn test_zero_amount_allowed() {
    let result = Claim::submit(
        PolicyId::new_v7(),
        "John Doe",
        ClaimType::Medical,
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        "Placeholder claim, invoices to follow",
        Money::zero(Currency::USD),
    );

    assert!(result.is_ok());
}

#[test]
fn test_status_happy_path_to_approved() {
    let mut claim = submitted_claim();

    claim.update_status(ClaimStatus::UnderReview).unwrap();
    claim.update_status(ClaimStatus::Validating).unwrap();
    claim.update_status(ClaimStatus::Approved).unwrap();
    claim.update_status(ClaimStatus::Closed).unwrap();

    assert!(claim.status.is_terminal());
}

#[test]
fn test_status_fraud_path() {
    let mut claim = submitted_claim();

    claim.update_status(ClaimStatus::UnderReview).unwrap();
    claim.update_status(ClaimStatus::Validating).unwrap();
    claim.update_status(ClaimStatus::FlaggedFraud).unwrap();
    claim.update_status(ClaimStatus::Investigating).unwrap();
    assert!(claim.update_status(ClaimStatus::Denied).is_ok());
}

#[test]
fn test_invalid_transition_rejected() {
    let mut claim = submitted_claim();

    // Submitted -> Approved skips review and validation
    let result = claim.update_status(ClaimStatus::Approved);
    assert!(matches!(
        result,
        Err(ClaimError::InvalidStatusTransition { .. })
    ));
    assert_eq!(claim.status, ClaimStatus::Submitted);
}

#[test]
fn test_denied_claim_can_be_appealed() {
    let mut claim = submitted_claim();

    claim.update_status(ClaimStatus::UnderReview).unwrap();
    claim.update_status(ClaimStatus::Validating).unwrap();
    claim.update_status(ClaimStatus::Denied).unwrap();
    assert!(claim.update_status(ClaimStatus::UnderReview).is_ok());
}

#[test]
fn test_claim_type_labels() {
    assert_eq!(ClaimType::PropertyDamage.as_str(), "property_damage");
    assert_eq!(ClaimType::Hospitalization.to_string(), "hospitalization");
}
