//! Pre-built Test Fixtures
//!
//! Ready-to-use policies, claims, and oracle responses for common
//! validation scenarios. Fixtures are consistent and predictable so tests
//! can assert on exact values.

use chrono::NaiveDate;
use domain_claims::Claim;
use domain_policy::{Exclusion, Policy};
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use crate::builders::{TestClaimBuilder, TestPolicyBuilder};

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard policy start date (Jan 1, 2024)
    pub fn policy_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    /// Standard policy end date (Dec 31, 2024)
    pub fn policy_end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    }

    /// Mid-year date for in-force tests
    pub fn mid_year() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    /// Pre-policy date
    pub fn before_policy() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 12, 1).unwrap()
    }
}

/// A health policy with hospitalization and surgery coverage plus two
/// standard exclusions (hazardous activities, pre-existing conditions)
pub fn health_policy() -> Policy {
    TestPolicyBuilder::new()
        .with_coverage_terms("hospitalization", dec!(50000), dec!(500), dec!(20))
        .with_coverage_terms("surgery", dec!(30000), dec!(250), dec!(10))
        .with_exclusion(
            Exclusion::new(
                "hazardous activities",
                "Injuries sustained during extreme sports or hazardous activities",
            )
            .with_keywords(vec![
                "skydiving".to_string(),
                "bungee".to_string(),
                "racing".to_string(),
            ]),
        )
        .with_exclusion(
            Exclusion::new(
                "pre-existing conditions",
                "Conditions diagnosed before the policy effective date",
            )
            .with_exceptions(vec!["Conditions disclosed at underwriting".to_string()]),
        )
        .build()
}

/// A plausible hospitalization claim against the given policy
pub fn hospitalization_claim(policy: &Policy) -> Claim {
    TestClaimBuilder::new(policy.id).build()
}

/// An oracle response affirming hospitalization coverage with the
/// [`health_policy`] terms
pub fn covered_response() -> Value {
    json!({
        "coverage_applies": true,
        "matched_coverage_type": "hospitalization",
        "coverage_limit": 50000,
        "deductible": 500,
        "copay_percentage": 20,
        "conditions_met": true,
        "confidence": 0.92
    })
}

/// An oracle response finding no applicable coverage
pub fn not_covered_response() -> Value {
    json!({
        "coverage_applies": false,
        "matched_coverage_type": null,
        "coverage_limit": 0,
        "deductible": 0,
        "copay_percentage": 0,
        "conditions_met": false,
        "confidence": 0.85
    })
}

/// An oracle response triggering no exclusions
pub fn no_exclusions_response() -> Value {
    json!({
        "exclusions_triggered": [],
        "claim_excluded": false,
        "confidence": 0.9
    })
}

/// An oracle response triggering the hazardous-activities exclusion
pub fn excluded_response() -> Value {
    json!({
        "exclusions_triggered": [{
            "exclusion_id": "exc-hazard",
            "category": "hazardous activities",
            "reason": "Injury sustained while skydiving",
            "exception_applies": false
        }],
        "claim_excluded": true,
        "confidence": 0.88
    })
}

/// An oracle response approving the claim
pub fn approve_response() -> Value {
    json!({
        "recommendation": "approve",
        "confidence": 0.9,
        "reasoning_summary": "Claim is covered, no exclusions apply, low fraud risk"
    })
}

/// An oracle response denying the claim
pub fn deny_response() -> Value {
    json!({
        "recommendation": "deny",
        "confidence": 0.87,
        "reasoning_summary": "Claim falls under a policy exclusion"
    })
}
