//! Property Tests for Clearclaim
//!
//! Randomized inputs drawn from the shared generators; each property pins
//! an invariant the pipeline relies on across all valid inputs.

use proptest::prelude::*;

use clearclaim::core_kernel::{Money, PolicyId, Rate};
use clearclaim::domain_validation::fraud::INVESTIGATION_THRESHOLD;
use clearclaim::domain_validation::recommendation::{fallback_recommendation, FALLBACK_CONFIDENCE};
use clearclaim::domain_validation::{CoverageAnalysis, ExclusionAnalysis, FraudDetector};
use test_utils::builders::TestClaimBuilder;
use test_utils::generators::{
    claim_amount_minor_strategy, claim_type_strategy, confidence_strategy,
    copay_percentage_strategy, currency_strategy, incident_description_strategy,
    usd_money_strategy,
};

proptest! {
    #[test]
    fn minor_units_respect_currency_precision(
        minor in claim_amount_minor_strategy(),
        currency in currency_strategy(),
    ) {
        let money = Money::from_minor(minor, currency);

        prop_assert!(!money.is_negative());
        // Already at the currency's precision, so rounding is the identity.
        prop_assert_eq!(money.round_to_currency(), money);
    }

    #[test]
    fn copay_never_exceeds_base_amount(
        base in usd_money_strategy(),
        pct in copay_percentage_strategy(),
    ) {
        let copay = Rate::from_percentage(pct).apply(&base);

        prop_assert!(!copay.is_negative());
        prop_assert!(copay.amount() <= base.amount());
    }

    #[test]
    fn fraud_score_stays_in_unit_interval(
        claim_type in claim_type_strategy(),
        description in incident_description_strategy(),
        amount in usd_money_strategy(),
    ) {
        let claim = TestClaimBuilder::new(PolicyId::new_v7())
            .with_claim_type(claim_type)
            .with_description(description)
            .with_amount(amount.amount())
            .build();

        let analysis = FraudDetector::with_default_rules().detect(&claim);

        prop_assert!((0.0..=1.0).contains(&analysis.fraud_score));
        prop_assert_eq!(
            analysis.requires_investigation,
            analysis.fraud_score >= INVESTIGATION_THRESHOLD
        );
    }

    #[test]
    fn fallback_confidence_ignores_analysis_confidence(
        coverage_confidence in confidence_strategy(),
        exclusion_confidence in confidence_strategy(),
    ) {
        let mut coverage = CoverageAnalysis::conservative();
        coverage.confidence = coverage_confidence;
        let mut exclusions = ExclusionAnalysis::none();
        exclusions.confidence = exclusion_confidence;
        let claim = TestClaimBuilder::new(PolicyId::new_v7()).build();
        let fraud = FraudDetector::with_default_rules().detect(&claim);

        let outcome = fallback_recommendation(&coverage, &exclusions, &fraud);

        prop_assert!(outcome.fallback);
        prop_assert_eq!(outcome.confidence, FALLBACK_CONFIDENCE);
    }
}
