//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use chrono::NaiveDate;
use core_kernel::{Currency, Money, PolicyId};
use domain_claims::{Claim, ClaimType};
use domain_policy::{CoverageItem, Exclusion, Policy, PolicyType};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::TemporalFixtures;

/// Builder for constructing test policies
pub struct TestPolicyBuilder {
    policy_number: String,
    policy_type: PolicyType,
    holder_name: String,
    effective_date: NaiveDate,
    expiration_date: NaiveDate,
    coverage_items: Vec<CoverageItem>,
    exclusions: Vec<Exclusion>,
}

impl Default for TestPolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPolicyBuilder {
    /// Creates a builder for an in-force health policy with no coverage yet
    pub fn new() -> Self {
        Self {
            policy_number: "POL-2024-0001".to_string(),
            policy_type: PolicyType::Health,
            holder_name: "Jane Roe".to_string(),
            effective_date: TemporalFixtures::policy_start(),
            expiration_date: TemporalFixtures::policy_end(),
            coverage_items: Vec::new(),
            exclusions: Vec::new(),
        }
    }

    pub fn with_policy_number(mut self, number: impl Into<String>) -> Self {
        self.policy_number = number.into();
        self
    }

    pub fn with_policy_type(mut self, policy_type: PolicyType) -> Self {
        self.policy_type = policy_type;
        self
    }

    pub fn with_holder_name(mut self, name: impl Into<String>) -> Self {
        self.holder_name = name.into();
        self
    }

    pub fn with_period(mut self, effective: NaiveDate, expiration: NaiveDate) -> Self {
        self.effective_date = effective;
        self.expiration_date = expiration;
        self
    }

    pub fn with_coverage(mut self, item: CoverageItem) -> Self {
        self.coverage_items.push(item);
        self
    }

    /// Adds a coverage item with the given financial terms
    pub fn with_coverage_terms(
        self,
        coverage_type: &str,
        limit: Decimal,
        deductible: Decimal,
        copay_percentage: Decimal,
    ) -> Self {
        let item = CoverageItem::new(
            coverage_type,
            format!("{coverage_type} coverage"),
            Money::new(limit, Currency::USD),
            Money::new(deductible, Currency::USD),
            copay_percentage,
        )
        .expect("valid coverage terms");
        self.with_coverage(item)
    }

    pub fn with_exclusion(mut self, exclusion: Exclusion) -> Self {
        self.exclusions.push(exclusion);
        self
    }

    pub fn build(self) -> Policy {
        let mut policy = Policy::new(
            self.policy_number,
            self.policy_type,
            self.holder_name,
            self.effective_date,
            self.expiration_date,
        )
        .expect("valid policy period");
        for item in self.coverage_items {
            policy.add_coverage(item);
        }
        for exclusion in self.exclusions {
            policy.add_exclusion(exclusion);
        }
        policy
    }
}

/// Builder for constructing test claims
pub struct TestClaimBuilder {
    policy_id: PolicyId,
    claimant_name: String,
    claim_type: ClaimType,
    incident_date: NaiveDate,
    incident_description: String,
    claimed_amount: Money,
    incident_location: Option<String>,
}

impl TestClaimBuilder {
    /// Creates a builder for a plausible hospitalization claim
    pub fn new(policy_id: PolicyId) -> Self {
        Self {
            policy_id,
            claimant_name: "Jane Roe".to_string(),
            claim_type: ClaimType::Hospitalization,
            incident_date: TemporalFixtures::mid_year(),
            incident_description:
                "Emergency appendectomy performed after acute appendicitis diagnosis at City General Hospital"
                    .to_string(),
            claimed_amount: Money::new(dec!(15000), Currency::USD),
            incident_location: None,
        }
    }

    pub fn with_claimant_name(mut self, name: impl Into<String>) -> Self {
        self.claimant_name = name.into();
        self
    }

    pub fn with_claim_type(mut self, claim_type: ClaimType) -> Self {
        self.claim_type = claim_type;
        self
    }

    pub fn with_incident_date(mut self, date: NaiveDate) -> Self {
        self.incident_date = date;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.incident_description = description.into();
        self
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.claimed_amount = Money::new(amount, Currency::USD);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.incident_location = Some(location.into());
        self
    }

    pub fn build(self) -> Claim {
        let claim = Claim::submit(
            self.policy_id,
            self.claimant_name,
            self.claim_type,
            self.incident_date,
            self.incident_description,
            self.claimed_amount,
        )
        .expect("valid claim amount");
        match self.incident_location {
            Some(location) => claim.with_location(location),
            None => claim,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_builder_defaults() {
        let policy = TestPolicyBuilder::new()
            .with_coverage_terms("hospitalization", dec!(50000), dec!(500), dec!(20))
            .build();

        assert_eq!(policy.policy_number, "POL-2024-0001");
        assert_eq!(policy.coverage_items.len(), 1);
        assert!(policy.in_force_on(TemporalFixtures::mid_year()));
    }

    #[test]
    fn test_claim_builder_targets_policy() {
        let policy = TestPolicyBuilder::new().build();
        let claim = TestClaimBuilder::new(policy.id)
            .with_amount(dec!(2500))
            .build();

        assert_eq!(claim.policy_id, policy.id);
        assert_eq!(claim.claimed_amount.amount(), dec!(2500));
    }
}
