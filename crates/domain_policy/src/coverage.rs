//! Coverage items and their financial terms
//!
//! A coverage item is one benefit line extracted from a policy document:
//! what it covers, up to how much, and what the insured pays themselves
//! (deductible and copay).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::PolicyError;
use core_kernel::{CoverageId, Money};

/// A coverage item within a policy
///
/// Coverage types are free-form labels ("hospitalization", "theft", ...)
/// because they come out of document extraction, not a fixed product
/// catalogue. Matching against claim types is case-insensitive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageItem {
    /// Unique identifier for this coverage item
    pub id: CoverageId,
    /// Type of claim this coverage applies to
    pub coverage_type: String,
    /// Human-readable description
    pub description: String,
    /// Maximum payable amount
    pub limit_amount: Money,
    /// Deductible applied before payout
    pub deductible: Money,
    /// Copay percentage borne by the insured (0-100)
    pub copay_percentage: Decimal,
    /// Whether the limit applies per incident
    pub per_incident: bool,
    /// Annual aggregate cap, if any
    pub annual_aggregate: Option<Money>,
    /// Days after policy start before coverage takes effect
    pub waiting_period_days: u32,
    /// Whether pre-authorization is required
    pub requires_preauthorization: bool,
}

impl CoverageItem {
    /// Creates a new coverage item, validating its financial terms
    pub fn new(
        coverage_type: impl Into<String>,
        description: impl Into<String>,
        limit_amount: Money,
        deductible: Money,
        copay_percentage: Decimal,
    ) -> Result<Self, PolicyError> {
        if limit_amount.is_negative() {
            return Err(PolicyError::InvalidCoverage(
                "limit amount cannot be negative".to_string(),
            ));
        }
        if deductible.is_negative() {
            return Err(PolicyError::InvalidCoverage(
                "deductible cannot be negative".to_string(),
            ));
        }
        if copay_percentage < dec!(0) || copay_percentage > dec!(100) {
            return Err(PolicyError::InvalidCopayPercentage(copay_percentage));
        }

        Ok(Self {
            id: CoverageId::new_v7(),
            coverage_type: coverage_type.into(),
            description: description.into(),
            limit_amount,
            deductible,
            copay_percentage,
            per_incident: true,
            annual_aggregate: None,
            waiting_period_days: 0,
            requires_preauthorization: false,
        })
    }

    /// Sets the annual aggregate cap
    pub fn with_annual_aggregate(mut self, aggregate: Money) -> Self {
        self.annual_aggregate = Some(aggregate);
        self
    }

    /// Sets the waiting period
    pub fn with_waiting_period(mut self, days: u32) -> Self {
        self.waiting_period_days = days;
        self
    }

    /// Marks this coverage as requiring pre-authorization
    pub fn with_preauthorization(mut self) -> Self {
        self.requires_preauthorization = true;
        self
    }

    /// Returns true if this item covers the given claim type
    pub fn covers(&self, claim_type: &str) -> bool {
        self.coverage_type.eq_ignore_ascii_case(claim_type)
    }
}
