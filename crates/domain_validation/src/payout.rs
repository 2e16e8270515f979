//! Payout calculation stage
//!
//! A pure function over the coverage and exclusion outcomes: cap the claim
//! at the coverage limit, take off the deductible, take off the copay, and
//! round to currency. Every subtraction is itemized for display and audit.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, Rate};

use crate::coverage::CoverageAnalysis;
use crate::exclusion::ExclusionAnalysis;

/// One line of the payout breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakdownLine {
    /// What this line represents
    pub label: String,
    /// Signed amount (subtractions are negative)
    pub amount: Money,
}

impl BreakdownLine {
    fn new(label: &str, amount: Money) -> Self {
        Self {
            label: label.to_string(),
            amount,
        }
    }
}

/// Result of the payout calculation stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoutCalculation {
    /// Amount claimed
    pub claimed_amount: Money,
    /// Amount eligible after applying the coverage limit
    pub eligible_amount: Money,
    /// Coverage limit applied (zero means unlimited)
    pub coverage_limit: Money,
    /// Deductible applied
    pub deductible: Money,
    /// Copay borne by the insured
    pub copay_amount: Money,
    /// Final recommended payout, rounded to currency
    pub recommended_payout: Money,
    /// Itemized calculation for display and audit
    pub breakdown: Vec<BreakdownLine>,
    /// Free-form notes
    pub notes: Vec<String>,
}

/// Computes the recommended payout
///
/// Guarantees `0 <= recommended_payout <= claimed_amount`. A claim that is
/// not covered, or is excluded, pays zero.
pub fn calculate_payout(
    claimed_amount: Money,
    coverage: &CoverageAnalysis,
    exclusions: &ExclusionAnalysis,
) -> PayoutCalculation {
    let currency = claimed_amount.currency();
    let zero = Money::zero(currency);

    if !coverage.coverage_applies || exclusions.claim_excluded {
        return PayoutCalculation {
            claimed_amount,
            eligible_amount: zero,
            coverage_limit: zero,
            deductible: zero,
            copay_amount: zero,
            recommended_payout: zero,
            breakdown: vec![BreakdownLine::new("not eligible", zero)],
            notes: vec!["Claim not eligible for payout".to_string()],
        };
    }

    // The analysis parser already clamps amounts to be non-negative and the
    // copay percentage to 0-100; everything below shares one currency, so
    // the checked money ops cannot fail.
    let coverage_limit = Money::new(coverage.coverage_limit, currency);
    let deductible = Money::new(coverage.deductible, currency);

    // A zero limit means the oracle found no explicit cap; the claim itself
    // is then the eligible amount.
    let eligible_amount = if coverage_limit.is_positive() {
        claimed_amount
            .checked_min(&coverage_limit)
            .unwrap_or(claimed_amount)
    } else {
        claimed_amount
    };

    let after_deductible = eligible_amount
        .checked_sub_to_zero(&deductible)
        .unwrap_or(zero);

    // The payout subtracts the unrounded copay and rounds once at the end;
    // the copay field is rounded separately for display.
    let raw_copay = if coverage.copay_percentage > Decimal::ZERO {
        Rate::from_percentage(coverage.copay_percentage).apply(&after_deductible)
    } else {
        zero
    };
    let copay_amount = raw_copay.round_to_currency();

    let recommended_payout = after_deductible
        .checked_sub_to_zero(&raw_copay)
        .unwrap_or(zero)
        .round_to_currency();

    let mut breakdown = vec![
        BreakdownLine::new("claimed", claimed_amount),
        BreakdownLine::new("coverage limit applied", eligible_amount),
        BreakdownLine::new("less deductible", deductible.multiply(dec!(-1))),
        BreakdownLine::new("less copay", copay_amount.multiply(dec!(-1))),
        BreakdownLine::new("recommended payout", recommended_payout),
    ];
    breakdown.shrink_to_fit();

    let mut notes = Vec::new();
    if coverage_limit.is_positive() && eligible_amount != claimed_amount {
        notes.push("Claimed amount capped at coverage limit".to_string());
    }
    if after_deductible.is_zero() && eligible_amount.is_positive() {
        notes.push("Deductible consumed the eligible amount".to_string());
    }

    PayoutCalculation {
        claimed_amount,
        eligible_amount,
        coverage_limit,
        deductible,
        copay_amount,
        recommended_payout,
        breakdown,
        notes,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use core_kernel::Currency;
    use proptest::prelude::*;
    use rust_decimal::prelude::FromPrimitive;

    proptest! {
        #[test]
        fn payout_bounded_by_claimed_amount(
            claimed in 0i64..10_000_000i64,
            limit in 0i64..10_000_000i64,
            deductible in 0i64..1_000_000i64,
            copay in 0u8..=100u8,
            applies: bool,
            excluded_flag: bool,
        ) {
            let coverage = CoverageAnalysis {
                coverage_applies: applies,
                matched_coverage_type: None,
                coverage_limit: Decimal::from(limit),
                deductible: Decimal::from(deductible),
                copay_percentage: Decimal::from_u8(copay).unwrap(),
                conditions_met: applies,
                confidence: 0.5,
            };
            let exclusions = if excluded_flag {
                ExclusionAnalysis {
                    triggered: vec![crate::exclusion::TriggeredExclusion {
                        exclusion_id: "exc".to_string(),
                        category: "cat".to_string(),
                        reason: "reason".to_string(),
                        exception_applies: false,
                        exception_reason: None,
                    }],
                    claim_excluded: true,
                    confidence: 0.5,
                }
            } else {
                ExclusionAnalysis::none()
            };

            let claimed_money = Money::new(Decimal::from(claimed), Currency::USD);
            let payout = calculate_payout(claimed_money, &coverage, &exclusions);

            prop_assert!(!payout.recommended_payout.is_negative());
            prop_assert!(payout.recommended_payout.amount() <= claimed_money.amount());
            if !applies || excluded_flag {
                prop_assert!(payout.recommended_payout.is_zero());
            }
        }
    }
}
