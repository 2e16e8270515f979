//! Fraud detection stage
//!
//! A deterministic rule engine: each rule is an independent predicate with
//! a fixed score contribution, so new rules can be added without touching
//! existing ones. This stage never calls out and never fails.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use domain_claims::Claim;

/// Score at or above which the risk level is medium
pub const RISK_MEDIUM_THRESHOLD: f64 = 0.5;
/// Score at or above which the risk level is high
pub const RISK_HIGH_THRESHOLD: f64 = 0.7;
/// Score at or above which a claim requires investigation
pub const INVESTIGATION_THRESHOLD: f64 = 0.5;
/// Incident descriptions shorter than this are considered vague
pub const MIN_DESCRIPTION_CHARS: usize = 50;

/// Categories of fraud indicators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FraudIndicatorType {
    TimingAnomaly,
    AmountAnomaly,
    PatternMatch,
    DuplicateClaim,
    InconsistentInfo,
    FrequencyAnomaly,
    DocumentIssue,
}

/// Severity of a fraud indicator or overall risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FraudSeverity {
    Low,
    Medium,
    High,
    Critical,
}

/// One triggered fraud indicator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FraudIndicator {
    /// Category of the indicator
    pub indicator_type: FraudIndicatorType,
    /// Severity of this indicator on its own
    pub severity: FraudSeverity,
    /// What was observed
    pub description: String,
    /// Contribution to the fraud score, in [0, 1]
    pub score_contribution: f64,
}

/// Result of the fraud detection stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FraudAnalysis {
    /// Sum of triggered contributions, clamped to [0, 1]
    pub fraud_score: f64,
    /// Risk level derived from the score
    pub risk_level: FraudSeverity,
    /// Whether the claim should go to investigation
    pub requires_investigation: bool,
    /// The indicators that triggered
    pub indicators: Vec<FraudIndicator>,
}

/// An independent fraud rule: predicate plus fixed contribution
pub struct FraudRule {
    /// Category of the indicator this rule raises
    pub indicator_type: FraudIndicatorType,
    /// Severity when triggered
    pub severity: FraudSeverity,
    /// Indicator description
    pub description: &'static str,
    /// Score contribution when triggered, in [0, 1]
    pub contribution: f64,
    /// Whether the rule triggers for this claim
    pub applies: fn(&Claim) -> bool,
}

/// The deterministic fraud rule engine
pub struct FraudDetector {
    rules: Vec<FraudRule>,
}

impl Default for FraudDetector {
    fn default() -> Self {
        Self::with_default_rules()
    }
}

impl FraudDetector {
    /// Creates a detector with a custom rule set
    pub fn new(rules: Vec<FraudRule>) -> Self {
        Self { rules }
    }

    /// Creates a detector with the standard rule set
    pub fn with_default_rules() -> Self {
        Self::new(vec![
            FraudRule {
                indicator_type: FraudIndicatorType::AmountAnomaly,
                severity: FraudSeverity::Medium,
                description: "High value claim",
                contribution: 0.2,
                applies: |claim| claim.claimed_amount.amount() > dec!(50000),
            },
            FraudRule {
                indicator_type: FraudIndicatorType::InconsistentInfo,
                severity: FraudSeverity::Low,
                description: "Vague incident description",
                contribution: 0.1,
                applies: |claim| claim.incident_description.chars().count() < MIN_DESCRIPTION_CHARS,
            },
        ])
    }

    /// Evaluates all rules against a claim
    ///
    /// Pure over already-validated inputs; always returns a value.
    pub fn detect(&self, claim: &Claim) -> FraudAnalysis {
        let indicators: Vec<FraudIndicator> = self
            .rules
            .iter()
            .filter(|rule| (rule.applies)(claim))
            .map(|rule| FraudIndicator {
                indicator_type: rule.indicator_type,
                severity: rule.severity,
                description: rule.description.to_string(),
                score_contribution: rule.contribution,
            })
            .collect();

        let fraud_score = indicators
            .iter()
            .map(|i| i.score_contribution)
            .sum::<f64>()
            .clamp(0.0, 1.0);

        FraudAnalysis {
            fraud_score,
            risk_level: risk_level(fraud_score),
            requires_investigation: fraud_score >= INVESTIGATION_THRESHOLD,
            indicators,
        }
    }
}

/// Maps a fraud score to a risk level; monotonic in the score
fn risk_level(score: f64) -> FraudSeverity {
    if score >= RISK_HIGH_THRESHOLD {
        FraudSeverity::High
    } else if score >= RISK_MEDIUM_THRESHOLD {
        FraudSeverity::Medium
    } else {
        FraudSeverity::Low
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn score_always_in_unit_interval(contributions in prop::collection::vec(0.0f64..1.0, 0..10)) {
            let score = contributions.iter().sum::<f64>().clamp(0.0, 1.0);
            prop_assert!((0.0..=1.0).contains(&score));
            prop_assert_eq!(risk_level(score) >= FraudSeverity::Medium, score >= RISK_MEDIUM_THRESHOLD);
        }

        #[test]
        fn risk_level_is_monotonic(a in 0.0f64..1.0, b in 0.0f64..1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(risk_level(lo) <= risk_level(hi));
        }
    }
}
