//! Coverage analysis stage
//!
//! Determines whether a coverage item applies to the claim and extracts the
//! financial terms (limit, deductible, copay) the payout stage needs. The
//! semantic judgment is delegated to the reasoning oracle; parsing is
//! defensive and never guesses coverage in the applicant's favour.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use domain_claims::Claim;
use domain_policy::Policy;

use crate::oracle::{OracleError, ReasoningOracle};
use crate::parse;
use crate::prompts;
use crate::retriever::ContextFragment;

/// Result of the coverage analysis stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageAnalysis {
    /// Whether any coverage item applies to this claim
    pub coverage_applies: bool,
    /// The coverage type that matched, if any
    pub matched_coverage_type: Option<String>,
    /// Applicable coverage limit
    pub coverage_limit: Decimal,
    /// Applicable deductible
    pub deductible: Decimal,
    /// Applicable copay percentage (0-100)
    pub copay_percentage: Decimal,
    /// Whether the coverage conditions are met
    pub conditions_met: bool,
    /// Oracle confidence in [0, 1]
    pub confidence: f64,
}

impl CoverageAnalysis {
    /// The safe default: no coverage, no confidence
    ///
    /// Substituted by the orchestrator whenever this stage cannot complete.
    pub fn conservative() -> Self {
        Self {
            coverage_applies: false,
            matched_coverage_type: None,
            coverage_limit: Decimal::ZERO,
            deductible: Decimal::ZERO,
            copay_percentage: Decimal::ZERO,
            conditions_met: false,
            confidence: 0.0,
        }
    }

    /// Parses an oracle response field by field
    ///
    /// Unknown or mistyped fields take their conservative value; a response
    /// that is valid JSON but not the expected shape yields the same result
    /// as [`CoverageAnalysis::conservative`].
    pub fn from_oracle_json(value: &Value) -> Self {
        Self {
            coverage_applies: parse::bool_field(value, "coverage_applies"),
            matched_coverage_type: parse::opt_str_field(value, "matched_coverage_type"),
            coverage_limit: parse::amount_field(value, "coverage_limit"),
            deductible: parse::amount_field(value, "deductible"),
            copay_percentage: parse::amount_field(value, "copay_percentage")
                .min(Decimal::from(100)),
            conditions_met: parse::bool_field(value, "conditions_met"),
            confidence: parse::confidence_field(value, "confidence"),
        }
    }
}

/// Runs the coverage analysis against the reasoning oracle
///
/// Errors are returned to the orchestrator, which substitutes
/// [`CoverageAnalysis::conservative`] and records an error step.
pub async fn analyze_coverage(
    oracle: &dyn ReasoningOracle,
    claim: &Claim,
    policy: &Policy,
    fragments: &[ContextFragment],
    timeout: Duration,
) -> Result<CoverageAnalysis, OracleError> {
    let candidates = policy.applicable_coverage(claim.claim_type.as_str());
    let prompt = prompts::coverage_prompt(claim, &candidates, fragments);

    let response = oracle.complete_json(&prompt, timeout).await?;
    Ok(CoverageAnalysis::from_oracle_json(&response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_from_oracle_json_full_response() {
        let response = json!({
            "coverage_applies": true,
            "matched_coverage_type": "hospitalization",
            "coverage_limit": 50000,
            "deductible": 500,
            "copay_percentage": 20,
            "conditions_met": true,
            "confidence": 0.92
        });

        let analysis = CoverageAnalysis::from_oracle_json(&response);
        assert!(analysis.coverage_applies);
        assert_eq!(
            analysis.matched_coverage_type.as_deref(),
            Some("hospitalization")
        );
        assert_eq!(analysis.coverage_limit, dec!(50000));
        assert_eq!(analysis.deductible, dec!(500));
        assert_eq!(analysis.copay_percentage, dec!(20));
        assert_eq!(analysis.confidence, 0.92);
    }

    #[test]
    fn test_missing_fields_default_conservatively() {
        let analysis = CoverageAnalysis::from_oracle_json(&json!({}));

        assert!(!analysis.coverage_applies);
        assert!(analysis.matched_coverage_type.is_none());
        assert_eq!(analysis.coverage_limit, Decimal::ZERO);
        assert_eq!(analysis.confidence, 0.0);
    }

    #[test]
    fn test_copay_capped_at_hundred() {
        let response = json!({"coverage_applies": true, "copay_percentage": 250});
        let analysis = CoverageAnalysis::from_oracle_json(&response);
        assert_eq!(analysis.copay_percentage, dec!(100));
    }

    #[test]
    fn test_mistyped_bool_is_false() {
        let response = json!({"coverage_applies": "true"});
        let analysis = CoverageAnalysis::from_oracle_json(&response);
        assert!(!analysis.coverage_applies);
    }
}
