//! Final recommendation stage
//!
//! Synthesizes the stage outcomes into a single recommendation via the
//! oracle. If synthesis fails, a deterministic fallback derives the
//! recommendation from the analyses alone, flagged so reviewers know no
//! reasoning backs it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use domain_claims::Claim;

use crate::coverage::CoverageAnalysis;
use crate::exclusion::ExclusionAnalysis;
use crate::fraud::FraudAnalysis;
use crate::oracle::{OracleError, ReasoningOracle};
use crate::payout::PayoutCalculation;
use crate::{parse, prompts};

/// Confidence assigned to fallback recommendations
pub const FALLBACK_CONFIDENCE: f64 = 0.5;
/// Reasoning summary attached to fallback recommendations
pub const FALLBACK_REASONING: &str = "Automated fallback decision";

/// Final disposition of a validated claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Approve,
    Deny,
    Review,
    Investigate,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Approve => "approve",
            Recommendation::Deny => "deny",
            Recommendation::Review => "review",
            Recommendation::Investigate => "investigate",
        }
    }

    fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "approve" => Some(Recommendation::Approve),
            "deny" => Some(Recommendation::Deny),
            "review" => Some(Recommendation::Review),
            "investigate" => Some(Recommendation::Investigate),
            _ => None,
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The synthesized recommendation, oracle-backed or fallback
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationOutcome {
    /// Final disposition
    pub recommendation: Recommendation,
    /// Confidence in [0, 1]
    pub confidence: f64,
    /// Human-readable summary of the decision
    pub reasoning_summary: String,
    /// True when the deterministic fallback produced this outcome
    pub fallback: bool,
}

/// Derives a recommendation from the analyses without the oracle
///
/// Precedence: investigation-worthy fraud first, then lack of coverage,
/// then exclusions; anything that survives all three still goes to manual
/// review rather than automatic approval.
pub fn fallback_recommendation(
    coverage: &CoverageAnalysis,
    exclusions: &ExclusionAnalysis,
    fraud: &FraudAnalysis,
) -> RecommendationOutcome {
    let recommendation = if fraud.requires_investigation {
        Recommendation::Investigate
    } else if !coverage.coverage_applies {
        Recommendation::Deny
    } else if exclusions.claim_excluded {
        Recommendation::Deny
    } else {
        Recommendation::Review
    };

    RecommendationOutcome {
        recommendation,
        confidence: FALLBACK_CONFIDENCE,
        reasoning_summary: FALLBACK_REASONING.to_string(),
        fallback: true,
    }
}

/// Runs the synthesis stage against the reasoning oracle
///
/// An unknown recommendation string is a malformed response; the caller
/// substitutes [`fallback_recommendation`] with the fallback flag set.
pub async fn synthesize(
    oracle: &dyn ReasoningOracle,
    claim: &Claim,
    coverage: &CoverageAnalysis,
    exclusions: &ExclusionAnalysis,
    fraud: &FraudAnalysis,
    payout: &PayoutCalculation,
    timeout: Duration,
) -> Result<RecommendationOutcome, OracleError> {
    let prompt = prompts::recommendation_prompt(claim, coverage, exclusions, fraud, payout);
    let response = oracle.complete_json(&prompt, timeout).await?;

    let raw = parse::str_field(&response, "recommendation");
    let recommendation = Recommendation::from_str_opt(&raw).ok_or_else(|| {
        OracleError::MalformedResponse(format!("unknown recommendation {raw:?}"))
    })?;

    Ok(RecommendationOutcome {
        recommendation,
        confidence: parse::confidence_field(&response, "confidence"),
        reasoning_summary: parse::str_field(&response, "reasoning_summary"),
        fallback: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fraud::{FraudAnalysis, FraudSeverity};

    fn fraud_with(score: f64) -> FraudAnalysis {
        FraudAnalysis {
            fraud_score: score,
            risk_level: FraudSeverity::Low,
            requires_investigation: score >= crate::fraud::INVESTIGATION_THRESHOLD,
            indicators: Vec::new(),
        }
    }

    fn covered() -> CoverageAnalysis {
        CoverageAnalysis {
            coverage_applies: true,
            conditions_met: true,
            confidence: 0.9,
            ..CoverageAnalysis::conservative()
        }
    }

    fn excluded() -> ExclusionAnalysis {
        ExclusionAnalysis {
            triggered: Vec::new(),
            claim_excluded: true,
            confidence: 0.8,
        }
    }

    #[test]
    fn test_fallback_prefers_investigation() {
        let outcome = fallback_recommendation(&covered(), &excluded(), &fraud_with(0.6));
        assert_eq!(outcome.recommendation, Recommendation::Investigate);
        assert_eq!(outcome.confidence, FALLBACK_CONFIDENCE);
        assert_eq!(outcome.reasoning_summary, FALLBACK_REASONING);
        assert!(outcome.fallback);
    }

    #[test]
    fn test_fallback_denies_uncovered_claim() {
        let outcome = fallback_recommendation(
            &CoverageAnalysis::conservative(),
            &ExclusionAnalysis::none(),
            &fraud_with(0.0),
        );
        assert_eq!(outcome.recommendation, Recommendation::Deny);
    }

    #[test]
    fn test_fallback_denies_excluded_claim() {
        let outcome = fallback_recommendation(&covered(), &excluded(), &fraud_with(0.0));
        assert_eq!(outcome.recommendation, Recommendation::Deny);
    }

    #[test]
    fn test_fallback_never_approves() {
        let outcome =
            fallback_recommendation(&covered(), &ExclusionAnalysis::none(), &fraud_with(0.0));
        assert_eq!(outcome.recommendation, Recommendation::Review);
    }

    #[test]
    fn test_recommendation_round_trip_labels() {
        for (rec, label) in [
            (Recommendation::Approve, "approve"),
            (Recommendation::Deny, "deny"),
            (Recommendation::Review, "review"),
            (Recommendation::Investigate, "investigate"),
        ] {
            assert_eq!(rec.as_str(), label);
            assert_eq!(Recommendation::from_str_opt(label), Some(rec));
        }
        assert_eq!(Recommendation::from_str_opt("escalate"), None);
    }
}
