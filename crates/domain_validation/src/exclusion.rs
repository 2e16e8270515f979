//! Exclusion analysis stage
//!
//! Determines whether any policy exclusion voids the claim, honoring
//! exception carve-outs. Note the deliberate asymmetry with the coverage
//! stage: if this stage cannot complete, the default is *no exclusions
//! triggered* - an unverified exclusion must not unilaterally deny a claim.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use domain_claims::Claim;
use domain_policy::Policy;

use crate::oracle::{OracleError, ReasoningOracle};
use crate::parse;
use crate::prompts;

/// One exclusion the oracle judged relevant to the claim
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggeredExclusion {
    /// Identifier of the exclusion clause
    pub exclusion_id: String,
    /// Category label
    pub category: String,
    /// Why the exclusion applies
    pub reason: String,
    /// Whether a listed exception overrides it
    pub exception_applies: bool,
    /// Why the exception applies, if it does
    pub exception_reason: Option<String>,
}

/// Result of the exclusion analysis stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExclusionAnalysis {
    /// Exclusions judged relevant, with their exception outcomes
    pub triggered: Vec<TriggeredExclusion>,
    /// True iff at least one triggered exclusion lacks an overriding exception
    pub claim_excluded: bool,
    /// Oracle confidence in [0, 1]
    pub confidence: f64,
}

impl ExclusionAnalysis {
    /// The failure default: nothing triggered, claim not excluded
    pub fn none() -> Self {
        Self {
            triggered: Vec::new(),
            claim_excluded: false,
            confidence: 0.0,
        }
    }

    /// Parses an oracle response
    ///
    /// `claim_excluded` is recomputed from the triggered entries rather than
    /// taken from the response, so the decision rule holds even against an
    /// inconsistent oracle.
    pub fn from_oracle_json(value: &Value) -> Self {
        let triggered: Vec<TriggeredExclusion> = value
            .get("exclusions_triggered")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .map(|entry| TriggeredExclusion {
                        exclusion_id: parse::str_field(entry, "exclusion_id"),
                        category: parse::str_field(entry, "category"),
                        reason: parse::str_field(entry, "reason"),
                        exception_applies: parse::bool_field(entry, "exception_applies"),
                        exception_reason: parse::opt_str_field(entry, "exception_reason"),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let claim_excluded = triggered.iter().any(|t| !t.exception_applies);

        Self {
            triggered,
            claim_excluded,
            confidence: parse::confidence_field(value, "confidence"),
        }
    }
}

/// Runs the exclusion analysis against the reasoning oracle
///
/// Exclusions are shortlisted by keyword before the oracle sees them; a
/// policy with no candidate exclusions resolves locally without a call.
pub async fn analyze_exclusions(
    oracle: &dyn ReasoningOracle,
    claim: &Claim,
    policy: &Policy,
    timeout: Duration,
) -> Result<ExclusionAnalysis, OracleError> {
    let candidates = policy.candidate_exclusions(&claim.incident_description);
    if candidates.is_empty() {
        return Ok(ExclusionAnalysis::none());
    }

    let prompt = prompts::exclusion_prompt(claim, &candidates);
    let response = oracle.complete_json(&prompt, timeout).await?;
    Ok(ExclusionAnalysis::from_oracle_json(&response))
}
