//! The complete validation result
//!
//! Everything a reviewer needs in one record: the decision, the per-stage
//! analyses that led to it, the retrieved policy clauses, and the ordered
//! audit trail of steps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use core_kernel::{ClaimId, ValidationId};

use crate::coverage::CoverageAnalysis;
use crate::exclusion::ExclusionAnalysis;
use crate::fraud::FraudAnalysis;
use crate::payout::PayoutCalculation;
use crate::recommendation::{Recommendation, RecommendationOutcome};
use crate::steps::{Stage, StepStatus, ValidationStep};

/// Outcome of a full validation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimValidationResult {
    /// Unique identifier of this validation run
    pub validation_id: ValidationId,
    /// The claim that was validated
    pub claim_id: ClaimId,
    /// True iff coverage applies and no exclusion voids the claim
    pub is_valid: bool,
    /// Final disposition
    pub recommendation: Recommendation,
    /// Confidence behind the recommendation, in [0, 1]
    pub confidence: f64,
    /// Human-readable summary of the decision
    pub reasoning_summary: String,
    /// Coverage stage outcome
    pub coverage: CoverageAnalysis,
    /// Exclusion stage outcome
    pub exclusions: ExclusionAnalysis,
    /// Fraud stage outcome
    pub fraud: FraudAnalysis,
    /// Payout stage outcome
    pub payout: PayoutCalculation,
    /// Policy clauses retrieved as reasoning context
    pub relevant_clauses: Vec<Value>,
    /// Ordered audit trail, one step per pipeline stage
    pub validation_steps: Vec<ValidationStep>,
    /// When the validation completed
    pub validated_at: DateTime<Utc>,
    /// Wall-clock duration of the run
    pub processing_time_ms: u64,
    /// Which oracle model produced the reasoning
    pub model_used: String,
}

impl ClaimValidationResult {
    /// Whether any stage failed and was substituted with a default
    ///
    /// A retrieval warning counts: the analyses then ran without evidence.
    /// A fraud warning does not; that stage completed normally.
    pub fn degraded(&self) -> bool {
        self.validation_steps.iter().any(|step| {
            step.status == StepStatus::Error
                || (step.stage == Stage::RetrieveContext && step.status == StepStatus::Warning)
        })
    }

    /// Convenience accessor for the synthesized outcome
    pub fn outcome(&self) -> RecommendationOutcome {
        RecommendationOutcome {
            recommendation: self.recommendation,
            confidence: self.confidence,
            reasoning_summary: self.reasoning_summary.clone(),
            fallback: self
                .validation_steps
                .iter()
                .any(|step| {
                    step.stage == crate::steps::Stage::Synthesize
                        && step.status == StepStatus::Error
                }),
        }
    }
}
