//! The validation pipeline orchestrator
//!
//! Runs the six stages strictly in order and owns the degradation policy:
//! a stage that errors or times out is substituted with its conservative
//! default and recorded as an error step, and the run continues. The only
//! hard failure is a claim validated against the wrong policy.

use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use chrono::Utc;
use core_kernel::ValidationId;
use domain_claims::Claim;
use domain_policy::Policy;

use crate::coverage::{self, CoverageAnalysis};
use crate::error::ValidationError;
use crate::exclusion::{self, ExclusionAnalysis};
use crate::fraud::{FraudDetector, INVESTIGATION_THRESHOLD};
use crate::oracle::{OracleError, ReasoningOracle};
use crate::payout;
use crate::recommendation::{self, RecommendationOutcome};
use crate::result::ClaimValidationResult;
use crate::retriever::{ContextFragment, ContextRetriever};
use crate::steps::{Stage, StepStatus, ValidationStep};

/// Tunables for a validator instance
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Per-call budget for reasoning oracle stages
    pub oracle_timeout: Duration,
    /// Budget for the context retrieval stage
    pub retriever_timeout: Duration,
    /// How many policy clauses to retrieve as reasoning context
    pub context_k: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            oracle_timeout: Duration::from_secs(30),
            retriever_timeout: Duration::from_secs(10),
            context_k: 5,
        }
    }
}

/// The claim validation pipeline
///
/// Collaborators are injected so the pipeline runs identically against
/// production services and deterministic test stubs.
pub struct ClaimValidator {
    oracle: Arc<dyn ReasoningOracle>,
    retriever: Arc<dyn ContextRetriever>,
    fraud: FraudDetector,
    config: ValidatorConfig,
}

impl ClaimValidator {
    pub fn new(oracle: Arc<dyn ReasoningOracle>, retriever: Arc<dyn ContextRetriever>) -> Self {
        Self {
            oracle,
            retriever,
            fraud: FraudDetector::with_default_rules(),
            config: ValidatorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_fraud_detector(mut self, fraud: FraudDetector) -> Self {
        self.fraud = fraud;
        self
    }

    /// Validates a claim against its policy
    ///
    /// Returns a complete [`ClaimValidationResult`] with exactly one audit
    /// step per stage, in stage order. Errors only on a claim/policy
    /// mismatch; every stage failure degrades instead.
    pub async fn validate(
        &self,
        claim: &Claim,
        policy: &Policy,
    ) -> Result<ClaimValidationResult, ValidationError> {
        if claim.policy_id != policy.id {
            return Err(ValidationError::PolicyMismatch {
                claim_id: claim.id,
                expected: claim.policy_id,
                actual: policy.id,
            });
        }

        let started = Instant::now();
        let mut steps: Vec<ValidationStep> = Vec::with_capacity(Stage::SEQUENCE.len());

        info!(claim_id = %claim.id, policy_id = %policy.id, "starting claim validation");

        let fragments = self.retrieve_context(claim, policy, &mut steps).await;
        let coverage = self
            .run_coverage(claim, policy, &fragments, &mut steps)
            .await;
        let exclusions = self.run_exclusions(claim, policy, &mut steps).await;

        let fraud = self.fraud.detect(claim);
        let fraud_status = if fraud.fraud_score >= INVESTIGATION_THRESHOLD {
            StepStatus::Warning
        } else {
            StepStatus::Passed
        };
        steps.push(
            ValidationStep::new(
                Stage::DetectFraud,
                fraud_status,
                format!(
                    "Fraud score {:.2}, {} indicator(s)",
                    fraud.fraud_score,
                    fraud.indicators.len()
                ),
            )
            .with_data(serde_json::to_value(&fraud).unwrap_or(Value::Null)),
        );

        let payout = payout::calculate_payout(claim.claimed_amount, &coverage, &exclusions);
        steps.push(
            ValidationStep::new(
                Stage::CalculatePayout,
                StepStatus::Passed,
                format!("Recommended payout {}", payout.recommended_payout),
            )
            .with_data(serde_json::to_value(&payout).unwrap_or(Value::Null)),
        );

        let outcome = self
            .run_synthesis(claim, &coverage, &exclusions, &fraud, &payout, &mut steps)
            .await;

        let is_valid = coverage.coverage_applies && !exclusions.claim_excluded;
        let processing_time_ms = started.elapsed().as_millis() as u64;

        info!(
            claim_id = %claim.id,
            recommendation = %outcome.recommendation,
            is_valid,
            processing_time_ms,
            "claim validation finished"
        );

        Ok(ClaimValidationResult {
            validation_id: ValidationId::new_v7(),
            claim_id: claim.id,
            is_valid,
            recommendation: outcome.recommendation,
            confidence: outcome.confidence,
            reasoning_summary: outcome.reasoning_summary,
            coverage,
            exclusions,
            fraud,
            payout,
            relevant_clauses: fragments
                .iter()
                .map(|f| serde_json::to_value(f).unwrap_or(Value::Null))
                .collect(),
            validation_steps: steps,
            validated_at: Utc::now(),
            processing_time_ms,
            model_used: self.oracle.model_name().to_string(),
        })
    }

    /// Stage 1: retrieval failures degrade to an empty evidence set
    async fn retrieve_context(
        &self,
        claim: &Claim,
        policy: &Policy,
        steps: &mut Vec<ValidationStep>,
    ) -> Vec<ContextFragment> {
        let query = format!("{} {}", claim.claim_type, claim.incident_description);
        let budget = self.config.retriever_timeout;

        let outcome = tokio::time::timeout(
            budget,
            self.retriever
                .search(&query, policy.id, self.config.context_k, budget),
        )
        .await;

        match outcome {
            Ok(Ok(fragments)) => {
                steps.push(ValidationStep::new(
                    Stage::RetrieveContext,
                    StepStatus::Passed,
                    format!("Retrieved {} policy clause(s)", fragments.len()),
                ));
                fragments
            }
            Ok(Err(err)) => {
                warn!(claim_id = %claim.id, error = %err, "context retrieval failed");
                steps.push(ValidationStep::new(
                    Stage::RetrieveContext,
                    StepStatus::Warning,
                    format!("Context retrieval unavailable: {err}"),
                ));
                Vec::new()
            }
            Err(_) => {
                warn!(claim_id = %claim.id, "context retrieval timed out");
                steps.push(ValidationStep::new(
                    Stage::RetrieveContext,
                    StepStatus::Warning,
                    format!("Context retrieval timed out after {budget:?}"),
                ));
                Vec::new()
            }
        }
    }

    /// Stage 2: failures substitute the no-coverage default
    async fn run_coverage(
        &self,
        claim: &Claim,
        policy: &Policy,
        fragments: &[ContextFragment],
        steps: &mut Vec<ValidationStep>,
    ) -> CoverageAnalysis {
        let budget = self.config.oracle_timeout;
        let outcome = tokio::time::timeout(
            budget,
            coverage::analyze_coverage(self.oracle.as_ref(), claim, policy, fragments, budget),
        )
        .await
        .unwrap_or(Err(OracleError::Timeout(budget)));

        match outcome {
            Ok(analysis) => {
                let (status, details) = if analysis.coverage_applies {
                    (
                        StepStatus::Passed,
                        format!(
                            "Coverage applies ({})",
                            analysis.matched_coverage_type.as_deref().unwrap_or("unspecified")
                        ),
                    )
                } else {
                    (StepStatus::Failed, "No coverage applies".to_string())
                };
                steps.push(
                    ValidationStep::new(Stage::AnalyzeCoverage, status, details)
                        .with_data(serde_json::to_value(&analysis).unwrap_or(Value::Null)),
                );
                analysis
            }
            Err(err) => {
                warn!(claim_id = %claim.id, error = %err, "coverage analysis failed");
                steps.push(ValidationStep::new(
                    Stage::AnalyzeCoverage,
                    StepStatus::Error,
                    format!("Coverage analysis failed, assuming no coverage: {err}"),
                ));
                CoverageAnalysis::conservative()
            }
        }
    }

    /// Stage 3: failures substitute the no-exclusions default
    async fn run_exclusions(
        &self,
        claim: &Claim,
        policy: &Policy,
        steps: &mut Vec<ValidationStep>,
    ) -> ExclusionAnalysis {
        let budget = self.config.oracle_timeout;
        let outcome = tokio::time::timeout(
            budget,
            exclusion::analyze_exclusions(self.oracle.as_ref(), claim, policy, budget),
        )
        .await
        .unwrap_or(Err(OracleError::Timeout(budget)));

        match outcome {
            Ok(analysis) => {
                let (status, details) = if analysis.claim_excluded {
                    (
                        StepStatus::Failed,
                        format!("{} exclusion(s) triggered", analysis.triggered.len()),
                    )
                } else {
                    (StepStatus::Passed, "No exclusions apply".to_string())
                };
                steps.push(
                    ValidationStep::new(Stage::AnalyzeExclusions, status, details)
                        .with_data(serde_json::to_value(&analysis).unwrap_or(Value::Null)),
                );
                analysis
            }
            Err(err) => {
                warn!(claim_id = %claim.id, error = %err, "exclusion analysis failed");
                steps.push(ValidationStep::new(
                    Stage::AnalyzeExclusions,
                    StepStatus::Error,
                    format!("Exclusion analysis failed, assuming no exclusions: {err}"),
                ));
                ExclusionAnalysis::none()
            }
        }
    }

    /// Stage 6: failures substitute the deterministic fallback
    async fn run_synthesis(
        &self,
        claim: &Claim,
        coverage: &CoverageAnalysis,
        exclusions: &ExclusionAnalysis,
        fraud: &crate::fraud::FraudAnalysis,
        payout: &crate::payout::PayoutCalculation,
        steps: &mut Vec<ValidationStep>,
    ) -> RecommendationOutcome {
        let budget = self.config.oracle_timeout;
        let outcome = tokio::time::timeout(
            budget,
            recommendation::synthesize(
                self.oracle.as_ref(),
                claim,
                coverage,
                exclusions,
                fraud,
                payout,
                budget,
            ),
        )
        .await
        .unwrap_or(Err(OracleError::Timeout(budget)));

        match outcome {
            Ok(outcome) => {
                steps.push(
                    ValidationStep::new(
                        Stage::Synthesize,
                        StepStatus::Passed,
                        format!("Recommendation: {}", outcome.recommendation),
                    )
                    .with_data(serde_json::to_value(&outcome).unwrap_or(Value::Null)),
                );
                outcome
            }
            Err(err) => {
                warn!(claim_id = %claim.id, error = %err, "synthesis failed, using fallback");
                let fallback = recommendation::fallback_recommendation(coverage, exclusions, fraud);
                steps.push(
                    ValidationStep::new(
                        Stage::Synthesize,
                        StepStatus::Error,
                        format!(
                            "Synthesis failed, fallback recommendation {}: {err}",
                            fallback.recommendation
                        ),
                    )
                    .with_data(serde_json::to_value(&fallback).unwrap_or(Value::Null)),
                );
                fallback
            }
        }
    }
}
