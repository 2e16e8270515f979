//! Claim Validation Pipeline
//!
//! This crate evaluates a claim against a policy and produces a structured,
//! auditable decision: whether coverage applies, whether exclusions void the
//! claim, an estimated fraud risk, a computed payout, and a final
//! recommendation with a confidence score.
//!
//! # Pipeline
//!
//! ```text
//! RetrieveContext -> AnalyzeCoverage -> AnalyzeExclusions
//!     -> DetectFraud -> CalculatePayout -> Synthesize
//! ```
//!
//! Stages run strictly in order. A failing stage never aborts the pipeline:
//! its output is replaced with that stage's conservative default, the
//! failure is recorded as an audit step, and the run continues. The only
//! hard failure is an invalid claim/policy pairing.
//!
//! The two external collaborators - a reasoning oracle (LLM completion to
//! JSON) and a context retriever (semantic search over policy text) - are
//! consumed through the [`ReasoningOracle`] and [`ContextRetriever`]
//! capability traits and injected into the [`ClaimValidator`], so tests run
//! against deterministic stubs.

pub mod coverage;
pub mod error;
pub mod exclusion;
pub mod fraud;
pub mod oracle;
pub mod orchestrator;
mod parse;
pub mod payout;
pub mod prompts;
pub mod recommendation;
pub mod result;
pub mod retriever;
pub mod steps;

pub use coverage::CoverageAnalysis;
pub use error::ValidationError;
pub use exclusion::{ExclusionAnalysis, TriggeredExclusion};
pub use fraud::{
    FraudAnalysis, FraudDetector, FraudIndicator, FraudIndicatorType, FraudRule, FraudSeverity,
};
pub use oracle::{OracleError, ReasoningOracle};
pub use orchestrator::{ClaimValidator, ValidatorConfig};
pub use payout::{calculate_payout, BreakdownLine, PayoutCalculation};
pub use recommendation::{Recommendation, RecommendationOutcome};
pub use result::ClaimValidationResult;
pub use retriever::{ContextFragment, ContextRetriever, RetrievalError};
pub use steps::{Stage, StepStatus, ValidationStep};
