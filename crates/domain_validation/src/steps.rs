//! Audit trail for validation runs
//!
//! Every pipeline stage appends exactly one [`ValidationStep`], whether it
//! succeeded, degraded, or failed outright. The step log is append-only and
//! its order always equals the fixed stage sequence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The pipeline stages, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    RetrieveContext,
    AnalyzeCoverage,
    AnalyzeExclusions,
    DetectFraud,
    CalculatePayout,
    Synthesize,
}

impl Stage {
    /// The fixed execution sequence
    pub const SEQUENCE: [Stage; 6] = [
        Stage::RetrieveContext,
        Stage::AnalyzeCoverage,
        Stage::AnalyzeExclusions,
        Stage::DetectFraud,
        Stage::CalculatePayout,
        Stage::Synthesize,
    ];

    /// Step name as recorded in the audit trail
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::RetrieveContext => "retrieve_context",
            Stage::AnalyzeCoverage => "analyze_coverage",
            Stage::AnalyzeExclusions => "analyze_exclusions",
            Stage::DetectFraud => "detect_fraud",
            Stage::CalculatePayout => "calculate_payout",
            Stage::Synthesize => "synthesize",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of one stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    /// Stage completed and its check was favourable
    Passed,
    /// Stage completed and its check was unfavourable (e.g. not covered)
    Failed,
    /// Stage completed in a degraded way (e.g. retrieval returned nothing)
    Warning,
    /// Stage itself errored; its conservative default was substituted
    Error,
    /// Stage was not executed
    Skipped,
}

/// One audit-trail entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationStep {
    /// Which stage produced this step
    pub stage: Stage,
    /// Outcome
    pub status: StepStatus,
    /// Human-readable detail
    pub details: String,
    /// Structured stage output for display and audit
    pub data: Value,
    /// When the step was recorded
    pub timestamp: DateTime<Utc>,
}

impl ValidationStep {
    /// Creates a step with empty payload
    pub fn new(stage: Stage, status: StepStatus, details: impl Into<String>) -> Self {
        Self {
            stage,
            status,
            details: details.into(),
            data: Value::Null,
            timestamp: Utc::now(),
        }
    }

    /// Attaches a structured payload
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }
}
