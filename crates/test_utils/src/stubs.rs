//! Deterministic Oracle and Retriever Stubs
//!
//! Stand-ins for the external reasoning and retrieval services. The
//! scripted oracle dispatches on the prompt section headers, so one stub
//! serves all three reasoning stages of a validation run.

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

use core_kernel::PolicyId;
use domain_validation::{
    ContextFragment, ContextRetriever, OracleError, ReasoningOracle, RetrievalError,
};

/// Oracle that answers each reasoning stage from a fixed script
///
/// Stage detection keys on the section headers the prompt builders emit:
/// `POLICY COVERAGE ITEMS`, `POLICY EXCLUSIONS`, and `COVERAGE ANALYSIS`.
pub struct ScriptedOracle {
    coverage: Value,
    exclusions: Value,
    recommendation: Value,
    model: String,
}

impl ScriptedOracle {
    pub fn new(coverage: Value, exclusions: Value, recommendation: Value) -> Self {
        Self {
            coverage,
            exclusions,
            recommendation,
            model: "scripted-oracle-v1".to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[async_trait]
impl ReasoningOracle for ScriptedOracle {
    async fn complete_json(&self, prompt: &str, _timeout: Duration) -> Result<Value, OracleError> {
        if prompt.contains("POLICY COVERAGE ITEMS") {
            Ok(self.coverage.clone())
        } else if prompt.contains("POLICY EXCLUSIONS") {
            Ok(self.exclusions.clone())
        } else if prompt.contains("COVERAGE ANALYSIS") {
            Ok(self.recommendation.clone())
        } else {
            Err(OracleError::MalformedResponse(
                "unrecognized prompt".to_string(),
            ))
        }
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Oracle whose every call fails as unreachable
pub struct FailingOracle;

#[async_trait]
impl ReasoningOracle for FailingOracle {
    async fn complete_json(&self, _prompt: &str, _timeout: Duration) -> Result<Value, OracleError> {
        Err(OracleError::Unreachable("connection refused".to_string()))
    }

    fn model_name(&self) -> &str {
        "failing-oracle"
    }
}

/// Oracle that never answers within any budget
pub struct TimeoutOracle;

#[async_trait]
impl ReasoningOracle for TimeoutOracle {
    async fn complete_json(&self, _prompt: &str, timeout: Duration) -> Result<Value, OracleError> {
        tokio::time::sleep(timeout + Duration::from_secs(60)).await;
        Err(OracleError::Timeout(timeout))
    }

    fn model_name(&self) -> &str {
        "timeout-oracle"
    }
}

/// Retriever that returns a fixed fragment list for every query
pub struct StaticRetriever {
    fragments: Vec<ContextFragment>,
}

impl StaticRetriever {
    pub fn new(fragments: Vec<ContextFragment>) -> Self {
        Self { fragments }
    }

    /// A retriever with one generic in-force coverage clause
    pub fn with_sample_clauses() -> Self {
        Self::new(vec![ContextFragment::new(
            "Section 4.2: inpatient hospital care is covered up to the stated annual limit",
            0.91,
        )])
    }

    /// A retriever that finds nothing
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl ContextRetriever for StaticRetriever {
    async fn search(
        &self,
        _query: &str,
        _policy_id: PolicyId,
        k: usize,
        _timeout: Duration,
    ) -> Result<Vec<ContextFragment>, RetrievalError> {
        Ok(self.fragments.iter().take(k).cloned().collect())
    }
}

/// Retriever whose every call fails as unreachable
pub struct FailingRetriever;

#[async_trait]
impl ContextRetriever for FailingRetriever {
    async fn search(
        &self,
        _query: &str,
        _policy_id: PolicyId,
        _k: usize,
        _timeout: Duration,
    ) -> Result<Vec<ContextFragment>, RetrievalError> {
        Err(RetrievalError::Unreachable(
            "vector store offline".to_string(),
        ))
    }
}
