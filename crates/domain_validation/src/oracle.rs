//! Reasoning oracle capability interface
//!
//! The oracle is an external natural-language completion service consulted
//! for semantic judgments (coverage applicability, exclusion applicability,
//! final recommendation). The pipeline exchanges JSON with it and treats
//! every failure mode - unreachable, slow, or babbling - as a typed error
//! the orchestrator recovers from.

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors from the reasoning oracle
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("Reasoning service unreachable: {0}")]
    Unreachable(String),

    #[error("Reasoning call timed out after {0:?}")]
    Timeout(Duration),

    #[error("Malformed response from reasoning service: {0}")]
    MalformedResponse(String),
}

/// External natural-language-to-structured-JSON capability
///
/// Implementations wrap a concrete LLM provider. They must honor the given
/// timeout; the orchestrator additionally enforces it, so an ill-behaved
/// implementation degrades the stage rather than hanging the pipeline.
#[async_trait]
pub trait ReasoningOracle: Send + Sync {
    /// Sends a prompt and returns the parsed JSON response
    async fn complete_json(&self, prompt: &str, timeout: Duration) -> Result<Value, OracleError>;

    /// Identifier of the underlying model, recorded in validation results
    fn model_name(&self) -> &str;
}

/// Parses raw oracle output into JSON
///
/// Strips optional markdown code fences first; anything that then fails to
/// parse is a [`OracleError::MalformedResponse`], never a partial recovery.
pub fn parse_json_response(raw: &str) -> Result<Value, OracleError> {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }
    serde_json::from_str(text.trim()).map_err(|e| OracleError::MalformedResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_json() {
        let parsed = parse_json_response(r#"{"coverage_applies": true}"#).unwrap();
        assert_eq!(parsed["coverage_applies"], Value::Bool(true));
    }

    #[test]
    fn test_parse_fenced_json() {
        let raw = "```json\n{\"confidence\": 0.9}\n```";
        let parsed = parse_json_response(raw).unwrap();
        assert_eq!(parsed["confidence"], serde_json::json!(0.9));
    }

    #[test]
    fn test_parse_plain_fence() {
        let raw = "```\n{\"a\": 1}\n```";
        assert!(parse_json_response(raw).is_ok());
    }

    #[test]
    fn test_parse_prose_is_malformed() {
        let result = parse_json_response("The claim looks fine to me.");
        assert!(matches!(result, Err(OracleError::MalformedResponse(_))));
    }
}
