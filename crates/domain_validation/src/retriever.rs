//! Context retriever capability interface
//!
//! The retriever is an external semantic-search service that returns policy
//! text fragments relevant to a claim. It is read-only; a failed or slow
//! retrieval degrades the pipeline to an empty evidence set.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use core_kernel::PolicyId;

/// Errors from the context retriever
#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("Retrieval service unreachable: {0}")]
    Unreachable(String),

    #[error("Retrieval timed out after {0:?}")]
    Timeout(Duration),

    #[error("No documents indexed for this policy")]
    EmptyIndex,
}

/// One retrieved policy text fragment, ranked by relevance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextFragment {
    /// The fragment text
    pub content: String,
    /// Source metadata (document, section, page, ...)
    pub source: Value,
    /// Relevance score assigned by the search service
    pub score: f64,
}

impl ContextFragment {
    /// Creates a fragment with empty source metadata
    pub fn new(content: impl Into<String>, score: f64) -> Self {
        Self {
            content: content.into(),
            source: Value::Null,
            score,
        }
    }
}

/// External semantic-search capability over policy text
#[async_trait]
pub trait ContextRetriever: Send + Sync {
    /// Returns up to `k` fragments relevant to the query, best first
    async fn search(
        &self,
        query: &str,
        policy_id: PolicyId,
        k: usize,
        timeout: Duration,
    ) -> Result<Vec<ContextFragment>, RetrievalError>;
}
