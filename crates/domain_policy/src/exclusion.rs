//! Policy exclusions and their exception carve-outs

use serde::{Deserialize, Serialize};

use core_kernel::ExclusionId;

/// How strictly an exclusion applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionSeverity {
    /// Exclusion can be overridden by a listed exception
    Standard,
    /// Exclusion admits no exceptions
    Absolute,
}

/// An exclusion clause extracted from a policy document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exclusion {
    /// Unique identifier for this exclusion
    pub id: ExclusionId,
    /// Category label, e.g. "pre-existing conditions"
    pub category: String,
    /// Full clause description
    pub description: String,
    /// Keywords that suggest the exclusion may be relevant to a claim
    pub keywords: Vec<String>,
    /// Cases where the exclusion does not apply
    pub exceptions: Vec<String>,
    /// Severity of the exclusion
    pub severity: ExclusionSeverity,
}

impl Exclusion {
    /// Creates a new standard exclusion
    pub fn new(category: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: ExclusionId::new_v7(),
            category: category.into(),
            description: description.into(),
            keywords: Vec::new(),
            exceptions: Vec::new(),
            severity: ExclusionSeverity::Standard,
        }
    }

    /// Sets the trigger keywords
    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }

    /// Sets the exception carve-outs
    pub fn with_exceptions(mut self, exceptions: Vec<String>) -> Self {
        self.exceptions = exceptions;
        self
    }

    /// Marks the exclusion as absolute (no exceptions admitted)
    pub fn absolute(mut self) -> Self {
        self.severity = ExclusionSeverity::Absolute;
        self
    }

    /// Returns true if any keyword appears in the given incident description
    ///
    /// Case-insensitive substring scan. Used only to shortlist candidate
    /// exclusions for analysis; whether an exclusion actually applies is
    /// decided downstream.
    pub fn matches_description(&self, description: &str) -> bool {
        let haystack = description.to_lowercase();
        self.keywords
            .iter()
            .any(|kw| haystack.contains(&kw.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let exclusion = Exclusion::new("hazardous activities", "Injuries from extreme sports")
            .with_keywords(vec!["skydiving".to_string(), "Bungee".to_string()]);

        assert!(exclusion.matches_description("Injured while Skydiving in Spain"));
        assert!(exclusion.matches_description("bungee jump accident"));
        assert!(!exclusion.matches_description("slipped on wet floor"));
    }

    #[test]
    fn test_no_keywords_never_matches() {
        let exclusion = Exclusion::new("general", "catch-all");
        assert!(!exclusion.matches_description("anything at all"));
    }

    #[test]
    fn test_absolute_severity() {
        let exclusion = Exclusion::new("fraudulent claims", "Claims arising from fraud").absolute();
        assert_eq!(exclusion.severity, ExclusionSeverity::Absolute);
    }
}
