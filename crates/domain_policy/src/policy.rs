//! The policy aggregate

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::coverage::CoverageItem;
use crate::error::PolicyError;
use crate::exclusion::Exclusion;
use core_kernel::PolicyId;

/// Line of business
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyType {
    Health,
    Auto,
    Home,
    Life,
    Travel,
}

/// Policy lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyStatus {
    Draft,
    Active,
    Expired,
    Cancelled,
    Suspended,
}

/// A policy with its extracted coverage items and exclusions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    /// Unique identifier
    pub id: PolicyId,
    /// Policy number as printed on the document
    pub policy_number: String,
    /// Line of business
    pub policy_type: PolicyType,
    /// Policy holder name
    pub holder_name: String,
    /// Coverage start date
    pub effective_date: NaiveDate,
    /// Coverage end date
    pub expiration_date: NaiveDate,
    /// Lifecycle status
    pub status: PolicyStatus,
    /// Coverage items
    pub coverage_items: Vec<CoverageItem>,
    /// Exclusion clauses
    pub exclusions: Vec<Exclusion>,
}

impl Policy {
    /// Creates a new active policy
    pub fn new(
        policy_number: impl Into<String>,
        policy_type: PolicyType,
        holder_name: impl Into<String>,
        effective_date: NaiveDate,
        expiration_date: NaiveDate,
    ) -> Result<Self, PolicyError> {
        if expiration_date <= effective_date {
            return Err(PolicyError::InvalidPeriod {
                effective: effective_date,
                expiration: expiration_date,
            });
        }

        Ok(Self {
            id: PolicyId::new_v7(),
            policy_number: policy_number.into(),
            policy_type,
            holder_name: holder_name.into(),
            effective_date,
            expiration_date,
            status: PolicyStatus::Active,
            coverage_items: Vec::new(),
            exclusions: Vec::new(),
        })
    }

    /// Adds a coverage item
    pub fn add_coverage(&mut self, item: CoverageItem) {
        self.coverage_items.push(item);
    }

    /// Adds an exclusion
    pub fn add_exclusion(&mut self, exclusion: Exclusion) {
        self.exclusions.push(exclusion);
    }

    /// Returns the coverage items applicable to a claim type
    pub fn applicable_coverage(&self, claim_type: &str) -> Vec<&CoverageItem> {
        self.coverage_items
            .iter()
            .filter(|item| item.covers(claim_type))
            .collect()
    }

    /// Returns the exclusions whose keywords match an incident description,
    /// plus any keyword-less exclusions (those are always candidates)
    pub fn candidate_exclusions(&self, description: &str) -> Vec<&Exclusion> {
        self.exclusions
            .iter()
            .filter(|e| e.keywords.is_empty() || e.matches_description(description))
            .collect()
    }

    /// Returns true if the policy was in force on the given date
    pub fn in_force_on(&self, date: NaiveDate) -> bool {
        self.status == PolicyStatus::Active
            && date >= self.effective_date
            && date <= self.expiration_date
    }
}
