//! Claim aggregate

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ClaimError;
use core_kernel::{ClaimId, Money, PolicyId};

/// Claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    /// Being drafted by the claimant
    Draft,
    /// Submitted, awaiting triage
    Submitted,
    /// Under manual review
    UnderReview,
    /// Waiting for supporting documents
    PendingDocuments,
    /// Waiting for additional information
    PendingInfo,
    /// Automated validation in progress
    Validating,
    /// Approved for payment
    Approved,
    /// Approved for a reduced amount
    PartiallyApproved,
    /// Denied
    Denied,
    /// Flagged by fraud detection
    FlaggedFraud,
    /// Under fraud investigation
    Investigating,
    /// Settled and closed
    Closed,
    /// Withdrawn by the claimant
    Cancelled,
}

impl ClaimStatus {
    /// Returns true if no further transitions are allowed
    pub fn is_terminal(&self) -> bool {
        matches!(self, ClaimStatus::Closed | ClaimStatus::Cancelled)
    }
}

/// Category of the claimed loss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimType {
    Medical,
    Hospitalization,
    Surgery,
    Medication,
    Accident,
    PropertyDamage,
    Theft,
    Liability,
    DeathBenefit,
}

impl ClaimType {
    /// Label used in prompts and coverage-type matching
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimType::Medical => "medical",
            ClaimType::Hospitalization => "hospitalization",
            ClaimType::Surgery => "surgery",
            ClaimType::Medication => "medication",
            ClaimType::Accident => "accident",
            ClaimType::PropertyDamage => "property_damage",
            ClaimType::Theft => "theft",
            ClaimType::Liability => "liability",
            ClaimType::DeathBenefit => "death_benefit",
        }
    }
}

impl std::fmt::Display for ClaimType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A claim against a policy
///
/// Once validation begins the claim snapshot is treated as immutable; the
/// pipeline never writes back into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,
    /// Claim number
    pub claim_number: String,
    /// Policy the claim is made against
    pub policy_id: PolicyId,
    /// Claimant name
    pub claimant_name: String,
    /// Category of loss
    pub claim_type: ClaimType,
    /// Amount claimed (non-negative)
    pub claimed_amount: Money,
    /// Date of the incident
    pub incident_date: NaiveDate,
    /// What happened
    pub incident_description: String,
    /// Where it happened
    pub incident_location: Option<String>,
    /// Status
    pub status: ClaimStatus,
    /// Submission timestamp
    pub submitted_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Claim {
    /// Creates a newly submitted claim
    ///
    /// Rejects negative claimed amounts; zero is allowed (e.g. a claim
    /// lodged for record-keeping before costs are known).
    pub fn submit(
        policy_id: PolicyId,
        claimant_name: impl Into<String>,
        claim_type: ClaimType,
        incident_date: NaiveDate,
        incident_description: impl Into<String>,
        claimed_amount: Money,
    ) -> Result<Self, ClaimError> {
        if claimed_amount.is_negative() {
            return Err(ClaimError::InvalidAmount(claimed_amount.to_string()));
        }

        let now = Utc::now();
        Ok(Self {
            id: ClaimId::new_v7(),
            claim_number: generate_claim_number(),
            policy_id,
            claimant_name: claimant_name.into(),
            claim_type,
            claimed_amount,
            incident_date,
            incident_description: incident_description.into(),
            incident_location: None,
            status: ClaimStatus::Submitted,
            submitted_at: now,
            updated_at: now,
        })
    }

    /// Sets the incident location
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.incident_location = Some(location.into());
        self
    }

    /// Updates the status, rejecting invalid transitions
    pub fn update_status(&mut self, status: ClaimStatus) -> Result<(), ClaimError> {
        if !self.can_transition_to(status) {
            return Err(ClaimError::InvalidStatusTransition {
                from: format!("{:?}", self.status),
                to: format!("{:?}", status),
            });
        }
        self.status = status;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Checks if transition is valid
    fn can_transition_to(&self, target: ClaimStatus) -> bool {
        use ClaimStatus::*;
        matches!(
            (self.status, target),
            (Draft, Submitted)
                | (Draft, Cancelled)
                | (Submitted, UnderReview)
                | (Submitted, PendingDocuments)
                | (Submitted, Cancelled)
                | (UnderReview, Validating)
                | (UnderReview, PendingInfo)
                | (UnderReview, PendingDocuments)
                | (PendingDocuments, UnderReview)
                | (PendingDocuments, Cancelled)
                | (PendingInfo, UnderReview)
                | (PendingInfo, Cancelled)
                | (Validating, Approved)
                | (Validating, PartiallyApproved)
                | (Validating, Denied)
                | (Validating, FlaggedFraud)
                | (Approved, Closed)
                | (PartiallyApproved, Closed)
                | (Denied, Closed)
                | (Denied, UnderReview) // appeal
                | (FlaggedFraud, Investigating)
                | (Investigating, Approved)
                | (Investigating, Denied)
                | (Investigating, Closed)
        )
    }
}

fn generate_claim_number() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("CLM-{}", duration.as_millis() % 10_000_000_000)
}
