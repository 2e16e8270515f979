//! Validation pipeline errors
//!
//! Only pre-flight failures abort a validation run; stage failures degrade
//! into conservative defaults and show up as error steps in the audit trail
//! instead.

use core_kernel::{ClaimId, PolicyId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("claim {claim_id} references policy {expected}, got policy {actual}")]
    PolicyMismatch {
        claim_id: ClaimId,
        expected: PolicyId,
        actual: PolicyId,
    },
}
