//! Claims Domain
//!
//! This crate implements the claim lifecycle from submission through
//! validation to settlement.
//!
//! # Claim Lifecycle
//!
//! ```text
//! Draft -> Submitted -> Under Review -> Validating -> Approved/Denied -> Closed
//!                                               \-> Flagged Fraud -> Investigating
//! ```

pub mod claim;
pub mod error;

pub use claim::{Claim, ClaimStatus, ClaimType};
pub use error::ClaimError;
