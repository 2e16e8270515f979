//! Clearclaim - Explainable insurance claim validation
//!
//! This facade crate re-exports the workspace members so embedders can pull
//! in the whole validation core with a single dependency:
//!
//! - [`core_kernel`]: money types, identifiers, and shared errors
//! - [`domain_policy`]: policies, coverage items, and exclusions
//! - [`domain_claims`]: claims and their lifecycle
//! - [`domain_validation`]: the claim validation pipeline

pub use core_kernel;
pub use domain_claims;
pub use domain_policy;
pub use domain_validation;
