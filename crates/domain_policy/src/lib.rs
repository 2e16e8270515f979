//! Policy Domain
//!
//! This crate models the structured policy data the validation pipeline
//! reasons over: coverage items with their financial terms, exclusions with
//! their exception carve-outs, and the policy that ties them together.
//!
//! The policy here is the *extracted* form of a policy document; document
//! ingestion and the extraction pipeline itself live outside this workspace.

pub mod coverage;
pub mod error;
pub mod exclusion;
pub mod policy;

pub use coverage::CoverageItem;
pub use error::PolicyError;
pub use exclusion::{Exclusion, ExclusionSeverity};
pub use policy::{Policy, PolicyStatus, PolicyType};
