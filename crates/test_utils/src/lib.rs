//! Test Utilities Crate
//!
//! Provides shared test infrastructure for the claim validation test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built policies and claims for common scenarios
//! - `builders`: Builder patterns for test data construction
//! - `stubs`: Deterministic oracle and retriever implementations
//! - `generators`: Property-based test data generators
//! - `logging`: Process-wide tracing setup for tests

pub mod builders;
pub mod fixtures;
pub mod generators;
pub mod logging;
pub mod stubs;

pub use builders::*;
pub use fixtures::*;
pub use generators::*;
pub use logging::init_test_tracing;
pub use stubs::*;
