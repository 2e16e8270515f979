//! Policy domain errors

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur in the policy domain
#[derive(Debug, Error)]
pub enum PolicyError {
    /// Invalid coverage configuration
    #[error("Invalid coverage: {0}")]
    InvalidCoverage(String),

    /// Copay percentage outside 0-100
    #[error("Copay percentage out of range: {0}")]
    InvalidCopayPercentage(Decimal),

    /// Expiration date not after effective date
    #[error("Invalid policy period: effective {effective}, expiration {expiration}")]
    InvalidPeriod {
        effective: NaiveDate,
        expiration: NaiveDate,
    },
}
