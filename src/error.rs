//! Error types for audits and policy configuration.

use thiserror::Error;

/// Reason an audit was rejected.
///
/// All variants are validation failures: the same password and policy
/// always produce the same error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuditError {
    #[error("password too short: {length} characters, minimum is {min}")]
    TooShort { length: usize, min: usize },
    #[error("password too long: {length} characters, maximum is {max}")]
    TooLong { length: usize, max: usize },
    #[error("password must contain digits")]
    MissingDigits,
    #[error("password must contain lowercase letters")]
    MissingLower,
    #[error("password must contain uppercase letters")]
    MissingUpper,
    #[error("password must contain symbols")]
    MissingSymbols,
    #[error("password must contain extended Unicode characters")]
    MissingExtended,
}

/// Failure while building a [`Policy`](crate::Policy) from the environment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("{key}: expected a non-negative integer, got {value:?}")]
    InvalidNumber { key: String, value: String },
    #[error("{key}: expected a boolean, got {value:?}")]
    InvalidBool { key: String, value: String },
    #[error("complexity tier {0} is out of range (0-14)")]
    InvalidComplexity(u8),
    #[error("max length {max} is below min length {min}")]
    InvalidRange { min: usize, max: usize },
}
