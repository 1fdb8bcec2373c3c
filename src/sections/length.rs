//! Length section - counts code points and checks the policy bounds.

use super::SectionResult;
use crate::error::AuditError;
use crate::policy::Policy;

/// Checks the character count of `length` against the policy bounds.
///
/// A `max_length` of 0 means no upper bound.
///
/// # Returns
/// - `Err(TooShort)` if below `min_length`
/// - `Err(TooLong)` if above a non-zero `max_length`
/// - `Ok(())` otherwise
pub fn length_section(length: usize, policy: &Policy) -> SectionResult {
    if length < policy.min_length {
        return Err(AuditError::TooShort {
            length,
            min: policy.min_length,
        });
    }
    if policy.max_length > 0 && length > policy.max_length {
        return Err(AuditError::TooLong {
            length,
            max: policy.max_length,
        });
    }
    Ok(())
}

/// Number of Unicode scalar values in `password`.
pub fn char_length(password: &str) -> usize {
    password.chars().count()
}
