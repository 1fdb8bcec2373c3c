//! Audit outcome.

use crate::complexity::Complexity;
use crate::error::AuditError;

/// Result of auditing one password.
///
/// When `error` is set, only `length` is meaningful; `entropy`, `complexity`,
/// `strong` and `has_extended` stay at their defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outcome {
    pub entropy: f64,
    pub strong: bool,
    /// Character count (code points, not bytes).
    pub length: usize,
    pub complexity: Complexity,
    /// True if the password contains a letter outside ASCII.
    pub has_extended: bool,
    pub error: Option<AuditError>,
}

impl Outcome {
    pub(crate) fn rejected(length: usize, error: AuditError) -> Self {
        Outcome {
            length,
            error: Some(error),
            ..Outcome::default()
        }
    }

    /// True if the password satisfied the policy.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Converts a rejected outcome into its error.
    pub fn into_result(self) -> Result<Outcome, AuditError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self),
        }
    }
}
