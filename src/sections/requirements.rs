//! Requirements section - enforces the character classes the policy demands.

use super::SectionResult;
use super::classes::CharClasses;
use crate::error::AuditError;
use crate::policy::Policy;

/// Checks required classes in the order digits, lower, upper, symbols, extended.
///
/// Only the first missing class is reported.
pub fn requirements_section(classes: &CharClasses, policy: &Policy) -> SectionResult {
    let checks = [
        (policy.require_digits, classes.digits, AuditError::MissingDigits),
        (policy.require_lower, classes.lower, AuditError::MissingLower),
        (policy.require_upper, classes.upper, AuditError::MissingUpper),
        (policy.require_symbols, classes.symbols, AuditError::MissingSymbols),
        (policy.require_extended, classes.extended, AuditError::MissingExtended),
    ];

    for (required, present, err) in checks {
        if required && !present {
            return Err(err);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn require_all() -> Policy {
        Policy::default()
            .require_digits(true)
            .require_lower(true)
            .require_upper(true)
            .require_symbols(true)
            .require_extended(true)
    }

    #[test]
    fn test_requirements_nothing_required() {
        let classes = CharClasses::default();
        assert_eq!(requirements_section(&classes, &Policy::default()), Ok(()));
    }

    #[test]
    fn test_requirements_first_missing_wins() {
        let policy = require_all();
        assert_eq!(
            requirements_section(&CharClasses::scan(""), &policy),
            Err(AuditError::MissingDigits)
        );
        assert_eq!(
            requirements_section(&CharClasses::scan("1"), &policy),
            Err(AuditError::MissingLower)
        );
        assert_eq!(
            requirements_section(&CharClasses::scan("1a"), &policy),
            Err(AuditError::MissingUpper)
        );
        assert_eq!(
            requirements_section(&CharClasses::scan("1aA"), &policy),
            Err(AuditError::MissingSymbols)
        );
        assert_eq!(
            requirements_section(&CharClasses::scan("1aA!"), &policy),
            Err(AuditError::MissingExtended)
        );
        assert_eq!(requirements_section(&CharClasses::scan("1aA!é"), &policy), Ok(()));
    }

    #[test]
    fn test_requirements_missing_symbols() {
        let policy = Policy::default().require_symbols(true);
        assert_eq!(
            requirements_section(&CharClasses::scan("Password123"), &policy),
            Err(AuditError::MissingSymbols)
        );
    }

    #[test]
    fn test_requirements_missing_upper() {
        let policy = Policy::default().require_upper(true);
        assert_eq!(
            requirements_section(&CharClasses::scan("password123!"), &policy),
            Err(AuditError::MissingUpper)
        );
    }
}
