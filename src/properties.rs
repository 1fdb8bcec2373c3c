//! Property-based tests for the auditor.
//!
//! These tests use proptest to verify invariants around:
//! - Length bounds
//! - Requirement check order
//! - Strength verdict against the complexity threshold
//! - Determinism of repeated audits

use crate::auditor::audit;
use crate::complexity::Complexity;
use crate::error::AuditError;
use crate::policy::Policy;
use crate::sections::CharClasses;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Passwords drawn from every class, including non-ASCII letters and
/// characters that belong to no class.
fn arb_password() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            prop::char::range('0', '9'),
            prop::char::range('a', 'z'),
            prop::char::range('A', 'Z'),
            prop::sample::select(crate::sections::classes::SYMBOLS.chars().collect::<Vec<_>>()),
            prop::sample::select(vec!['ø', 'ß', 'Ж', 'λ', '字', '€', '٣', 'ⓐ', 'Ⅻ', ' ', '\\']),
        ],
        0..32,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn arb_complexity() -> impl Strategy<Value = Complexity> {
    prop::sample::select(Complexity::ALL.to_vec())
}

fn arb_policy() -> impl Strategy<Value = Policy> {
    (
        0usize..16,
        0usize..32,
        any::<[bool; 5]>(),
        arb_complexity(),
    )
        .prop_map(|(min_length, max_length, req, minimum_complexity)| Policy {
            min_length,
            max_length,
            require_digits: req[0],
            require_lower: req[1],
            require_upper: req[2],
            require_symbols: req[3],
            require_extended: req[4],
            minimum_complexity,
        })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn below_min_length_is_too_short(password in arb_password(), extra in 1usize..8) {
        let length = password.chars().count();
        let policy = Policy::default().with_min_length(length + extra);
        let outcome = audit(&password, &policy);
        let is_too_short = matches!(outcome.error, Some(AuditError::TooShort { .. }));
        prop_assert!(is_too_short);
        prop_assert_eq!(outcome.length, length);
    }

    #[test]
    fn above_max_length_is_too_long(password in arb_password(), max in 1usize..32) {
        let length = password.chars().count();
        let outcome = audit(&password, &Policy::default().with_max_length(max));
        if length > max {
            prop_assert_eq!(outcome.error, Some(AuditError::TooLong { length, max }));
        } else {
            prop_assert!(outcome.is_ok());
        }
    }

    #[test]
    fn zero_max_length_never_rejects(password in arb_password()) {
        prop_assert!(audit(&password, &Policy::default()).is_ok());
    }

    #[test]
    fn first_missing_class_is_reported(password in arb_password(), req in any::<[bool; 5]>()) {
        let classes = CharClasses::scan(&password);
        let policy = Policy {
            require_digits: req[0],
            require_lower: req[1],
            require_upper: req[2],
            require_symbols: req[3],
            require_extended: req[4],
            ..Policy::default()
        };

        let expected = [
            (req[0] && !classes.digits, AuditError::MissingDigits),
            (req[1] && !classes.lower, AuditError::MissingLower),
            (req[2] && !classes.upper, AuditError::MissingUpper),
            (req[3] && !classes.symbols, AuditError::MissingSymbols),
            (req[4] && !classes.extended, AuditError::MissingExtended),
        ]
        .into_iter()
        .find(|(missing, _)| *missing)
        .map(|(_, err)| err);

        prop_assert_eq!(audit(&password, &policy).error, expected);
    }

    #[test]
    fn strong_iff_tier_meets_threshold(password in arb_password(), policy in arb_policy()) {
        let outcome = audit(&password, &policy);
        if outcome.is_ok() {
            prop_assert_eq!(outcome.strong, outcome.complexity >= policy.minimum_complexity);
            prop_assert!(outcome.entropy.is_finite());
            prop_assert!(outcome.entropy >= 0.0);
        } else {
            prop_assert!(!outcome.strong);
            prop_assert_eq!(outcome.entropy, 0.0);
        }
    }

    #[test]
    fn audit_is_deterministic(password in arb_password(), policy in arb_policy()) {
        let first = audit(&password, &policy);
        let second = audit(&password, &policy);
        prop_assert_eq!(first.entropy.to_bits(), second.entropy.to_bits());
        prop_assert_eq!(first, second);
    }
}
