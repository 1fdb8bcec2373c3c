//! Password policy audit library
//!
//! This library checks a password against a configurable [`Policy`] and
//! reports an [`Outcome`]: length, entropy estimate, complexity tier and
//! whether the tier meets the policy's minimum.
//!
//! # Features
//!
//! - `async`: Enables `audit_tx`, which delivers the outcome over a tokio channel
//! - `tracing`: Enables logging via tracing crate
//!
//! `cargo test --all-features` runs the full suite, including the async tests.
//!
//! # Environment Variables
//!
//! Read only by [`Policy::from_env`], never by [`audit`]:
//!
//! - `PWD_AUDIT_MIN_LENGTH`, `PWD_AUDIT_MAX_LENGTH`: length bounds (0 max = unbounded)
//! - `PWD_AUDIT_REQUIRE_DIGITS`, `PWD_AUDIT_REQUIRE_LOWER`, `PWD_AUDIT_REQUIRE_UPPER`,
//!   `PWD_AUDIT_REQUIRE_SYMBOLS`, `PWD_AUDIT_REQUIRE_EXTENDED`: required classes
//! - `PWD_AUDIT_MIN_COMPLEXITY`: minimum tier for a strong verdict (0-14)
//!
//! # Example
//!
//! ```rust
//! use pwd_audit::{audit, Complexity, Policy};
//!
//! let policy = Policy::default()
//!     .with_min_length(8)
//!     .require_digits(true)
//!     .with_minimum_complexity(Complexity::DigitsMixed);
//!
//! let outcome = audit("MyP@ssw0rd!", &policy);
//! assert!(outcome.is_ok());
//! assert_eq!(outcome.complexity, Complexity::SymbolsDigitsMixed);
//! assert!(outcome.strong);
//! ```

// Internal modules
mod auditor;
mod complexity;
mod error;
mod outcome;
mod policy;
mod sections;

#[cfg(test)]
mod properties;

// Public API
pub use auditor::{audit, audit_secret};
pub use complexity::Complexity;
pub use error::{AuditError, PolicyError};
pub use outcome::Outcome;
pub use policy::{ENV_PREFIX, Policy};
pub use sections::CharClasses;
pub use sections::classes::SYMBOLS;
pub use sections::entropy::estimate as estimate_entropy;

#[cfg(feature = "async")]
pub use auditor::audit_tx;
