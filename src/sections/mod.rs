//! Password audit sections
//!
//! Each section handles one stage of the audit. The auditor runs them in order
//! and stops at the first failure.

pub mod classes;
pub mod entropy;
mod length;
mod requirements;

pub use classes::CharClasses;
pub use length::{char_length, length_section};
pub use requirements::requirements_section;

use crate::error::AuditError;

/// Result type for section functions.
/// - `Ok(())` - Section passed
/// - `Err(reason)` - Audit stops with this error
pub type SectionResult = Result<(), AuditError>;
