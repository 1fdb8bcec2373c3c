//! Entropy section - estimates information content from length and alphabet size.

use super::classes::CharClasses;

/// Estimates entropy as `length * log2(charset_size)`.
///
/// Returns 0.0 when no class is present, so the empty password (or one made
/// only of unclassified characters) never yields `-inf` or `NaN`.
pub fn estimate(length: usize, classes: &CharClasses) -> f64 {
    let charset_size = classes.charset_size();
    if charset_size == 0 {
        return 0.0;
    }
    length as f64 * (charset_size as f64).log2()
}
