//! Classes section - scans the password once and records which character classes appear.

use unicode_general_category::{GeneralCategory, get_general_category};

/// The fixed punctuation set counted as symbols.
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{}|;:'\",.<>?/`~";

/// Rough alphabet size credited to extended (non-ASCII) letters.
pub const EXTENDED_ALPHABET: usize = 100;

/// Character classes present in a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharClasses {
    pub digits: bool,
    pub lower: bool,
    pub upper: bool,
    pub symbols: bool,
    pub extended: bool,
}

impl CharClasses {
    /// Classifies every character of `password` in a single pass.
    ///
    /// Only ASCII counts for digits, lower and upper. `extended` is set
    /// by characters above U+007F in General Category L; non-ASCII digits,
    /// symbols and letterlike symbols count for nothing.
    pub fn scan(password: &str) -> Self {
        let mut classes = Self::default();
        for c in password.chars() {
            match c {
                '0'..='9' => classes.digits = true,
                'a'..='z' => classes.lower = true,
                'A'..='Z' => classes.upper = true,
                c if SYMBOLS.contains(c) => classes.symbols = true,
                c if !c.is_ascii() && is_letter(c) => classes.extended = true,
                _ => {}
            }
        }
        classes
    }

    /// True if any ASCII class (digits, lower, upper, symbols) is present.
    pub fn has_ascii(&self) -> bool {
        self.digits || self.lower || self.upper || self.symbols
    }

    /// Estimated alphabet size for the classes present.
    pub fn charset_size(&self) -> usize {
        let mut size = 0;
        if self.digits {
            size += 10;
        }
        if self.lower {
            size += 26;
        }
        if self.upper {
            size += 26;
        }
        if self.symbols {
            size += SYMBOLS.chars().count();
        }
        if self.extended {
            size += EXTENDED_ALPHABET;
        }
        size
    }
}

/// General Category L (Lu, Ll, Lt, Lm, Lo).
fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}
