//! Complexity tiers and tier selection.

use std::fmt;

use crate::error::PolicyError;
use crate::sections::CharClasses;

/// Ordered strength tier derived from the character classes present.
///
/// Discriminants are part of the contract: policies compare against them
/// numerically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Complexity {
    #[default]
    DigitsOnly = 0,
    LowerOnly = 1,
    UpperOnly = 2,
    LowerDigits = 3,
    UpperDigits = 4,
    MixedOnly = 5,
    DigitsMixed = 6,
    SymbolsOnly = 7,
    SymbolsDigits = 8,
    SymbolsUpper = 9,
    SymbolsLower = 10,
    SymbolsMixed = 11,
    SymbolsDigitsMixed = 12,
    ExtendedOnly = 13,
    /// Extended letters plus at least one ASCII class.
    ExtendedMixed = 14,
}

impl Complexity {
    /// All tiers, weakest first.
    pub const ALL: [Complexity; 15] = [
        Complexity::DigitsOnly,
        Complexity::LowerOnly,
        Complexity::UpperOnly,
        Complexity::LowerDigits,
        Complexity::UpperDigits,
        Complexity::MixedOnly,
        Complexity::DigitsMixed,
        Complexity::SymbolsOnly,
        Complexity::SymbolsDigits,
        Complexity::SymbolsUpper,
        Complexity::SymbolsLower,
        Complexity::SymbolsMixed,
        Complexity::SymbolsDigitsMixed,
        Complexity::ExtendedOnly,
        Complexity::ExtendedMixed,
    ];

    /// Selects the tier for a set of classes.
    ///
    /// Branches are tried in a fixed priority order and the first match wins,
    /// so overlapping combinations do not resolve to "most classes present".
    /// Symbols plus digits is `SymbolsDigits` whether or not lower or upper
    /// letters are also present, unless both are.
    pub fn from_classes(c: &CharClasses) -> Self {
        let CharClasses {
            digits,
            lower,
            upper,
            symbols,
            extended,
        } = *c;

        if extended && !c.has_ascii() {
            Complexity::ExtendedOnly
        } else if extended {
            Complexity::ExtendedMixed
        } else if symbols && digits && lower && upper {
            Complexity::SymbolsDigitsMixed
        } else if symbols && digits {
            Complexity::SymbolsDigits
        } else if symbols && lower && upper {
            Complexity::SymbolsMixed
        } else if symbols && lower {
            Complexity::SymbolsLower
        } else if symbols && upper {
            Complexity::SymbolsUpper
        } else if symbols {
            Complexity::SymbolsOnly
        } else if digits && lower && upper {
            Complexity::DigitsMixed
        } else if lower && digits {
            Complexity::LowerDigits
        } else if upper && digits {
            Complexity::UpperDigits
        } else if lower && upper {
            Complexity::MixedOnly
        } else if digits {
            Complexity::DigitsOnly
        } else if lower {
            Complexity::LowerOnly
        } else if upper {
            Complexity::UpperOnly
        } else {
            // nothing classified
            Complexity::DigitsOnly
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Complexity::DigitsOnly => "digits-only",
            Complexity::LowerOnly => "lower-only",
            Complexity::UpperOnly => "upper-only",
            Complexity::LowerDigits => "lower+digits",
            Complexity::UpperDigits => "upper+digits",
            Complexity::MixedOnly => "lower+upper",
            Complexity::DigitsMixed => "lower+upper+digits",
            Complexity::SymbolsOnly => "symbols-only",
            Complexity::SymbolsDigits => "symbols+digits",
            Complexity::SymbolsUpper => "symbols+upper",
            Complexity::SymbolsLower => "symbols+lower",
            Complexity::SymbolsMixed => "symbols+lower+upper",
            Complexity::SymbolsDigitsMixed => "symbols+lower+upper+digits",
            Complexity::ExtendedOnly => "extended-only",
            Complexity::ExtendedMixed => "extended+mixed",
        }
    }
}

impl TryFrom<u8> for Complexity {
    type Error = PolicyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Complexity::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(PolicyError::InvalidComplexity(value))
    }
}

impl From<Complexity> for u8 {
    fn from(tier: Complexity) -> Self {
        tier.value()
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.value())
    }
}
