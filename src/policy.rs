//! Policy configuration
//!
//! A [`Policy`] is a plain value built in code or loaded from environment variables.

use crate::complexity::Complexity;
use crate::error::PolicyError;

/// Default prefix for [`Policy::from_env`].
pub const ENV_PREFIX: &str = "PWD_AUDIT_";

/// Requirements a password is audited against.
///
/// The default policy has no class requirements, no length bounds, and a
/// minimum complexity of [`Complexity::DigitsOnly`], so every password passes
/// and is strong.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Policy {
    /// Inclusive lower bound on the character count.
    pub min_length: usize,
    /// Inclusive upper bound on the character count. 0 means unbounded.
    pub max_length: usize,
    pub require_digits: bool,
    pub require_lower: bool,
    pub require_upper: bool,
    pub require_symbols: bool,
    pub require_extended: bool,
    /// Tiers below this are reported as not strong.
    pub minimum_complexity: Complexity,
}

impl Policy {
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn require_digits(mut self, required: bool) -> Self {
        self.require_digits = required;
        self
    }

    pub fn require_lower(mut self, required: bool) -> Self {
        self.require_lower = required;
        self
    }

    pub fn require_upper(mut self, required: bool) -> Self {
        self.require_upper = required;
        self
    }

    pub fn require_symbols(mut self, required: bool) -> Self {
        self.require_symbols = required;
        self
    }

    pub fn require_extended(mut self, required: bool) -> Self {
        self.require_extended = required;
        self
    }

    pub fn with_minimum_complexity(mut self, tier: Complexity) -> Self {
        self.minimum_complexity = tier;
        self
    }

    /// Builds a policy from `PWD_AUDIT_*` environment variables.
    ///
    /// See [`Policy::from_env_with_prefix`].
    pub fn from_env() -> Result<Self, PolicyError> {
        Self::from_env_with_prefix(ENV_PREFIX)
    }

    /// Builds a policy from environment variables named `{prefix}{KEY}`.
    ///
    /// Recognized keys: `MIN_LENGTH`, `MAX_LENGTH`, `REQUIRE_DIGITS`,
    /// `REQUIRE_LOWER`, `REQUIRE_UPPER`, `REQUIRE_SYMBOLS`, `REQUIRE_EXTENDED`,
    /// `MIN_COMPLEXITY` (tier number 0-14). Unset keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - A number or boolean does not parse
    /// - `MIN_COMPLEXITY` is above 14
    /// - A non-zero `MAX_LENGTH` is below `MIN_LENGTH`
    pub fn from_env_with_prefix(prefix: &str) -> Result<Self, PolicyError> {
        let env = EnvReader { prefix };
        let mut policy = Policy::default();

        if let Some(n) = env.number("MIN_LENGTH")? {
            policy.min_length = n;
        }
        if let Some(n) = env.number("MAX_LENGTH")? {
            policy.max_length = n;
        }
        if let Some(b) = env.flag("REQUIRE_DIGITS")? {
            policy.require_digits = b;
        }
        if let Some(b) = env.flag("REQUIRE_LOWER")? {
            policy.require_lower = b;
        }
        if let Some(b) = env.flag("REQUIRE_UPPER")? {
            policy.require_upper = b;
        }
        if let Some(b) = env.flag("REQUIRE_SYMBOLS")? {
            policy.require_symbols = b;
        }
        if let Some(b) = env.flag("REQUIRE_EXTENDED")? {
            policy.require_extended = b;
        }
        if let Some(raw) = env.get("MIN_COMPLEXITY") {
            let value: u8 = raw.trim().parse().map_err(|_| PolicyError::InvalidNumber {
                key: env.key("MIN_COMPLEXITY"),
                value: raw.clone(),
            })?;
            policy.minimum_complexity = Complexity::try_from(value)?;
        }

        policy.validate()?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Policy loaded from environment (prefix {}): {:?}", prefix, policy);

        Ok(policy)
    }

    /// Rejects a non-zero `max_length` below `min_length`.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.max_length > 0 && self.max_length < self.min_length {
            return Err(PolicyError::InvalidRange {
                min: self.min_length,
                max: self.max_length,
            });
        }
        Ok(())
    }
}

struct EnvReader<'a> {
    prefix: &'a str,
}

impl EnvReader<'_> {
    fn key(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }

    fn get(&self, name: &str) -> Option<String> {
        std::env::var(self.key(name)).ok()
    }

    fn number(&self, name: &str) -> Result<Option<usize>, PolicyError> {
        self.get(name)
            .map(|raw| {
                raw.trim().parse().map_err(|_| PolicyError::InvalidNumber {
                    key: self.key(name),
                    value: raw.clone(),
                })
            })
            .transpose()
    }

    fn flag(&self, name: &str) -> Result<Option<bool>, PolicyError> {
        self.get(name)
            .map(|raw| match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(PolicyError::InvalidBool {
                    key: self.key(name),
                    value: raw.clone(),
                }),
            })
            .transpose()
    }
}
