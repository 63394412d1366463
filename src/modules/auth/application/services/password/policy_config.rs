use std::env;

/// Optional length bounds for new passwords. Both are unset by default, so
/// the standard policy only checks character classes and identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordPolicyConfig {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl PasswordPolicyConfig {
    pub fn new(min_length: Option<usize>, max_length: Option<usize>) -> Self {
        if let (Some(min), Some(max)) = (min_length, max_length) {
            assert!(
                min <= max,
                "password min length ({min}) exceeds max length ({max})"
            );
        }
        Self {
            min_length,
            max_length,
        }
    }

    /// Reads `PASSWORD_MIN_LENGTH` / `PASSWORD_MAX_LENGTH`. A missing or
    /// blank variable leaves that bound off. Panics at startup on
    /// unparsable or inverted values.
    pub fn from_env() -> Self {
        Self::new(
            read_length("PASSWORD_MIN_LENGTH"),
            read_length("PASSWORD_MAX_LENGTH"),
        )
    }
}

fn read_length(key: &str) -> Option<usize> {
    let raw = env::var(key).ok().filter(|raw| !raw.trim().is_empty())?;
    let length = raw
        .trim()
        .parse()
        .unwrap_or_else(|_| panic!("{key} must be a positive integer, got {raw:?}"));
    Some(length)
}
