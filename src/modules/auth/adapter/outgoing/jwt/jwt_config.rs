use std::env;
use thiserror::Error;

const DEFAULT_ISSUER: &str = "accounts";
const DEFAULT_ACCESS_EXPIRY_SECS: i64 = 30 * 60;
const DEFAULT_REFRESH_EXPIRY_SECS: i64 = 7 * 24 * 60 * 60;
const MAX_ACCESS_EXPIRY_SECS: i64 = 24 * 60 * 60;
/// HS256 key material floor, in bytes.
const MIN_SECRET_LEN: usize = 32;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum JwtConfigError {
    #[error("JWT_SECRET is {0} bytes, needs at least 32")]
    WeakSecret(usize),
    #[error("JWT_ACCESS_EXPIRY must be within 1..=86400 seconds, got {0}")]
    AccessExpiryOutOfRange(i64),
    #[error("JWT_REFRESH_EXPIRY ({refresh}s) must outlive JWT_ACCESS_EXPIRY ({access}s)")]
    RefreshNotLonger { access: i64, refresh: i64 },
}

/// Signing key and token lifetimes. Lifetimes are in seconds.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64,
    pub refresh_token_expiry: i64,
}

impl JwtConfig {
    pub fn validate(&self) -> Result<(), JwtConfigError> {
        if self.secret_key.len() < MIN_SECRET_LEN {
            return Err(JwtConfigError::WeakSecret(self.secret_key.len()));
        }
        if !(1..=MAX_ACCESS_EXPIRY_SECS).contains(&self.access_token_expiry) {
            return Err(JwtConfigError::AccessExpiryOutOfRange(
                self.access_token_expiry,
            ));
        }
        if self.refresh_token_expiry <= self.access_token_expiry {
            return Err(JwtConfigError::RefreshNotLonger {
                access: self.access_token_expiry,
                refresh: self.refresh_token_expiry,
            });
        }
        Ok(())
    }

    /// Startup only: panics when `JWT_SECRET` is missing or the values
    /// fail [`JwtConfig::validate`].
    pub fn from_env() -> Self {
        let config = Self {
            secret_key: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| DEFAULT_ISSUER.to_string()),
            access_token_expiry: env_seconds("JWT_ACCESS_EXPIRY", DEFAULT_ACCESS_EXPIRY_SECS),
            refresh_token_expiry: env_seconds("JWT_REFRESH_EXPIRY", DEFAULT_REFRESH_EXPIRY_SECS),
        };

        if let Err(e) = config.validate() {
            panic!("{e}");
        }
        config
    }
}

fn env_seconds(key: &str, default: i64) -> i64 {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|_| panic!("{key} must be a whole number of seconds, got {raw:?}")),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> JwtConfig {
        JwtConfig {
            secret_key: "k".repeat(MIN_SECRET_LEN),
            issuer: DEFAULT_ISSUER.to_string(),
            access_token_expiry: DEFAULT_ACCESS_EXPIRY_SECS,
            refresh_token_expiry: DEFAULT_REFRESH_EXPIRY_SECS,
        }
    }

    #[test]
    fn test_defaults_validate() {
        assert_eq!(config().validate(), Ok(()));
    }

    #[test]
    fn test_short_secret_rejected() {
        let config = JwtConfig {
            secret_key: "too-short".to_string(),
            ..config()
        };
        assert_eq!(config.validate(), Err(JwtConfigError::WeakSecret(9)));
    }

    #[test]
    fn test_access_expiry_bounds() {
        for expiry in [0, -5, MAX_ACCESS_EXPIRY_SECS + 1] {
            let config = JwtConfig {
                access_token_expiry: expiry,
                ..config()
            };
            assert_eq!(
                config.validate(),
                Err(JwtConfigError::AccessExpiryOutOfRange(expiry))
            );
        }
    }

    #[test]
    fn test_refresh_must_outlive_access() {
        let config = JwtConfig {
            access_token_expiry: 600,
            refresh_token_expiry: 600,
            ..config()
        };
        assert_eq!(
            config.validate(),
            Err(JwtConfigError::RefreshNotLonger {
                access: 600,
                refresh: 600
            })
        );
    }
}
