pub mod argon2_hasher;
pub mod bcrypt_hasher;

use std::sync::Arc;

use crate::auth::application::ports::outgoing::PasswordHasher;

pub use argon2_hasher::Argon2Hasher;
pub use bcrypt_hasher::BcryptHasher;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashingAlgorithm {
    Argon2,
    Bcrypt,
}

impl HashingAlgorithm {
    /// `PASSWORD_HASHER=argon2|bcrypt`, argon2 when unset.
    pub fn from_env() -> Self {
        match std::env::var("PASSWORD_HASHER") {
            Ok(value) => value
                .parse()
                .unwrap_or_else(|e: String| panic!("{e}")),
            Err(_) => HashingAlgorithm::Argon2,
        }
    }

    pub fn build_hasher(self) -> Arc<dyn PasswordHasher> {
        match self {
            HashingAlgorithm::Argon2 => Arc::new(Argon2Hasher::from_env()),
            HashingAlgorithm::Bcrypt => Arc::new(BcryptHasher::default()),
        }
    }
}

impl std::str::FromStr for HashingAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "argon2" | "argon2id" => Ok(HashingAlgorithm::Argon2),
            "bcrypt" => Ok(HashingAlgorithm::Bcrypt),
            other => Err(format!("Unknown PASSWORD_HASHER: {other}")),
        }
    }
}
