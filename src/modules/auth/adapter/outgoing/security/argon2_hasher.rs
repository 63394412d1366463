use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use rand_core::OsRng;

use crate::auth::application::ports::outgoing::password_hasher::{
    HashError, PasswordHasher as HasherTrait,
};

const DEFAULT_MEMORY_KIB: u32 = 19 * 1024;
const DEFAULT_ITERATIONS: u32 = 2;
const DEFAULT_PARALLELISM: u32 = 1;

/// Argon2id in PHC string format. Verification reads the parameters from
/// the stored hash, so changing them only affects new hashes.
#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
    #[cfg(test)]
    salt_override: Option<SaltString>,
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::with_params(DEFAULT_MEMORY_KIB, DEFAULT_ITERATIONS, DEFAULT_PARALLELISM)
    }
}

impl Argon2Hasher {
    pub fn with_params(memory_kib: u32, iterations: u32, parallelism: u32) -> Self {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .unwrap_or_else(|e| panic!("Invalid Argon2 params: {e}"));

        Self {
            params,
            #[cfg(test)]
            salt_override: None,
        }
    }

    pub fn from_env() -> Self {
        Self::with_params(
            env_u32("ARGON2_MEMORY_KIB", DEFAULT_MEMORY_KIB),
            env_u32("ARGON2_ITERATIONS", DEFAULT_ITERATIONS),
            env_u32("ARGON2_PARALLELISM", DEFAULT_PARALLELISM),
        )
    }

    #[cfg(test)]
    pub fn with_fixed_salt(salt: &str) -> Self {
        Self {
            params: Params::new(4 * 1024, 1, 1, None).expect("Invalid params"),
            salt_override: Some(SaltString::from_b64(salt).expect("Invalid salt")),
        }
    }

    fn salt(&self) -> SaltString {
        #[cfg(test)]
        if let Some(salt) = &self.salt_override {
            return salt.clone();
        }

        SaltString::generate(&mut OsRng)
    }
}

fn env_u32(key: &str, default: u32) -> u32 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl HasherTrait for Argon2Hasher {
    fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone());

        argon2
            .hash_password(password.as_bytes(), &self.salt())
            .map(|hash| hash.to_string())
            .map_err(|_| HashError::HashFailed)
    }

    fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|_| HashError::VerifyFailed)?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(PasswordHashError::Password) => Ok(false),
            Err(_) => Err(HashError::VerifyFailed),
        }
    }
}
