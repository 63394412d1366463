use bcrypt::{hash, verify, DEFAULT_COST};

use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};

pub struct BcryptHasher {
    cost: u32,
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self { cost: DEFAULT_COST }
    }
}

impl BcryptHasher {
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash_password(&self, password: &str) -> Result<String, HashError> {
        hash(password, self.cost).map_err(|_| HashError::HashFailed)
    }

    fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, HashError> {
        verify(password, hashed).map_err(|_| HashError::VerifyFailed)
    }
}
