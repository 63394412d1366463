use std::sync::Arc;
use tokio::task;

use crate::auth::application::ports::outgoing::{HashError, PasswordHasher};

/// Async front for a blocking `PasswordHasher`.
#[derive(Clone)]
pub struct PasswordHashingService {
    hasher: Arc<dyn PasswordHasher>,
}

impl PasswordHashingService {
    pub fn new(hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { hasher }
    }

    pub async fn hash_password(&self, password: String) -> Result<String, HashError> {
        let hasher = Arc::clone(&self.hasher);
        task::spawn_blocking(move || hasher.hash_password(&password))
            .await
            .map_err(|_| HashError::TaskFailed)?
    }

    pub async fn verify_password(&self, password: String, hash: String) -> Result<bool, HashError> {
        let hasher = Arc::clone(&self.hasher);
        task::spawn_blocking(move || hasher.verify_password(&password, &hash))
            .await
            .map_err(|_| HashError::TaskFailed)?
    }
}
