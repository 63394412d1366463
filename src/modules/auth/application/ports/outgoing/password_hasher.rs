#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    #[error("Password hashing failed")]
    HashFailed,

    #[error("Password verification failed")]
    VerifyFailed,

    #[error("Background task failed")]
    TaskFailed,
}

/// Slow, salted hashing primitive. Blocking: async callers run it on
/// `tokio::task::spawn_blocking`.
pub trait PasswordHasher: Send + Sync {
    fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// `Ok(false)` on a wrong password, `Err` only when the stored hash
    /// cannot be used at all.
    fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
