use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid token")]
    InvalidToken,
}

/// Revoked-token store. Keys are SHA-256 hashes of the raw token.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    async fn blacklist_token(
        &self,
        token_hash: String,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenRepositoryError>;

    async fn is_token_blacklisted(&self, token_hash: &str) -> Result<bool, TokenRepositoryError>;

    async fn remove_blacklisted_token(&self, token_hash: &str) -> Result<(), TokenRepositoryError>;
}
