// application/ports/outgoing/user_query.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::Identity;

/// Result DTO for user queries
#[derive(Debug, Clone)]
pub struct UserQueryResult {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub credential_version: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Query execution failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError>;

    /// The account joined with its profile names (empty when no profile
    /// exists yet).
    async fn find_identity(&self, user_id: Uuid) -> Result<Option<Identity>, UserQueryError>;
}
