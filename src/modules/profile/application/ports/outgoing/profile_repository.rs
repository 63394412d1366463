use async_trait::async_trait;
use uuid::Uuid;

use crate::profile::application::domain::entities::UserProfile;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_user(&self, user_id: Uuid)
        -> Result<Option<UserProfile>, ProfileRepositoryError>;

    /// Inserts the profile or replaces every field of the existing one.
    async fn upsert(&self, profile: UserProfile) -> Result<UserProfile, ProfileRepositoryError>;
}
