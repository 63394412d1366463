use async_trait::async_trait;
use uuid::Uuid;

use crate::profile::application::domain::entities::AvatarRecord;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AvatarRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AvatarRepository: Send + Sync {
    async fn find(&self, user_id: Uuid) -> Result<Option<AvatarRecord>, AvatarRepositoryError>;

    async fn set_pending(
        &self,
        user_id: Uuid,
        pending_key: String,
    ) -> Result<AvatarRecord, AvatarRepositoryError>;

    /// Makes `image_key` the confirmed avatar and clears the pending one.
    async fn promote(
        &self,
        user_id: Uuid,
        image_key: String,
    ) -> Result<AvatarRecord, AvatarRepositoryError>;

    async fn clear_pending(&self, user_id: Uuid) -> Result<AvatarRecord, AvatarRepositoryError>;
}
