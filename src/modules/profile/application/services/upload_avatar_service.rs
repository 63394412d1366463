use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::avatar_policy::{pending_avatar_key, AvatarPolicy};
use crate::profile::application::domain::entities::AvatarRecord;
use crate::profile::application::ports::incoming::use_cases::{
    UploadAvatarError, UploadAvatarUseCase,
};
use crate::profile::application::ports::outgoing::{AvatarRepository, AvatarStorage};

pub struct UploadAvatarService<A>
where
    A: AvatarRepository,
{
    avatars: A,
    storage: Arc<dyn AvatarStorage>,
    policy: AvatarPolicy,
}

impl<A> UploadAvatarService<A>
where
    A: AvatarRepository,
{
    pub fn new(avatars: A, storage: Arc<dyn AvatarStorage>, policy: AvatarPolicy) -> Self {
        Self {
            avatars,
            storage,
            policy,
        }
    }
}

#[async_trait]
impl<A> UploadAvatarUseCase for UploadAvatarService<A>
where
    A: AvatarRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        content_type: String,
        bytes: Vec<u8>,
    ) -> Result<AvatarRecord, UploadAvatarError> {
        let image_type = self
            .policy
            .validate(&content_type, &bytes)
            .map_err(UploadAvatarError::Invalid)?;

        let key = pending_avatar_key(user_id, image_type);
        let previous = self
            .avatars
            .find(user_id.value())
            .await
            .map_err(|e| UploadAvatarError::RepositoryError(e.to_string()))?
            .unwrap_or_default();

        self.storage
            .put(&key, bytes)
            .await
            .map_err(|e| UploadAvatarError::StorageError(e.to_string()))?;

        // A pending upload of another type leaves a stale object behind.
        if let Some(old) = previous.pending_key.filter(|old| *old != key) {
            if let Err(e) = self.storage.delete(&old).await {
                warn!(user_id = %user_id, key = %old, error = %e, "Failed to delete stale pending avatar");
            }
        }

        let record = self
            .avatars
            .set_pending(user_id.value(), key)
            .await
            .map_err(|e| UploadAvatarError::RepositoryError(e.to_string()))?;

        info!(user_id = %user_id, mime = image_type.mime(), "Pending avatar stored");

        Ok(record)
    }
}
