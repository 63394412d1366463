use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::avatar_policy::confirmed_avatar_key;
use crate::profile::application::domain::entities::AvatarRecord;
use crate::profile::application::ports::incoming::use_cases::{
    ConfirmAvatarUseCase, PendingAvatarError,
};
use crate::profile::application::ports::outgoing::{
    AvatarRepository, AvatarStorage, AvatarStorageError,
};

pub struct ConfirmAvatarService<A>
where
    A: AvatarRepository,
{
    avatars: A,
    storage: Arc<dyn AvatarStorage>,
}

impl<A> ConfirmAvatarService<A>
where
    A: AvatarRepository,
{
    pub fn new(avatars: A, storage: Arc<dyn AvatarStorage>) -> Self {
        Self { avatars, storage }
    }
}

#[async_trait]
impl<A> ConfirmAvatarUseCase for ConfirmAvatarService<A>
where
    A: AvatarRepository + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<AvatarRecord, PendingAvatarError> {
        let current = self
            .avatars
            .find(user_id.value())
            .await
            .map_err(|e| PendingAvatarError::RepositoryError(e.to_string()))?
            .unwrap_or_default();

        let pending = current
            .pending_key
            .ok_or(PendingAvatarError::NoPendingAvatar)?;
        let target = confirmed_avatar_key(user_id, &pending);

        self.storage
            .rename(&pending, &target)
            .await
            .map_err(|e| match e {
                AvatarStorageError::NotFound(_) => PendingAvatarError::NoPendingAvatar,
                other => PendingAvatarError::StorageError(other.to_string()),
            })?;

        let record = match self.avatars.promote(user_id.value(), target.clone()).await {
            Ok(record) => record,
            Err(e) => {
                // Put the file back so the pending key stays valid for a retry.
                // When the target was the old image's key its bytes are gone
                // already, and the moved file is the only copy left there.
                if current.image_key.as_deref() != Some(target.as_str()) {
                    if let Err(restore) = self.storage.rename(&target, &pending).await {
                        warn!(user_id = %user_id, key = %pending, error = %restore, "Failed to restore pending avatar");
                    }
                }
                return Err(PendingAvatarError::RepositoryError(e.to_string()));
            }
        };

        if let Some(old) = current.image_key.filter(|old| *old != target) {
            if let Err(e) = self.storage.delete(&old).await {
                warn!(user_id = %user_id, key = %old, error = %e, "Failed to delete replaced avatar");
            }
        }

        info!(user_id = %user_id, "Avatar confirmed");

        Ok(record)
    }
}
