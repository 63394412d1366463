use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::AvatarRecord;
use crate::profile::application::ports::incoming::use_cases::{
    DiscardAvatarUseCase, PendingAvatarError,
};
use crate::profile::application::ports::outgoing::{
    AvatarRepository, AvatarStorage, AvatarStorageError,
};

pub struct DiscardAvatarService<A>
where
    A: AvatarRepository,
{
    avatars: A,
    storage: Arc<dyn AvatarStorage>,
}

impl<A> DiscardAvatarService<A>
where
    A: AvatarRepository,
{
    pub fn new(avatars: A, storage: Arc<dyn AvatarStorage>) -> Self {
        Self { avatars, storage }
    }
}

#[async_trait]
impl<A> DiscardAvatarUseCase for DiscardAvatarService<A>
where
    A: AvatarRepository + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<AvatarRecord, PendingAvatarError> {
        let pending = self
            .avatars
            .find(user_id.value())
            .await
            .map_err(|e| PendingAvatarError::RepositoryError(e.to_string()))?
            .and_then(|record| record.pending_key)
            .ok_or(PendingAvatarError::NoPendingAvatar)?;

        match self.storage.delete(&pending).await {
            Ok(()) | Err(AvatarStorageError::NotFound(_)) => {}
            Err(e) => return Err(PendingAvatarError::StorageError(e.to_string())),
        }

        let record = self
            .avatars
            .clear_pending(user_id.value())
            .await
            .map_err(|e| PendingAvatarError::RepositoryError(e.to_string()))?;

        info!(user_id = %user_id, "Pending avatar discarded");

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::application::services::test_support::{
        InMemoryAvatars, InMemoryStorage, JPEG_BYTES, PNG_BYTES,
    };
    use uuid::Uuid;

    #[tokio::test]
    async fn test_discard_removes_pending_and_keeps_confirmed() {
        let id = UserId::from(Uuid::new_v4());
        let pending = format!("avatars/pending/{}.png", id);
        let confirmed = format!("avatars/{}.jpg", id);
        let avatars = InMemoryAvatars::with(
            id.value(),
            AvatarRecord {
                image_key: Some(confirmed.clone()),
                pending_key: Some(pending.clone()),
            },
        );
        let storage = InMemoryStorage::with(&pending, PNG_BYTES);
        storage.put(&confirmed, JPEG_BYTES.to_vec()).await.unwrap();

        let record = DiscardAvatarService::new(avatars, Arc::new(storage.clone()))
            .execute(id)
            .await
            .unwrap();

        assert_eq!(record.image_key, Some(confirmed.clone()));
        assert_eq!(record.pending_key, None);
        assert_eq!(storage.keys(), vec![confirmed]);
    }

    #[tokio::test]
    async fn test_discard_tolerates_missing_object() {
        let id = UserId::from(Uuid::new_v4());
        let avatars = InMemoryAvatars::with(
            id.value(),
            AvatarRecord {
                image_key: None,
                pending_key: Some(format!("avatars/pending/{}.png", id)),
            },
        );

        let record = DiscardAvatarService::new(avatars, Arc::new(InMemoryStorage::default()))
            .execute(id)
            .await
            .unwrap();

        assert_eq!(record, AvatarRecord::default());
    }

    #[tokio::test]
    async fn test_discard_without_pending() {
        let id = UserId::from(Uuid::new_v4());

        let result =
            DiscardAvatarService::new(InMemoryAvatars::default(), Arc::new(InMemoryStorage::default()))
                .execute(id)
                .await;

        assert!(matches!(result, Err(PendingAvatarError::NoPendingAvatar)));
    }
}
