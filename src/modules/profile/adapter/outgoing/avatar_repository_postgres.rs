use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::profile::application::domain::entities::AvatarRecord;
use crate::profile::application::ports::outgoing::{AvatarRepository, AvatarRepositoryError};

use super::sea_orm_entity::avatars::{
    ActiveModel as AvatarActiveModel, Entity as AvatarEntity, Model as AvatarModel,
};

#[derive(Clone, Debug)]
pub struct AvatarRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AvatarRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_record(model: AvatarModel) -> AvatarRecord {
        AvatarRecord {
            image_key: model.image_key,
            pending_key: model.pending_key,
        }
    }

    /// Loads the row (or starts a blank one), applies `change` and writes it back.
    async fn save(
        &self,
        user_id: Uuid,
        change: impl FnOnce(&mut AvatarRecord) + Send,
    ) -> Result<AvatarRecord, AvatarRepositoryError> {
        let existing = AvatarEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| AvatarRepositoryError::DatabaseError(e.to_string()))?;

        let now: sea_orm::prelude::DateTimeWithTimeZone = chrono::Utc::now().into();
        let mut record = existing
            .clone()
            .map(Self::map_to_record)
            .unwrap_or_default();
        change(&mut record);

        let saved = match existing {
            Some(model) => {
                let mut active: AvatarActiveModel = model.into();
                active.image_key = Set(record.image_key);
                active.pending_key = Set(record.pending_key);
                active.updated_at = Set(now);
                active.update(&*self.db).await
            }
            None => {
                AvatarActiveModel {
                    user_id: Set(user_id),
                    image_key: Set(record.image_key),
                    pending_key: Set(record.pending_key),
                    updated_at: Set(now),
                }
                .insert(&*self.db)
                .await
            }
        }
        .map_err(|e| AvatarRepositoryError::DatabaseError(e.to_string()))?;

        Ok(Self::map_to_record(saved))
    }
}

#[async_trait]
impl AvatarRepository for AvatarRepositoryPostgres {
    async fn find(&self, user_id: Uuid) -> Result<Option<AvatarRecord>, AvatarRepositoryError> {
        let model = AvatarEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| AvatarRepositoryError::DatabaseError(e.to_string()))?;

        Ok(model.map(Self::map_to_record))
    }

    async fn set_pending(
        &self,
        user_id: Uuid,
        pending_key: String,
    ) -> Result<AvatarRecord, AvatarRepositoryError> {
        self.save(user_id, |record| record.pending_key = Some(pending_key))
            .await
    }

    async fn promote(
        &self,
        user_id: Uuid,
        image_key: String,
    ) -> Result<AvatarRecord, AvatarRepositoryError> {
        self.save(user_id, |record| {
            record.image_key = Some(image_key);
            record.pending_key = None;
        })
        .await
    }

    async fn clear_pending(&self, user_id: Uuid) -> Result<AvatarRecord, AvatarRepositoryError> {
        self.save(user_id, |record| record.pending_key = None).await
    }
}
