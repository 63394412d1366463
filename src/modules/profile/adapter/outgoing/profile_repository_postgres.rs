use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::UserProfile;
use crate::profile::application::ports::outgoing::{ProfileRepository, ProfileRepositoryError};

use super::sea_orm_entity::user_profiles::{
    ActiveModel as ProfileActiveModel, Entity as ProfileEntity, Model as ProfileModel,
};

#[derive(Clone, Debug)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_profile(model: ProfileModel) -> UserProfile {
        UserProfile {
            user_id: UserId::from(model.user_id),
            date_of_birth: model.date_of_birth,
            bio: model.bio,
            given_name: model.given_name,
            family_name: model.family_name,
            city: model.city,
            state: model.state,
            country: model.country,
            favourite_animal: model.favourite_animal,
            hobby: model.hobby,
            favourite_fountain_pen: model.favourite_fountain_pen,
        }
    }

    fn apply(active: &mut ProfileActiveModel, profile: UserProfile) {
        active.date_of_birth = Set(profile.date_of_birth);
        active.bio = Set(profile.bio);
        active.given_name = Set(profile.given_name);
        active.family_name = Set(profile.family_name);
        active.city = Set(profile.city);
        active.state = Set(profile.state);
        active.country = Set(profile.country);
        active.favourite_animal = Set(profile.favourite_animal);
        active.hobby = Set(profile.hobby);
        active.favourite_fountain_pen = Set(profile.favourite_fountain_pen);
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn find_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<UserProfile>, ProfileRepositoryError> {
        let model = ProfileEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?;

        Ok(model.map(Self::map_to_profile))
    }

    async fn upsert(&self, profile: UserProfile) -> Result<UserProfile, ProfileRepositoryError> {
        let user_id = profile.user_id.value();
        let now: sea_orm::prelude::DateTimeWithTimeZone = chrono::Utc::now().into();

        let existing = ProfileEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?;

        let saved = match existing {
            Some(model) => {
                let mut active: ProfileActiveModel = model.into();
                Self::apply(&mut active, profile);
                active.updated_at = Set(now);
                active.update(&*self.db).await
            }
            None => {
                let mut active = ProfileActiveModel {
                    user_id: Set(user_id),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };
                Self::apply(&mut active, profile);
                active.insert(&*self.db).await
            }
        }
        .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?;

        Ok(Self::map_to_profile(saved))
    }
}
