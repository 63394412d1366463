use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Identity, UserId};
use crate::auth::application::ports::outgoing::user_query::{
    UserQuery, UserQueryError, UserQueryResult,
};
use super::sea_orm_entity::profile_names::Entity as ProfileNamesEntity;
use super::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity, Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_query_result(model: UserModel) -> UserQueryResult {
        UserQueryResult {
            id: model.id,
            email: model.email,
            password_hash: model.password_hash,
            credential_version: model.credential_version,
            is_active: model.is_active,
            created_at: model.created_at.with_timezone(&chrono::Utc),
            updated_at: model.updated_at.with_timezone(&chrono::Utc),
        }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(Self::map_to_query_result))
    }

    /// Expects an already normalized email.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(Self::map_to_query_result))
    }

    async fn find_identity(&self, user_id: Uuid) -> Result<Option<Identity>, UserQueryError> {
        let Some(user) = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?
        else {
            return Ok(None);
        };

        let names = ProfileNamesEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        let (given_name, family_name) = names
            .map(|n| (n.given_name, n.family_name))
            .unwrap_or_default();

        Ok(Some(Identity {
            id: UserId::from(user.id),
            email: user.email,
            given_name,
            family_name,
            password_hash: user.password_hash,
            credential_version: user.credential_version,
            is_active: user.is_active,
        }))
    }
}
