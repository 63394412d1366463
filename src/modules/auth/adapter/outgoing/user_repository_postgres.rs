use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::user_repository::{
    CreateUserData, UserRepository, UserRepositoryError, UserResult,
};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
    Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_user_result(model: UserModel) -> UserResult {
        UserResult {
            id: model.id,
            email: model.email,
            credential_version: model.credential_version,
            is_active: model.is_active,
        }
    }

    fn map_write_error(e: DbErr) -> UserRepositoryError {
        let err_str = e.to_string().to_lowercase();
        if err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
        {
            return UserRepositoryError::UserAlreadyExists;
        }
        UserRepositoryError::DatabaseError(e.to_string())
    }

    async fn find_model(&self, user_id: Uuid) -> Result<UserModel, UserRepositoryError> {
        UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: CreateUserData) -> Result<UserResult, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            credential_version: Set(0),
            is_active: Set(true),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Ok(Self::map_to_user_result(inserted))
    }

    /// `UPDATE users SET password_hash = ?, credential_version = ? + 1
    ///  WHERE id = ? AND credential_version = ?`
    async fn update_password(
        &self,
        user_id: Uuid,
        expected_version: i64,
        new_password_hash: String,
    ) -> Result<i64, UserRepositoryError> {
        let next_version = expected_version + 1;
        let now: sea_orm::prelude::DateTimeWithTimeZone = chrono::Utc::now().into();

        let result = UserEntity::update_many()
            .col_expr(UserColumn::PasswordHash, Expr::value(new_password_hash))
            .col_expr(UserColumn::CredentialVersion, Expr::value(next_version))
            .col_expr(UserColumn::UpdatedAt, Expr::value(now))
            .filter(UserColumn::Id.eq(user_id))
            .filter(UserColumn::CredentialVersion.eq(expected_version))
            .exec(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            // Either the row is gone or someone else won the race.
            self.find_model(user_id).await?;
            return Err(UserRepositoryError::CredentialConflict);
        }

        Ok(next_version)
    }

    async fn update_email(
        &self,
        user_id: Uuid,
        email: String,
    ) -> Result<UserResult, UserRepositoryError> {
        let mut active_user: UserActiveModel = self.find_model(user_id).await?.into();
        active_user.email = Set(email);

        let updated = active_user
            .update(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Ok(Self::map_to_user_result(updated))
    }
}
