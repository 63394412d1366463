use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone)]
pub struct UserResult {
    pub id: Uuid,
    pub email: String,
    pub credential_version: i64,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Credential was changed by another request")]
    CredentialConflict,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError>;

    /// Replaces the password hash only if the stored `credential_version`
    /// still equals `expected_version`. Returns the new version.
    async fn update_password(
        &self,
        user_id: Uuid,
        expected_version: i64,
        new_password_hash: String,
    ) -> Result<i64, UserRepositoryError>;

    async fn update_email(
        &self,
        user_id: Uuid,
        email: String,
    ) -> Result<UserResult, UserRepositoryError>;
}
