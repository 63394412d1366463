use async_trait::async_trait;
use std::fmt;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::{
    avatar_policy::AvatarValidationError, entities::AvatarRecord,
};

#[derive(Debug, Clone)]
pub enum UploadAvatarError {
    Invalid(AvatarValidationError),
    StorageError(String),
    RepositoryError(String),
}

impl fmt::Display for UploadAvatarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadAvatarError::Invalid(e) => write!(f, "{}", e),
            UploadAvatarError::StorageError(msg) => write!(f, "Storage error: {}", msg),
            UploadAvatarError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for UploadAvatarError {}

/// Stores an image as the user's pending avatar.
#[async_trait]
pub trait UploadAvatarUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        content_type: String,
        bytes: Vec<u8>,
    ) -> Result<AvatarRecord, UploadAvatarError>;
}
