use async_trait::async_trait;
use std::fmt;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::AvatarRecord;

/// Shared by confirm and discard.
#[derive(Debug, Clone)]
pub enum PendingAvatarError {
    NoPendingAvatar,
    StorageError(String),
    RepositoryError(String),
}

impl fmt::Display for PendingAvatarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PendingAvatarError::NoPendingAvatar => write!(f, "No pending avatar"),
            PendingAvatarError::StorageError(msg) => write!(f, "Storage error: {}", msg),
            PendingAvatarError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for PendingAvatarError {}

/// Promotes the pending image to the confirmed avatar.
#[async_trait]
pub trait ConfirmAvatarUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<AvatarRecord, PendingAvatarError>;
}
