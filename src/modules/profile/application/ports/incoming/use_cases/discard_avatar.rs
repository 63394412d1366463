use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::AvatarRecord;

use super::confirm_avatar::PendingAvatarError;

/// Deletes the pending image and leaves the confirmed avatar alone.
#[async_trait]
pub trait DiscardAvatarUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<AvatarRecord, PendingAvatarError>;
}
