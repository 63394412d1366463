use std::sync::Arc;

use crate::profile::application::ports::incoming::use_cases::{
    ConfirmAvatarUseCase, DiscardAvatarUseCase, FetchProfileUseCase, UpdateProfileUseCase,
    UploadAvatarUseCase,
};

#[derive(Clone)]
pub struct ProfileUseCases {
    pub fetch: Arc<dyn FetchProfileUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateProfileUseCase + Send + Sync>,
    pub upload_avatar: Arc<dyn UploadAvatarUseCase + Send + Sync>,
    pub confirm_avatar: Arc<dyn ConfirmAvatarUseCase + Send + Sync>,
    pub discard_avatar: Arc<dyn DiscardAvatarUseCase + Send + Sync>,
}
