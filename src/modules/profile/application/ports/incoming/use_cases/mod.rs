mod confirm_avatar;
mod discard_avatar;
mod fetch_profile;
mod update_profile;
mod upload_avatar;

pub use confirm_avatar::{ConfirmAvatarUseCase, PendingAvatarError};
pub use discard_avatar::DiscardAvatarUseCase;
pub use fetch_profile::{FetchProfileError, FetchProfileUseCase, ProfileView};
pub use update_profile::{
    ProfileFields, UpdateProfileError, UpdateProfileRequest, UpdateProfileRequestError,
    UpdateProfileUseCase, MAX_TEXT_FIELD_CHARS, MIN_BIO_CHARS,
};
pub use upload_avatar::{UploadAvatarError, UploadAvatarUseCase};
