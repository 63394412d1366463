pub mod confirm_avatar_service;
pub mod discard_avatar_service;
pub mod fetch_profile_service;
pub mod update_profile_service;
pub mod upload_avatar_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use confirm_avatar_service::ConfirmAvatarService;
pub use discard_avatar_service::DiscardAvatarService;
pub use fetch_profile_service::FetchProfileService;
pub use update_profile_service::UpdateProfileService;
pub use upload_avatar_service::UploadAvatarService;
