mod confirm_avatar;
mod discard_avatar;
mod get_profile;
mod update_profile;
mod upload_avatar;

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::profile::application::domain::entities::AvatarRecord;
use crate::profile::application::ports::incoming::use_cases::ProfileView;

pub use confirm_avatar::{confirm_avatar_handler, __path_confirm_avatar_handler};
pub use discard_avatar::{discard_avatar_handler, __path_discard_avatar_handler};
pub use get_profile::{get_profile_handler, __path_get_profile_handler};
pub use update_profile::{update_profile_handler, __path_update_profile_handler};
pub use upload_avatar::{upload_avatar_handler, __path_upload_avatar_handler};

pub use update_profile::UpdateProfileRequestDto;

#[derive(Serialize, ToSchema)]
pub struct AvatarBody {
    /// Confirmed image shown on the profile
    #[schema(example = "avatars/123e4567-e89b-12d3-a456-426614174000.png")]
    pub image_key: Option<String>,

    /// Uploaded image awaiting confirmation
    pub pending_key: Option<String>,
}

impl From<AvatarRecord> for AvatarBody {
    fn from(record: AvatarRecord) -> Self {
        Self {
            image_key: record.image_key,
            pending_key: record.pending_key,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct ProfileBody {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub user_id: String,

    #[schema(example = "john@example.com")]
    pub email: String,

    #[schema(example = "John SMITH (john@example.com)")]
    pub display_name: String,

    pub date_of_birth: NaiveDate,

    /// Sanitized HTML
    pub bio: String,
    pub given_name: String,
    pub family_name: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub favourite_animal: String,
    pub hobby: String,
    pub favourite_fountain_pen: String,
    pub avatar: AvatarBody,
}

impl From<ProfileView> for ProfileBody {
    fn from(view: ProfileView) -> Self {
        Self {
            user_id: view.user_id.to_string(),
            email: view.email,
            display_name: view.display_name,
            date_of_birth: view.date_of_birth,
            bio: view.bio,
            given_name: view.given_name,
            family_name: view.family_name,
            city: view.city,
            state: view.state,
            country: view.country,
            favourite_animal: view.favourite_animal,
            hobby: view.hobby,
            favourite_fountain_pen: view.favourite_fountain_pen,
            avatar: view.avatar.into(),
        }
    }
}
