use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::{AvatarRecord, UserProfile};

/// Profile as shown to its owner.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileView {
    pub user_id: Uuid,
    pub email: String,
    pub display_name: String,
    pub date_of_birth: NaiveDate,
    pub bio: String,
    pub given_name: String,
    pub family_name: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub favourite_animal: String,
    pub hobby: String,
    pub favourite_fountain_pen: String,
    pub avatar: AvatarRecord,
}

impl ProfileView {
    pub fn new(profile: UserProfile, email: String, avatar: AvatarRecord) -> Self {
        Self {
            user_id: profile.user_id.value(),
            display_name: profile.display_name(&email),
            email,
            date_of_birth: profile.date_of_birth,
            bio: profile.bio,
            given_name: profile.given_name,
            family_name: profile.family_name,
            city: profile.city,
            state: profile.state,
            country: profile.country,
            favourite_animal: profile.favourite_animal,
            hobby: profile.hobby,
            favourite_fountain_pen: profile.favourite_fountain_pen,
            avatar,
        }
    }
}

#[derive(Debug, Clone)]
pub enum FetchProfileError {
    UserNotFound,
    ProfileNotFound,
    RepositoryError(String),
}

impl fmt::Display for FetchProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchProfileError::UserNotFound => write!(f, "User not found"),
            FetchProfileError::ProfileNotFound => write!(f, "Profile not found"),
            FetchProfileError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for FetchProfileError {}

#[async_trait]
pub trait FetchProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<ProfileView, FetchProfileError>;
}
