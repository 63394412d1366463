use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::profile::application::domain::entities::UserProfile;
use crate::profile::application::ports::incoming::use_cases::{
    ProfileView, UpdateProfileError, UpdateProfileRequest, UpdateProfileUseCase,
};
use crate::profile::application::ports::outgoing::{
    AvatarRepository, BioSanitizer, ProfileRepository,
};

pub struct UpdateProfileService<Q, P, A>
where
    Q: UserQuery,
    P: ProfileRepository,
    A: AvatarRepository,
{
    user_query: Q,
    profiles: P,
    avatars: A,
    sanitizer: Arc<dyn BioSanitizer>,
}

impl<Q, P, A> UpdateProfileService<Q, P, A>
where
    Q: UserQuery,
    P: ProfileRepository,
    A: AvatarRepository,
{
    pub fn new(user_query: Q, profiles: P, avatars: A, sanitizer: Arc<dyn BioSanitizer>) -> Self {
        Self {
            user_query,
            profiles,
            avatars,
            sanitizer,
        }
    }
}

#[async_trait]
impl<Q, P, A> UpdateProfileUseCase for UpdateProfileService<Q, P, A>
where
    Q: UserQuery + Send + Sync,
    P: ProfileRepository + Send + Sync,
    A: AvatarRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        request: UpdateProfileRequest,
    ) -> Result<ProfileView, UpdateProfileError> {
        let user = self
            .user_query
            .find_by_id(user_id.value())
            .await
            .map_err(|e| UpdateProfileError::RepositoryError(e.to_string()))?
            .ok_or(UpdateProfileError::UserNotFound)?;

        let profile = UserProfile {
            user_id,
            date_of_birth: request.date_of_birth(),
            bio: self.sanitizer.sanitize(request.bio()),
            given_name: request.given_name().to_string(),
            family_name: request.family_name().to_string(),
            city: request.city().to_string(),
            state: request.state().to_string(),
            country: request.country().to_string(),
            favourite_animal: request.favourite_animal().to_string(),
            hobby: request.hobby().to_string(),
            favourite_fountain_pen: request.favourite_fountain_pen().to_string(),
        };

        let saved = self
            .profiles
            .upsert(profile)
            .await
            .map_err(|e| UpdateProfileError::RepositoryError(e.to_string()))?;

        let avatar = self
            .avatars
            .find(user_id.value())
            .await
            .map_err(|e| UpdateProfileError::RepositoryError(e.to_string()))?
            .unwrap_or_default();

        info!(user_id = %user_id, "Profile updated");

        Ok(ProfileView::new(saved, user.email, avatar))
    }
}
