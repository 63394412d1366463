use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::profile::application::ports::incoming::use_cases::{
    FetchProfileError, FetchProfileUseCase, ProfileView,
};
use crate::profile::application::ports::outgoing::{AvatarRepository, ProfileRepository};

pub struct FetchProfileService<Q, P, A>
where
    Q: UserQuery,
    P: ProfileRepository,
    A: AvatarRepository,
{
    user_query: Q,
    profiles: P,
    avatars: A,
}

impl<Q, P, A> FetchProfileService<Q, P, A>
where
    Q: UserQuery,
    P: ProfileRepository,
    A: AvatarRepository,
{
    pub fn new(user_query: Q, profiles: P, avatars: A) -> Self {
        Self {
            user_query,
            profiles,
            avatars,
        }
    }
}

#[async_trait]
impl<Q, P, A> FetchProfileUseCase for FetchProfileService<Q, P, A>
where
    Q: UserQuery + Send + Sync,
    P: ProfileRepository + Send + Sync,
    A: AvatarRepository + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<ProfileView, FetchProfileError> {
        let user = self
            .user_query
            .find_by_id(user_id.value())
            .await
            .map_err(|e| FetchProfileError::RepositoryError(e.to_string()))?
            .ok_or(FetchProfileError::UserNotFound)?;

        let profile = self
            .profiles
            .find_by_user(user_id.value())
            .await
            .map_err(|e| FetchProfileError::RepositoryError(e.to_string()))?
            .ok_or(FetchProfileError::ProfileNotFound)?;

        let avatar = self
            .avatars
            .find(user_id.value())
            .await
            .map_err(|e| FetchProfileError::RepositoryError(e.to_string()))?
            .unwrap_or_default();

        Ok(ProfileView::new(profile, user.email, avatar))
    }
}
