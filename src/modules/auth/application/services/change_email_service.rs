use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::domain::entities::SessionUser;
use crate::auth::application::ports::incoming::use_cases::{
    ChangeEmailError, ChangeEmailRequest, ChangeEmailUseCase, UserInfo,
};
use crate::auth::application::ports::outgoing::{UserQuery, UserRepository, UserRepositoryError};

pub struct ChangeEmailService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> ChangeEmailService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> ChangeEmailUseCase for ChangeEmailService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        session: SessionUser,
        request: ChangeEmailRequest,
    ) -> Result<UserInfo, ChangeEmailError> {
        let current = self
            .query
            .find_by_id(session.id.value())
            .await
            .map_err(|e| ChangeEmailError::RepositoryError(e.to_string()))?
            .ok_or(ChangeEmailError::UserNotFound)?;

        if !current.is_active {
            return Err(ChangeEmailError::AccountDisabled);
        }
        if session.is_stale(current.credential_version) {
            warn!(user_id = %session.id, "Email change from a retired session");
            return Err(ChangeEmailError::SessionExpired);
        }

        let user = self
            .repository
            .update_email(session.id.value(), request.email().to_string())
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => ChangeEmailError::UserNotFound,
                UserRepositoryError::UserAlreadyExists => ChangeEmailError::EmailAlreadyExists,
                other => ChangeEmailError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user.id, "Email changed");

        Ok(UserInfo {
            id: user.id,
            email: user.email,
        })
    }
}
