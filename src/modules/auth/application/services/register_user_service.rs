use async_trait::async_trait;
use std::sync::Arc;
use tokio::task;
use tracing::{error, info};

use crate::auth::application::domain::entities::IdentityAttributes;
use crate::auth::application::ports::incoming::use_cases::{
    AuthTokens, RegisterUserError, RegisterUserRequest, RegisterUserResponse, RegisterUserUseCase,
    UserInfo,
};
use crate::auth::application::ports::outgoing::{
    token_provider::TokenProvider,
    user_repository::{CreateUserData, UserRepository, UserRepositoryError},
    UserQuery,
};

use super::password::PasswordPolicyEngine;

pub struct RegisterUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    engine: PasswordPolicyEngine,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q, R> RegisterUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        engine: PasswordPolicyEngine,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            engine,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, R> RegisterUserUseCase for RegisterUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        request: RegisterUserRequest,
    ) -> Result<RegisterUserResponse, RegisterUserError> {
        let outcome = self.engine.validate_new(
            IdentityAttributes::email_only(request.email()),
            request.password1(),
            request.password2(),
        );
        if !outcome.is_pass() {
            return Err(RegisterUserError::PasswordPolicy(outcome.into_failures()));
        }

        let existing = self
            .query
            .find_by_email(request.email())
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;
        if existing.is_some() {
            return Err(RegisterUserError::EmailAlreadyExists);
        }

        let engine = self.engine.clone();
        let password = request.password1().to_string();
        let password_hash = task::spawn_blocking(move || engine.hash_new_password(&password))
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        let user = self
            .repository
            .create_user(CreateUserData {
                email: request.email().to_string(),
                password_hash,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => RegisterUserError::EmailAlreadyExists,
                other => {
                    error!(error = %other, "Failed to create user");
                    RegisterUserError::RepositoryError(other.to_string())
                }
            })?;

        let access_token = self
            .token_provider
            .generate_access_token(user.id, user.credential_version)
            .map_err(|e| RegisterUserError::TokenGenerationFailed(e.to_string()))?;
        let refresh_token = self
            .token_provider
            .generate_refresh_token(user.id, user.credential_version)
            .map_err(|e| RegisterUserError::TokenGenerationFailed(e.to_string()))?;

        info!(user_id = %user.id, "User registered");

        Ok(RegisterUserResponse {
            user: UserInfo {
                id: user.id,
                email: user.email,
            },
            tokens: AuthTokens {
                access_token,
                refresh_token,
            },
        })
    }
}
