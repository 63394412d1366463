use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::ports::incoming::use_cases::{
    AuthTokens, LoginError, LoginRequest, LoginUserResponse, LoginUserUseCase, UserInfo,
};
use crate::auth::application::ports::outgoing::{token_provider::TokenProvider, UserQuery};

use super::hash::PasswordHashingService;

pub struct LoginUserService<Q>
where
    Q: UserQuery,
{
    query: Q,
    password_hasher: PasswordHashingService,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginUserService<Q>
where
    Q: UserQuery,
{
    pub fn new(
        query: Q,
        password_hasher: PasswordHashingService,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> LoginUserUseCase for LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        let user = self
            .query
            .find_by_email(request.email())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?;

        let Some(user) = user else {
            // Burn a hash so unknown emails cost as much as wrong passwords.
            let _ = self
                .password_hasher
                .hash_password(request.password().to_string())
                .await;
            return Err(LoginError::InvalidCredentials);
        };

        let is_valid = self
            .password_hasher
            .verify_password(request.password().to_string(), user.password_hash.clone())
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login rejected: wrong password");
            return Err(LoginError::InvalidCredentials);
        }

        if !user.is_active {
            return Err(LoginError::AccountDisabled);
        }

        let access_token = self
            .token_provider
            .generate_access_token(user.id, user.credential_version)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;
        let refresh_token = self
            .token_provider
            .generate_refresh_token(user.id, user.credential_version)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        info!(user_id = %user.id, "User logged in");

        Ok(LoginUserResponse {
            tokens: AuthTokens {
                access_token,
                refresh_token,
            },
            user: UserInfo {
                id: user.id,
                email: user.email,
            },
        })
    }
}
