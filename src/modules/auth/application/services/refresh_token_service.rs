use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use crate::auth::application::ports::incoming::use_cases::{
    RefreshTokenError, RefreshTokenRequest, RefreshTokenResponse, RefreshTokenUseCase,
};
use crate::auth::application::ports::outgoing::{
    token_provider::{TokenProvider, REFRESH_TOKEN},
    token_repository::TokenRepository,
    UserQuery,
};

use super::hash::hash_token;

/// Trades a refresh token for a new access token. The token must not be
/// blacklisted, and its account must still be active at the credential
/// version the token was issued under.
pub struct RefreshTokenService<R, Q>
where
    R: TokenRepository,
    Q: UserQuery,
{
    token_repository: R,
    user_query: Q,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<R, Q> RefreshTokenService<R, Q>
where
    R: TokenRepository,
    Q: UserQuery,
{
    pub fn new(
        token_repository: R,
        user_query: Q,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            token_repository,
            user_query,
            token_provider,
        }
    }
}

#[async_trait]
impl<R, Q> RefreshTokenUseCase for RefreshTokenService<R, Q>
where
    R: TokenRepository + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError> {
        let token_hash = hash_token(request.refresh_token());
        let revoked = self
            .token_repository
            .is_token_blacklisted(&token_hash)
            .await
            .map_err(|e| RefreshTokenError::RepositoryError(e.to_string()))?;

        if revoked {
            warn!("Rejected refresh with a revoked token");
            return Err(RefreshTokenError::TokenRevoked);
        }

        let claims = self.token_provider.verify_token(request.refresh_token())?;
        if claims.token_type != REFRESH_TOKEN {
            warn!(token_type = %claims.token_type, "Token type mismatch: expected refresh");
            return Err(RefreshTokenError::InvalidTokenType);
        }

        let user = self
            .user_query
            .find_by_id(claims.sub)
            .await
            .map_err(|e| RefreshTokenError::RepositoryError(e.to_string()))?;

        let Some(user) = user.filter(|user| user.is_active) else {
            warn!(user_id = %claims.sub, "Refresh for a missing or disabled account");
            return Err(RefreshTokenError::TokenRevoked);
        };

        if claims.ver < user.credential_version {
            warn!(
                user_id = %user.id,
                token_version = claims.ver,
                "Refresh token predates the last password change"
            );
            return Err(RefreshTokenError::TokenRevoked);
        }

        let access_token = self
            .token_provider
            .generate_access_token(user.id, user.credential_version)?;

        Ok(RefreshTokenResponse { access_token })
    }
}
