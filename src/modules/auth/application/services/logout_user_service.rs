use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::ports::incoming::use_cases::{
    LogoutError, LogoutRequest, LogoutResponse, LogoutUserUseCase,
};
use crate::auth::application::ports::outgoing::{
    token_provider::TokenProvider, token_repository::TokenRepository,
};

use super::hash::hash_token;

pub struct LogoutUserService<R>
where
    R: TokenRepository,
{
    token_repository: R,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<R> LogoutUserService<R>
where
    R: TokenRepository,
{
    pub fn new(token_repository: R, token_provider: Arc<dyn TokenProvider + Send + Sync>) -> Self {
        Self {
            token_repository,
            token_provider,
        }
    }
}

#[async_trait]
impl<R> LogoutUserUseCase for LogoutUserService<R>
where
    R: TokenRepository + Send + Sync,
{
    async fn execute(&self, request: LogoutRequest) -> Result<LogoutResponse, LogoutError> {
        if let Some(refresh_token) = request.refresh_token() {
            match self.token_provider.verify_token(refresh_token) {
                Ok(claims) => {
                    let expires_at = DateTime::from_timestamp(claims.exp, 0)
                        .unwrap_or_else(|| Utc::now() + Duration::days(7));

                    self.token_repository
                        .blacklist_token(hash_token(refresh_token), claims.sub, expires_at)
                        .await?;

                    info!(user_id = %claims.sub, "Refresh token revoked");
                }
                // Logging out with a dead token is still a logout.
                Err(e) => warn!(error = %e, "Ignoring unverifiable token on logout"),
            }
        }

        Ok(LogoutResponse {
            message: "Logged out successfully".to_string(),
        })
    }
}
