use async_trait::async_trait;
use serde::Serialize;
use std::fmt;

use crate::auth::application::ports::outgoing::token_provider::TokenError;

#[derive(Debug, Clone)]
pub struct RefreshTokenRequest {
    refresh_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshTokenRequestError {
    EmptyToken,
}

impl fmt::Display for RefreshTokenRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefreshTokenRequestError::EmptyToken => write!(f, "Refresh token cannot be empty"),
        }
    }
}

impl std::error::Error for RefreshTokenRequestError {}

impl RefreshTokenRequest {
    pub fn new(refresh_token: String) -> Result<Self, RefreshTokenRequestError> {
        let refresh_token = refresh_token.trim();
        if refresh_token.is_empty() {
            return Err(RefreshTokenRequestError::EmptyToken);
        }

        Ok(Self {
            refresh_token: refresh_token.to_string(),
        })
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }
}

#[derive(Debug, Clone)]
pub enum RefreshTokenError {
    TokenRevoked,
    TokenExpired,
    TokenInvalid,
    InvalidTokenType,
    TokenGenerationFailed(String),
    RepositoryError(String),
}

impl fmt::Display for RefreshTokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefreshTokenError::TokenRevoked => write!(f, "Refresh token has been revoked"),
            RefreshTokenError::TokenExpired => write!(f, "Refresh token has expired"),
            RefreshTokenError::TokenInvalid => write!(f, "Invalid refresh token"),
            RefreshTokenError::InvalidTokenType => write!(f, "Invalid token type"),
            RefreshTokenError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            RefreshTokenError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for RefreshTokenError {}

impl From<TokenError> for RefreshTokenError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::TokenExpired => RefreshTokenError::TokenExpired,
            TokenError::InvalidTokenType(_) => RefreshTokenError::InvalidTokenType,
            TokenError::TokenNotYetValid
            | TokenError::InvalidSignature
            | TokenError::MalformedToken => RefreshTokenError::TokenInvalid,
            TokenError::EncodingError(msg) => RefreshTokenError::TokenGenerationFailed(msg),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RefreshTokenResponse {
    pub access_token: String,
}

#[async_trait]
pub trait RefreshTokenUseCase: Send + Sync {
    async fn execute(
        &self,
        request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError>;
}
