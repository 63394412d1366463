use async_trait::async_trait;
use serde::Serialize;
use std::fmt;

use crate::auth::application::ports::outgoing::token_repository::TokenRepositoryError;

#[derive(Debug, Clone, Default)]
pub struct LogoutRequest {
    refresh_token: Option<String>,
}

impl LogoutRequest {
    /// Blank tokens count as absent.
    pub fn new(refresh_token: Option<String>) -> Self {
        Self {
            refresh_token: refresh_token
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty()),
        }
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}

#[derive(Debug, Clone)]
pub enum LogoutError {
    TokenRevocationFailed(String),
    DatabaseError(String),
}

impl fmt::Display for LogoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogoutError::TokenRevocationFailed(msg) => {
                write!(f, "Token revocation failed: {}", msg)
            }
            LogoutError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for LogoutError {}

impl From<TokenRepositoryError> for LogoutError {
    fn from(error: TokenRepositoryError) -> Self {
        match error {
            TokenRepositoryError::DatabaseError(msg) => LogoutError::DatabaseError(msg),
            other => LogoutError::TokenRevocationFailed(other.to_string()),
        }
    }
}

#[async_trait]
pub trait LogoutUserUseCase: Send + Sync {
    async fn execute(&self, request: LogoutRequest) -> Result<LogoutResponse, LogoutError>;
}
