use async_trait::async_trait;
use serde::Serialize;
use std::fmt;

use crate::auth::application::domain::{entities::SessionUser, password_validation::PolicyFailure};

use super::login_user::AuthTokens;

/// The three password form fields, verbatim. No trimming: whitespace is
/// part of a password.
#[derive(Clone)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password1: String,
    pub new_password2: String,
}

impl fmt::Debug for ChangePasswordRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ChangePasswordRequest { .. }")
    }
}

#[derive(Debug, Clone)]
pub enum ChangePasswordError {
    UserNotFound,
    AccountDisabled,
    /// The access token predates the last credential change.
    SessionExpired,
    /// Every failed rule, in evaluation order.
    PolicyViolation(Vec<PolicyFailure>),
    /// The stored credential changed between read and write; re-read and retry.
    CredentialConflict,
    HashingFailed(String),
    TokenGenerationFailed(String),
    QueryError(String),
    RepositoryError(String),
}

impl fmt::Display for ChangePasswordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangePasswordError::UserNotFound => write!(f, "User not found"),
            ChangePasswordError::AccountDisabled => write!(f, "This account is disabled"),
            ChangePasswordError::SessionExpired => {
                write!(f, "The session ended after a password change")
            }
            ChangePasswordError::PolicyViolation(failures) => {
                write!(f, "Password rejected by {} rule(s)", failures.len())
            }
            ChangePasswordError::CredentialConflict => {
                write!(f, "The password was changed by another request")
            }
            ChangePasswordError::HashingFailed(msg) => write!(f, "Password hashing failed: {}", msg),
            ChangePasswordError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            ChangePasswordError::QueryError(msg) => write!(f, "Query error: {}", msg),
            ChangePasswordError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for ChangePasswordError {}

#[derive(Debug, Clone, Serialize)]
pub struct ChangePasswordResponse {
    pub credential_version: i64,
    pub tokens: AuthTokens,
}

#[async_trait]
pub trait ChangePasswordUseCase: Send + Sync {
    async fn execute(
        &self,
        session: SessionUser,
        request: ChangePasswordRequest,
    ) -> Result<ChangePasswordResponse, ChangePasswordError>;
}
