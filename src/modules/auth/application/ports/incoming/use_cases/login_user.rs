use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use crate::auth::application::domain::entities::{parse_email, EmailError};

// ========================= Login Request =========================
/// Credentials with a normalized email. The password is kept verbatim.
#[derive(Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginRequestError {
    Email(EmailError),
    EmptyPassword,
}

impl fmt::Display for LoginRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginRequestError::Email(e) => write!(f, "{}", e),
            LoginRequestError::EmptyPassword => write!(f, "Password cannot be empty"),
        }
    }
}

impl std::error::Error for LoginRequestError {}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Result<Self, LoginRequestError> {
        let email = parse_email(&email).map_err(LoginRequestError::Email)?;

        if password.trim().is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone)]
pub enum LoginError {
    InvalidCredentials,
    AccountDisabled,
    PasswordVerificationFailed(String),
    TokenGenerationFailed(String),
    QueryError(String),
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginError::InvalidCredentials => write!(f, "Invalid email or password"),
            LoginError::AccountDisabled => write!(f, "This account is disabled"),
            LoginError::PasswordVerificationFailed(msg) => {
                write!(f, "Password verification failed: {}", msg)
            }
            LoginError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            LoginError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for LoginError {}

// ============================ Responses =================================
#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    pub id: Uuid,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginUserResponse {
    pub tokens: AuthTokens,
    pub user: UserInfo,
}

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError>;
}
