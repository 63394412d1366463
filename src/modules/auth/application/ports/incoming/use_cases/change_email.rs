use async_trait::async_trait;
use std::fmt;

use crate::auth::application::domain::entities::{parse_email, EmailError, SessionUser};

use super::login_user::UserInfo;

#[derive(Debug, Clone)]
pub struct ChangeEmailRequest {
    email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEmailRequestError {
    Email(EmailError),
    EmailMismatch,
}

impl fmt::Display for ChangeEmailRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeEmailRequestError::Email(e) => write!(f, "{}", e),
            ChangeEmailRequestError::EmailMismatch => {
                write!(f, "The two email fields didn't match")
            }
        }
    }
}

impl std::error::Error for ChangeEmailRequestError {}

impl ChangeEmailRequest {
    /// Both fields are compared after normalization.
    pub fn new(email: String, confirm_email: String) -> Result<Self, ChangeEmailRequestError> {
        let email = parse_email(&email).map_err(ChangeEmailRequestError::Email)?;
        let confirm = parse_email(&confirm_email).map_err(ChangeEmailRequestError::Email)?;

        if email != confirm {
            return Err(ChangeEmailRequestError::EmailMismatch);
        }

        Ok(Self { email })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

#[derive(Debug, Clone)]
pub enum ChangeEmailError {
    UserNotFound,
    AccountDisabled,
    /// The access token predates the last credential change.
    SessionExpired,
    EmailAlreadyExists,
    RepositoryError(String),
}

impl fmt::Display for ChangeEmailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeEmailError::UserNotFound => write!(f, "User not found"),
            ChangeEmailError::AccountDisabled => write!(f, "This account is disabled"),
            ChangeEmailError::SessionExpired => {
                write!(f, "The session ended after a password change")
            }
            ChangeEmailError::EmailAlreadyExists => write!(f, "Email already registered"),
            ChangeEmailError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for ChangeEmailError {}

#[async_trait]
pub trait ChangeEmailUseCase: Send + Sync {
    async fn execute(
        &self,
        session: SessionUser,
        request: ChangeEmailRequest,
    ) -> Result<UserInfo, ChangeEmailError>;
}
