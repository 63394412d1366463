use async_trait::async_trait;
use serde::Serialize;
use std::fmt;

use crate::auth::application::domain::{
    entities::{parse_email, EmailError},
    password_validation::PolicyFailure,
};

use super::login_user::{AuthTokens, UserInfo};

#[derive(Clone)]
pub struct RegisterUserRequest {
    email: String,
    password1: String,
    password2: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterRequestError {
    Email(EmailError),
    EmptyPassword,
}

impl fmt::Display for RegisterRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterRequestError::Email(e) => write!(f, "{}", e),
            RegisterRequestError::EmptyPassword => write!(f, "Password cannot be empty"),
        }
    }
}

impl std::error::Error for RegisterRequestError {}

impl RegisterUserRequest {
    pub fn new(
        email: String,
        password1: String,
        password2: String,
    ) -> Result<Self, RegisterRequestError> {
        let email = parse_email(&email).map_err(RegisterRequestError::Email)?;

        if password1.is_empty() {
            return Err(RegisterRequestError::EmptyPassword);
        }

        Ok(Self {
            email,
            password1,
            password2,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password1(&self) -> &str {
        &self.password1
    }

    pub fn password2(&self) -> &str {
        &self.password2
    }
}

impl fmt::Debug for RegisterUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterUserRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub enum RegisterUserError {
    PasswordPolicy(Vec<PolicyFailure>),
    EmailAlreadyExists,
    HashingFailed(String),
    TokenGenerationFailed(String),
    RepositoryError(String),
}

impl fmt::Display for RegisterUserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterUserError::PasswordPolicy(failures) => {
                write!(f, "Password rejected by {} rule(s)", failures.len())
            }
            RegisterUserError::EmailAlreadyExists => write!(f, "Email already registered"),
            RegisterUserError::HashingFailed(msg) => write!(f, "Password hashing failed: {}", msg),
            RegisterUserError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            RegisterUserError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for RegisterUserError {}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterUserResponse {
    pub user: UserInfo,
    pub tokens: AuthTokens,
}

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(
        &self,
        request: RegisterUserRequest,
    ) -> Result<RegisterUserResponse, RegisterUserError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_keeps_passwords_verbatim() {
        let request = RegisterUserRequest::new(
            "New@Test.com".to_string(),
            " Ul123456,./ ".to_string(),
            "other".to_string(),
        )
        .unwrap();

        assert_eq!(request.email(), "new@test.com");
        assert_eq!(request.password1(), " Ul123456,./ ");
        assert_eq!(request.password2(), "other");
    }

    #[test]
    fn test_register_request_rejects_empty_password() {
        let result =
            RegisterUserRequest::new("new@test.com".to_string(), String::new(), String::new());

        assert_eq!(result.unwrap_err(), RegisterRequestError::EmptyPassword);
    }
}
