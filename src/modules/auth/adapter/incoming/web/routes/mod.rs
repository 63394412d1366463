mod change_email;
mod change_password;
mod login_user;
mod logout_user;
mod refresh_token;
mod register_user;

use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::password_validation::PolicyFailure;
use crate::auth::application::ports::incoming::use_cases::{AuthTokens, UserInfo};
use crate::shared::api::FieldError;

pub use change_email::{change_email_handler, __path_change_email_handler};
pub use change_password::{change_password_handler, __path_change_password_handler};
pub use login_user::{login_user_handler, __path_login_user_handler};
pub use logout_user::{logout_user_handler, __path_logout_user_handler};
pub use refresh_token::{refresh_token_handler, __path_refresh_token_handler};
pub use register_user::{register_user_handler, __path_register_user_handler};

pub use change_password::ChangePasswordRequestDto;
pub use change_email::ChangeEmailRequestDto;
pub use login_user::LoginRequestDto;
pub use logout_user::LogoutRequestDto;
pub use refresh_token::{RefreshTokenRequestDto, RefreshTokenResponseBody};
pub use register_user::RegisterUserRequestDto;

/// Body returned whenever a session is (re)established.
#[derive(Serialize, ToSchema)]
pub struct SessionResponse {
    /// JWT access token (short-lived)
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,

    /// JWT refresh token (long-lived)
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub refresh_token: String,

    pub user: UserInfoBody,
}

#[derive(Serialize, ToSchema)]
pub struct UserInfoBody {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,

    #[schema(example = "john@example.com")]
    pub email: String,
}

impl From<UserInfo> for UserInfoBody {
    fn from(user: UserInfo) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email,
        }
    }
}

impl SessionResponse {
    fn new(tokens: AuthTokens, user: UserInfo) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            user: user.into(),
        }
    }
}

/// One `FieldError` per failed password check, in evaluation order.
pub(crate) fn policy_details(failures: &[PolicyFailure]) -> Vec<FieldError> {
    failures
        .iter()
        .map(|failure| FieldError {
            field: failure.field.as_str().to_string(),
            code: failure.code.as_str().to_string(),
            message: failure.message.clone(),
        })
        .collect()
}
