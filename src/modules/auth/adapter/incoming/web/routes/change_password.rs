use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::ports::incoming::use_cases::{
    ChangePasswordError, ChangePasswordRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::policy_details;

#[derive(Deserialize, ToSchema)]
pub struct ChangePasswordRequestDto {
    #[schema(example = "ValidPass123456,./")]
    pub old_password: String,

    #[schema(example = "NewValidPass7890!@#")]
    pub new_password1: String,

    #[schema(example = "NewValidPass7890!@#")]
    pub new_password2: String,
}

#[derive(Serialize, ToSchema)]
pub struct ChangePasswordResponseBody {
    /// Incremented on every successful change
    #[schema(example = 1)]
    pub credential_version: i64,

    pub access_token: String,
    pub refresh_token: String,
}

/// Change the caller's password
///
/// Every failed check is reported in `error.details`, one entry per failure
/// code, attached to the form field it concerns.
#[utoipa::path(
    put,
    path = "/api/users/me/password",
    tag = "account",
    request_body = ChangePasswordRequestDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Password changed, new token pair issued", body = inline(SuccessResponse<ChangePasswordResponseBody>)),
        (status = 401, description = "Missing, invalid or retired access token", body = ErrorResponse),
        (status = 403, description = "Account disabled", body = ErrorResponse),
        (status = 404, description = "Account not found", body = ErrorResponse),
        (status = 409, description = "The password changed concurrently", body = ErrorResponse),
        (
            status = 422,
            description = "One or more checks failed",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "PASSWORD_POLICY_VIOLATION",
                    "message": "The password change was rejected",
                    "details": [
                        {
                            "field": "old_password",
                            "code": "password_incorrect",
                            "message": "Your old password was entered incorrectly. Please enter it again."
                        },
                        {
                            "field": "new_password1",
                            "code": "other_identity_component",
                            "message": "The password must not contain your email address, given name or family name."
                        }
                    ]
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/users/me/password")]
pub async fn change_password_handler(
    user: AuthenticatedUser,
    req: web::Json<ChangePasswordRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let request = ChangePasswordRequest {
        old_password: dto.old_password,
        new_password1: dto.new_password1,
        new_password2: dto.new_password2,
    };

    match data
        .change_password_use_case
        .execute(user.session(), request)
        .await
    {
        Ok(response) => {
            info!(user_id = %user.user_id, "Password change accepted");
            ApiResponse::success(ChangePasswordResponseBody {
                credential_version: response.credential_version,
                access_token: response.tokens.access_token,
                refresh_token: response.tokens.refresh_token,
            })
        }

        Err(ChangePasswordError::PolicyViolation(failures)) => ApiResponse::unprocessable(
            "PASSWORD_POLICY_VIOLATION",
            "The password change was rejected",
            policy_details(&failures),
        ),

        Err(ChangePasswordError::UserNotFound) => {
            warn!(user_id = %user.user_id, "Password change for a missing account");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(ChangePasswordError::AccountDisabled) => {
            ApiResponse::forbidden("ACCOUNT_DISABLED", "This account is disabled")
        }

        Err(ChangePasswordError::SessionExpired) => ApiResponse::unauthorized(
            "SESSION_EXPIRED",
            "Your password was changed since this session started. Sign in again.",
        ),

        Err(ChangePasswordError::CredentialConflict) => ApiResponse::conflict(
            "CREDENTIAL_CONFLICT",
            "Your password was changed by another request. Reload and try again.",
        ),

        Err(ChangePasswordError::HashingFailed(ref e))
        | Err(ChangePasswordError::TokenGenerationFailed(ref e))
        | Err(ChangePasswordError::QueryError(ref e))
        | Err(ChangePasswordError::RepositoryError(ref e)) => {
            error!(user_id = %user.user_id, error = %e, "Password change failed");
            ApiResponse::internal_error()
        }
    }
}
