use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{
    RegisterUserError, RegisterUserRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::{policy_details, SessionResponse};

#[derive(Deserialize, ToSchema)]
pub struct RegisterUserRequestDto {
    #[schema(example = "john@example.com")]
    pub email: String,

    #[schema(example = "SecurePass123!")]
    pub password1: String,

    /// Must repeat `password1` exactly
    #[schema(example = "SecurePass123!")]
    pub password2: String,
}

/// Register a new account
///
/// Creates the account and signs the user in right away.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterUserRequestDto,
    responses(
        (status = 201, description = "Account created", body = inline(SuccessResponse<SessionResponse>)),
        (status = 400, description = "Malformed email or empty password", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (
            status = 422,
            description = "Password rejected by the password rules",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "PASSWORD_POLICY_VIOLATION",
                    "message": "The password does not meet the requirements",
                    "details": [
                        { "field": "new_password1", "code": "no_number", "message": "The password must contain at least 1 digit, 0-9." }
                    ]
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match RegisterUserRequest::new(dto.email, dto.password1, dto.password2) {
        Ok(request) => request,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.register_user_use_case.execute(request).await {
        Ok(response) => {
            info!(user_id = %response.user.id, "Account created");
            ApiResponse::created(SessionResponse::new(response.tokens, response.user))
        }

        Err(RegisterUserError::PasswordPolicy(failures)) => ApiResponse::unprocessable(
            "PASSWORD_POLICY_VIOLATION",
            "The password does not meet the requirements",
            policy_details(&failures),
        ),

        Err(RegisterUserError::EmailAlreadyExists) => {
            warn!("Registration with an existing email");
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", "Email already registered")
        }

        Err(RegisterUserError::HashingFailed(ref e))
        | Err(RegisterUserError::TokenGenerationFailed(ref e))
        | Err(RegisterUserError::RepositoryError(ref e)) => {
            error!(error = %e, "Registration failed");
            ApiResponse::internal_error()
        }
    }
}
