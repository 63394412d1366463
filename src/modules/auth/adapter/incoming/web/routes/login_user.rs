use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::SessionResponse;

#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "john@example.com")]
    pub email: String,

    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// User login
///
/// Authenticates with email and password and returns a fresh token pair.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<SessionResponse>)),
        (status = 400, description = "Malformed email or empty password", body = ErrorResponse),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_CREDENTIALS", "message": "Invalid email or password" }
            })
        ),
        (status = 403, description = "Account disabled", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(email = %dto.email, "Login attempt");

    let request = match LoginRequest::new(dto.email, dto.password) {
        Ok(request) => request,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.login_user_use_case.execute(request).await {
        Ok(response) => ApiResponse::success(SessionResponse::new(response.tokens, response.user)),

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(LoginError::AccountDisabled) => {
            warn!("Login failed: account disabled");
            ApiResponse::forbidden("ACCOUNT_DISABLED", "This account is disabled")
        }

        Err(LoginError::PasswordVerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::QueryError(ref e)) => {
            error!(error = %e, "Database query failed");
            ApiResponse::internal_error()
        }
    }
}
