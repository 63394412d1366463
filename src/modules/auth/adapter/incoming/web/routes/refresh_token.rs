use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{
    RefreshTokenError, RefreshTokenRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct RefreshTokenRequestDto {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub refresh_token: String,
}

#[derive(Serialize, ToSchema)]
pub struct RefreshTokenResponseBody {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
}

/// Exchange a refresh token for a new access token
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "auth",
    request_body = RefreshTokenRequestDto,
    responses(
        (status = 200, description = "New access token", body = inline(SuccessResponse<RefreshTokenResponseBody>)),
        (status = 400, description = "Empty token", body = ErrorResponse),
        (status = 401, description = "Revoked, expired or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/refresh")]
pub async fn refresh_token_handler(
    req: web::Json<RefreshTokenRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = match RefreshTokenRequest::new(req.into_inner().refresh_token) {
        Ok(request) => request,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.refresh_token_use_case.execute(request).await {
        Ok(response) => ApiResponse::success(RefreshTokenResponseBody {
            access_token: response.access_token,
        }),

        Err(RefreshTokenError::TokenRevoked) => {
            warn!("Refresh attempted with revoked token");
            ApiResponse::unauthorized("TOKEN_REVOKED", "Refresh token has been revoked")
        }
        Err(RefreshTokenError::TokenExpired) => {
            ApiResponse::unauthorized("TOKEN_EXPIRED", "Refresh token has expired")
        }
        Err(RefreshTokenError::TokenInvalid) => {
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid refresh token")
        }
        Err(RefreshTokenError::InvalidTokenType) => {
            ApiResponse::unauthorized("INVALID_TOKEN_TYPE", "Invalid token type")
        }
        Err(RefreshTokenError::TokenGenerationFailed(ref e))
        | Err(RefreshTokenError::RepositoryError(ref e)) => {
            error!(error = %e, "Token refresh failed");
            ApiResponse::internal_error()
        }
    }
}
