use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{LogoutError, LogoutRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema, Default)]
pub struct LogoutRequestDto {
    /// Revoked when present and valid
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[derive(Serialize, ToSchema)]
struct LogoutResponseBody {
    message: String,
}

/// Log out, revoking the refresh token if one is supplied
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    request_body = LogoutRequestDto,
    responses(
        (status = 200, description = "Logged out", body = inline(SuccessResponse<LogoutResponseBody>)),
        (status = 503, description = "Token store unavailable", body = ErrorResponse),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_user_handler(
    req: web::Json<LogoutRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = LogoutRequest::new(req.into_inner().refresh_token);

    match data.logout_user_use_case.execute(request).await {
        Ok(response) => {
            info!("User logged out");
            ApiResponse::success(LogoutResponseBody {
                message: response.message,
            })
        }

        Err(LogoutError::TokenRevocationFailed(ref e)) | Err(LogoutError::DatabaseError(ref e)) => {
            error!(error = %e, "Token revocation failed during logout");
            ApiResponse::service_unavailable(
                "TOKEN_STORE_UNAVAILABLE",
                "Could not revoke the refresh token, try again",
            )
        }
    }
}
