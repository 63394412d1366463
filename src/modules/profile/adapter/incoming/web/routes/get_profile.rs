use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::profile::application::ports::incoming::use_cases::FetchProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::ProfileBody;

/// Fetch the caller's profile
#[utoipa::path(
    get,
    path = "/api/users/me/profile",
    tag = "profile",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile found", body = inline(SuccessResponse<ProfileBody>)),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "Profile or account not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/users/me/profile")]
pub async fn get_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile.fetch.execute(user.id()).await {
        Ok(view) => ApiResponse::success(ProfileBody::from(view)),
        Err(FetchProfileError::ProfileNotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }
        Err(FetchProfileError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(FetchProfileError::RepositoryError(ref e)) => {
            error!(user_id = %user.user_id, error = %e, "Failed to fetch profile");
            ApiResponse::internal_error()
        }
    }
}
