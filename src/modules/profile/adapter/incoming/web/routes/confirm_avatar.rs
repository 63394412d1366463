use actix_web::{post, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::profile::application::ports::incoming::use_cases::PendingAvatarError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::AvatarBody;

/// Make the pending upload the caller's avatar
#[utoipa::path(
    post,
    path = "/api/users/me/avatar/confirm",
    tag = "profile",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Avatar confirmed", body = inline(SuccessResponse<AvatarBody>)),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "Nothing pending", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/users/me/avatar/confirm")]
pub async fn confirm_avatar_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile.confirm_avatar.execute(user.id()).await {
        Ok(record) => ApiResponse::success(AvatarBody::from(record)),
        Err(PendingAvatarError::NoPendingAvatar) => {
            ApiResponse::not_found("NO_PENDING_AVATAR", "No pending avatar to confirm")
        }
        Err(PendingAvatarError::StorageError(ref e))
        | Err(PendingAvatarError::RepositoryError(ref e)) => {
            error!(user_id = %user.user_id, error = %e, "Avatar confirmation failed");
            ApiResponse::internal_error()
        }
    }
}
