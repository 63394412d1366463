use actix_web::{delete, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::profile::application::ports::incoming::use_cases::PendingAvatarError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::AvatarBody;

/// Throw away the pending upload, keeping the current avatar
#[utoipa::path(
    delete,
    path = "/api/users/me/avatar/pending",
    tag = "profile",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Pending avatar discarded", body = inline(SuccessResponse<AvatarBody>)),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "Nothing pending", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/users/me/avatar/pending")]
pub async fn discard_avatar_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.profile.discard_avatar.execute(user.id()).await {
        Ok(record) => ApiResponse::success(AvatarBody::from(record)),
        Err(PendingAvatarError::NoPendingAvatar) => {
            ApiResponse::not_found("NO_PENDING_AVATAR", "No pending avatar to discard")
        }
        Err(PendingAvatarError::StorageError(ref e))
        | Err(PendingAvatarError::RepositoryError(ref e)) => {
            error!(user_id = %user.user_id, error = %e, "Discarding pending avatar failed");
            ApiResponse::internal_error()
        }
    }
}
