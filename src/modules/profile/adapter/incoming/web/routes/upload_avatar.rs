use actix_web::{http::header, post, web, HttpRequest, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::profile::application::domain::avatar_policy::AvatarValidationError;
use crate::profile::application::ports::incoming::use_cases::UploadAvatarError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::AvatarBody;

/// Upload a new avatar image. It stays pending until confirmed.
#[utoipa::path(
    post,
    path = "/api/users/me/avatar",
    tag = "profile",
    request_body(content = Vec<u8>, description = "Raw image bytes", content_type = "image/png"),
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Pending avatar stored", body = inline(SuccessResponse<AvatarBody>)),
        (status = 400, description = "Empty upload or content does not match its type", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 413, description = "Image too large", body = ErrorResponse),
        (status = 415, description = "Unsupported image type", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/users/me/avatar")]
pub async fn upload_avatar_handler(
    user: AuthenticatedUser,
    http_req: HttpRequest,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let content_type = http_req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    match data
        .profile
        .upload_avatar
        .execute(user.id(), content_type, body.to_vec())
        .await
    {
        Ok(record) => ApiResponse::created(AvatarBody::from(record)),
        Err(UploadAvatarError::Invalid(e)) => {
            warn!(user_id = %user.user_id, reason = %e, "Avatar upload rejected");
            match &e {
                AvatarValidationError::TooLarge { .. } => {
                    ApiResponse::payload_too_large("IMAGE_TOO_LARGE", &e.to_string())
                }
                AvatarValidationError::UnsupportedType(_) => {
                    ApiResponse::unsupported_media_type("UNSUPPORTED_IMAGE_TYPE", &e.to_string())
                }
                AvatarValidationError::Empty | AvatarValidationError::ContentMismatch(_) => {
                    ApiResponse::bad_request("INVALID_IMAGE", &e.to_string())
                }
            }
        }
        Err(UploadAvatarError::StorageError(ref e))
        | Err(UploadAvatarError::RepositoryError(ref e)) => {
            error!(user_id = %user.user_id, error = %e, "Avatar upload failed");
            ApiResponse::internal_error()
        }
    }
}
