use actix_web::{put, web, Responder};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::profile::application::ports::incoming::use_cases::{
    ProfileFields, UpdateProfileError, UpdateProfileRequest,
};
use crate::shared::api::{ApiResponse, FieldError};
use crate::AppState;

use super::ProfileBody;

#[derive(Deserialize, ToSchema)]
pub struct UpdateProfileRequestDto {
    #[schema(example = "1990-05-17")]
    pub date_of_birth: NaiveDate,

    /// Rich text, at least 10 characters. Sanitized before storage.
    #[schema(example = "<p>Collector of <strong>vintage</strong> pens.</p>")]
    pub bio: String,

    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub favourite_animal: Option<String>,
    #[serde(default)]
    pub hobby: Option<String>,
    #[serde(default)]
    pub favourite_fountain_pen: Option<String>,
}

/// Create or replace the caller's profile
#[utoipa::path(
    put,
    path = "/api/users/me/profile",
    tag = "profile",
    request_body = UpdateProfileRequestDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile saved", body = inline(SuccessResponse<ProfileBody>)),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "Account not found", body = ErrorResponse),
        (status = 422, description = "Invalid profile field", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/users/me/profile")]
pub async fn update_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateProfileRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let fields = ProfileFields {
        given_name: dto.given_name,
        family_name: dto.family_name,
        city: dto.city,
        state: dto.state,
        country: dto.country,
        favourite_animal: dto.favourite_animal,
        hobby: dto.hobby,
        favourite_fountain_pen: dto.favourite_fountain_pen,
    };

    let today = Utc::now().date_naive();
    let request = match UpdateProfileRequest::new(dto.date_of_birth, dto.bio, fields, today) {
        Ok(request) => request,
        Err(e) => {
            let message = e.to_string();
            return ApiResponse::unprocessable(
                "VALIDATION_ERROR",
                &message,
                vec![FieldError {
                    field: e.field().to_string(),
                    code: e.code().to_string(),
                    message: message.clone(),
                }],
            );
        }
    };

    match data.profile.update.execute(user.id(), request).await {
        Ok(view) => ApiResponse::success(ProfileBody::from(view)),
        Err(UpdateProfileError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(UpdateProfileError::RepositoryError(ref e)) => {
            error!(user_id = %user.user_id, error = %e, "Failed to save profile");
            ApiResponse::internal_error()
        }
    }
}
