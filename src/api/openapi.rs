use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use crate::shared::api::FieldError;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth and account
use crate::auth::adapter::incoming::web::routes::{
    ChangeEmailRequestDto, ChangePasswordRequestDto, LoginRequestDto, LogoutRequestDto,
    RefreshTokenRequestDto, RefreshTokenResponseBody, RegisterUserRequestDto, SessionResponse,
    UserInfoBody,
};

// Profile
use crate::profile::adapter::incoming::web::routes::{
    AvatarBody, ProfileBody, UpdateProfileRequestDto,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Accounts API",
        version = "1.0.0",
        description = "Registration, sessions, credential changes and user profiles",
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::refresh_token_handler,
        crate::auth::adapter::incoming::web::routes::logout_user_handler,

        // Account endpoints
        crate::auth::adapter::incoming::web::routes::change_password_handler,
        crate::auth::adapter::incoming::web::routes::change_email_handler,

        // Profile endpoints
        crate::profile::adapter::incoming::web::routes::get_profile_handler,
        crate::profile::adapter::incoming::web::routes::update_profile_handler,
        crate::profile::adapter::incoming::web::routes::upload_avatar_handler,
        crate::profile::adapter::incoming::web::routes::confirm_avatar_handler,
        crate::profile::adapter::incoming::web::routes::discard_avatar_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<SessionResponse>,
            ErrorResponse,
            ErrorDetail,
            FieldError,

            // Auth DTOs
            RegisterUserRequestDto,
            LoginRequestDto,
            LogoutRequestDto,
            RefreshTokenRequestDto,
            RefreshTokenResponseBody,
            SessionResponse,
            UserInfoBody,

            // Account DTOs
            ChangePasswordRequestDto,
            ChangeEmailRequestDto,

            // Profile DTOs
            UpdateProfileRequestDto,
            ProfileBody,
            AvatarBody
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration and session endpoints"),
        (name = "account", description = "Password and email changes"),
        (name = "profile", description = "Profile and avatar endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from login or register"))
                        .build(),
                ),
            )
        }
    }
}
