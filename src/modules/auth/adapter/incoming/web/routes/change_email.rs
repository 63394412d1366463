use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::ports::incoming::use_cases::{ChangeEmailError, ChangeEmailRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::UserInfoBody;

#[derive(Deserialize, ToSchema)]
pub struct ChangeEmailRequestDto {
    #[schema(example = "john.new@example.com")]
    pub email: String,

    #[schema(example = "john.new@example.com")]
    pub confirm_email: String,
}

/// Change the caller's login email
#[utoipa::path(
    put,
    path = "/api/users/me/email",
    tag = "account",
    request_body = ChangeEmailRequestDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Email changed", body = inline(SuccessResponse<UserInfoBody>)),
        (status = 400, description = "Invalid or mismatched email", body = ErrorResponse),
        (status = 401, description = "Missing, invalid or retired access token", body = ErrorResponse),
        (status = 403, description = "Account disabled", body = ErrorResponse),
        (status = 404, description = "Account not found", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/users/me/email")]
pub async fn change_email_handler(
    user: AuthenticatedUser,
    req: web::Json<ChangeEmailRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let request = match ChangeEmailRequest::new(dto.email, dto.confirm_email) {
        Ok(request) => request,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.change_email_use_case.execute(user.session(), request).await {
        Ok(info) => {
            info!(user_id = %user.user_id, "Email change accepted");
            ApiResponse::success(UserInfoBody::from(info))
        }
        Err(ChangeEmailError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(ChangeEmailError::AccountDisabled) => {
            ApiResponse::forbidden("ACCOUNT_DISABLED", "This account is disabled")
        }
        Err(ChangeEmailError::SessionExpired) => ApiResponse::unauthorized(
            "SESSION_EXPIRED",
            "Your password was changed since this session started. Sign in again.",
        ),
        Err(ChangeEmailError::EmailAlreadyExists) => {
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", "Email already registered")
        }
        Err(ChangeEmailError::RepositoryError(ref e)) => {
            error!(user_id = %user.user_id, error = %e, "Email change failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::SessionUser;
    use crate::auth::application::ports::incoming::use_cases::{ChangeEmailUseCase, UserInfo};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::test_helpers::{bearer, test_token_provider};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    struct MockChangeEmail(Result<(), ChangeEmailError>);

    #[async_trait]
    impl ChangeEmailUseCase for MockChangeEmail {
        async fn execute(
            &self,
            session: SessionUser,
            request: ChangeEmailRequest,
        ) -> Result<UserInfo, ChangeEmailError> {
            self.0.clone().map(|_| UserInfo {
                id: session.id.value(),
                email: request.email().to_string(),
            })
        }
    }

    async fn call(
        outcome: Result<(), ChangeEmailError>,
        body: serde_json::Value,
    ) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_change_email(MockChangeEmail(outcome))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(change_email_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/users/me/email")
            .insert_header(("Authorization", bearer(Uuid::new_v4())))
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_change_email_success() {
        let (status, body) = call(
            Ok(()),
            serde_json::json!({ "email": "New@Test.com", "confirm_email": "new@test.com" }),
        )
        .await;

        assert_eq!(status, 200);
        assert_eq!(body["data"]["email"], "new@test.com");
    }

    #[actix_web::test]
    async fn test_change_email_mismatch() {
        let (status, body) = call(
            Ok(()),
            serde_json::json!({ "email": "a@test.com", "confirm_email": "b@test.com" }),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["message"], "The two email fields didn't match");
    }

    #[actix_web::test]
    async fn test_change_email_taken() {
        let (status, body) = call(
            Err(ChangeEmailError::EmailAlreadyExists),
            serde_json::json!({ "email": "a@test.com", "confirm_email": "a@test.com" }),
        )
        .await;

        assert_eq!(status, 409);
        assert_eq!(body["error"]["code"], "EMAIL_ALREADY_EXISTS");
    }

    #[actix_web::test]
    async fn test_change_email_from_retired_session() {
        let (status, body) = call(
            Err(ChangeEmailError::SessionExpired),
            serde_json::json!({ "email": "a@test.com", "confirm_email": "a@test.com" }),
        )
        .await;

        assert_eq!(status, 401);
        assert_eq!(body["error"]["code"], "SESSION_EXPIRED");
    }
}
