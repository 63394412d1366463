use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::auth::application::domain::entities::{SessionUser, UserId};
use crate::auth::application::ports::outgoing::token_provider::{TokenProvider, ACCESS_TOKEN};
use crate::shared::api::ApiResponse;

/// The caller behind a valid access token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub credential_version: i64,
}

impl AuthenticatedUser {
    pub fn id(&self) -> UserId {
        UserId::from(self.user_id)
    }

    pub fn session(&self) -> SessionUser {
        SessionUser::new(self.id(), self.credential_version)
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(token_provider) = req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        else {
            tracing::error!("TokenProvider is not registered as app data");
            return ready(Err(create_api_error(ApiResponse::internal_error())));
        };

        let Some(token) = extract_token_from_header(req) else {
            return ready(Err(create_api_error(ApiResponse::unauthorized(
                "MISSING_AUTH_HEADER",
                "Missing or invalid authorization header",
            ))));
        };

        match token_provider.verify_token(&token) {
            Ok(claims) if claims.token_type == ACCESS_TOKEN => {
                ready(Ok(AuthenticatedUser {
                    user_id: claims.sub,
                    credential_version: claims.ver,
                }))
            }
            Ok(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN_TYPE",
                "Invalid token type",
            )))),
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
