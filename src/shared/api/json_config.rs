use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

/// Malformed or invalid JSON bodies become a 400 envelope instead of
/// actix's plain-text error.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("VALIDATION_ERROR", &message),
        )
        .into()
    })
}
