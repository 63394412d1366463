use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::api::FieldError;

/// Standard success response wrapper
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,
    /// Response data
    pub data: T,
}

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    /// Error details
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    #[schema(example = "PASSWORD_POLICY_VIOLATION")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "The password does not meet the requirements")]
    pub message: String,

    /// Per-field failures, present on 422 responses
    pub details: Option<Vec<FieldError>>,
}
