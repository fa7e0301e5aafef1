use axum::{
    Json,
    extract::{FromRequest, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::core::errors::{FieldError, UserCrudError};

// Error response struct
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<Vec<FieldError>>,
}

// Newtype wrapper for UserCrudError to implement IntoResponse
#[derive(Debug)]
pub struct ApiError(pub UserCrudError);

impl From<UserCrudError> for ApiError {
    fn from(err: UserCrudError) -> Self {
        ApiError(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(UserCrudError::InvalidBody(rejection.body_text()))
    }
}

/// `Json` extractor whose rejections are reported as an `ErrorResponse`.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let message = self.0.to_string();
        let (status, field_errors) = match self.0 {
            UserCrudError::UserNotFound(_) => (StatusCode::NOT_FOUND, None),
            UserCrudError::EmailAlreadyExists(_) => (StatusCode::BAD_REQUEST, None),
            UserCrudError::Validation(errors) => (StatusCode::BAD_REQUEST, Some(errors.0)),
            UserCrudError::InvalidBody(_) => (StatusCode::BAD_REQUEST, None),
            UserCrudError::DatabaseError(_) => {
                error!("Request failed: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
        };
        (
            status,
            Json(ErrorResponse {
                error: message,
                field_errors,
            }),
        )
            .into_response()
    }
}
