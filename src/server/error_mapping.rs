use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::warn;

use crate::item::{ItemError, MessageBody};

pub const NOT_FOUND_MESSAGE: &str = "Item not found";
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// Trait for mapping domain errors to an HTTP status, a stable code, and a client message.
pub trait ToApiError {
    fn status_and_code(&self) -> (StatusCode, &str);
    fn public_message(&self) -> String;
}

impl ToApiError for ItemError {
    fn status_and_code(&self) -> (StatusCode, &str) {
        match self {
            ItemError::NotFound(_) => (StatusCode::NOT_FOUND, "ITEM_NOT_FOUND"),
            ItemError::ValidationError(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ItemError::MalformedBody(_) => (StatusCode::BAD_REQUEST, "INVALID_BODY"),
        }
    }

    fn public_message(&self) -> String {
        match self {
            ItemError::NotFound(_) => NOT_FOUND_MESSAGE.to_string(),
            ItemError::ValidationError(msg) => msg.clone(),
            ItemError::MalformedBody(_) => INVALID_BODY_MESSAGE.to_string(),
        }
    }
}

// Extractor rejections go through `ItemError` so clients always get a `{message}` body.
impl From<BytesRejection> for ItemError {
    fn from(rejection: BytesRejection) -> Self {
        ItemError::malformed(rejection.body_text())
    }
}

impl From<PathRejection> for ItemError {
    fn from(rejection: PathRejection) -> Self {
        ItemError::malformed(rejection.body_text())
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        warn!(error.code = %code, status = %status.as_u16(), "{self}");
        (status, Json(MessageBody::new(self.public_message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ItemError::not_found("9");
        assert_eq!(err.status_and_code(), (StatusCode::NOT_FOUND, "ITEM_NOT_FOUND"));
        assert_eq!(err.public_message(), "Item not found");
    }

    #[test]
    fn test_validation_keeps_its_message() {
        let err = ItemError::validation("Name and description are required");
        assert_eq!(err.status_and_code().0, StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "Name and description are required");
    }

    #[test]
    fn test_malformed_hides_parser_detail() {
        let err = ItemError::malformed("expected value at line 1 column 1");
        assert_eq!(err.status_and_code(), (StatusCode::BAD_REQUEST, "INVALID_BODY"));
        assert_eq!(err.public_message(), "Invalid request body");
    }

    #[test]
    fn test_into_response_status() {
        let response = ItemError::not_found("1").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
