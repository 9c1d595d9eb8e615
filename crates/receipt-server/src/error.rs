//! Mapping of service errors onto HTTP responses.

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use receipt_core::{ReceiptError, VendorError};

/// Error returned by the HTTP handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Processing failed in the receipt service.
    #[error(transparent)]
    Receipt(#[from] ReceiptError),

    /// A required form field was not sent.
    #[error("missing form field: {0}")]
    MissingField(&'static str),

    /// The multipart body could not be read.
    #[error("invalid multipart body: {message}")]
    Multipart { status: StatusCode, message: String },
}

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self {
        Self::Multipart {
            status: e.status(),
            message: e.body_text(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Receipt(ReceiptError::MissingApiKey) => StatusCode::BAD_REQUEST,
            Self::Receipt(ReceiptError::Vendor(VendorError::Status { status, .. })) => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::Receipt(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::MissingField(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Multipart { status, .. } => *status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(ReceiptError::MissingApiKey).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(ReceiptError::from(VendorError::Status {
                vendor: "Mistral".into(),
                status: 401,
                body: "nope".into(),
            }))
            .status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::from(ReceiptError::from(VendorError::Transport {
                vendor: "Mistral".into(),
                message: "timed out".into(),
            }))
            .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ApiError::MissingField("file").status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_out_of_range_vendor_status() {
        let err = ApiError::from(ReceiptError::from(VendorError::Status {
            vendor: "Mistral".into(),
            status: 42,
            body: String::new(),
        }));
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_multipart_keeps_its_status() {
        let err = ApiError::Multipart {
            status: StatusCode::PAYLOAD_TOO_LARGE,
            message: "failed to read stream".into(),
        };
        assert_eq!(err.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err.to_string(), "invalid multipart body: failed to read stream");
    }
}
