//! The error envelope returned by every fallible handler.
//!
//! Handlers never build error responses themselves. They return an
//! [`AppError`] and its [`IntoResponse`] impl logs it and writes the reply,
//! so each failed request is logged exactly once and the underlying cause
//! never reaches the client.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use std::fmt;
use tracing::error;

/// Underlying error kept for the server log
pub type Cause = Box<dyn std::error::Error + Send + Sync>;

/// Stage of the request pipeline that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request body is not the expected JSON
    Decode,
    /// The decoded request could not be mapped to a domain entity
    Conversion,
    /// The store refused or failed the operation
    Store,
    /// The response body could not be serialized
    Encode,
    /// A business rule refused the request
    Rejected,
}

impl FailureKind {
    /// HTTP status reported for this kind of failure
    pub fn status(self) -> StatusCode {
        match self {
            FailureKind::Decode => StatusCode::BAD_REQUEST,
            FailureKind::Conversion => StatusCode::UNPROCESSABLE_ENTITY,
            FailureKind::Rejected => StatusCode::CONFLICT,
            FailureKind::Store | FailureKind::Encode => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Raised when a request targets an id a business rule forbids
#[derive(Debug, thiserror::Error)]
#[error("invalid request id {0}")]
pub struct RejectedId(pub String);

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub kind: FailureKind,
    pub message: String,
    pub cause: Cause,
}

impl AppError {
    /// Builds an envelope whose status follows from `kind`
    pub fn new(kind: FailureKind, cause: impl Into<Cause>, message: impl Into<String>) -> Self {
        AppError {
            status: kind.status(),
            kind,
            message: message.into(),
            cause: cause.into(),
        }
    }

    pub fn decode(cause: serde_json::Error) -> Self {
        let message = format!("decode error: {}", cause);
        Self::new(FailureKind::Decode, cause, message)
    }

    pub fn conversion<E>(cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let message = format!("convert error: {}", cause);
        Self::new(FailureKind::Conversion, cause, message)
    }

    /// Envelope for a failed store read
    pub fn store<E>(cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let message = cause.to_string();
        Self::new(FailureKind::Store, cause, message)
    }

    /// Envelope for a failed store insert
    pub fn store_add<E>(cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let message = format!("add db error: {}", cause);
        Self::new(FailureKind::Store, cause, message)
    }

    pub fn encode(cause: serde_json::Error) -> Self {
        let message = cause.to_string();
        Self::new(FailureKind::Encode, cause, message)
    }

    pub fn rejected_id(id: &str) -> Self {
        Self::new(
            FailureKind::Rejected,
            RejectedId(id.to_string()),
            format!("invalid id: {}", id),
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AppError({}, {})", self.status.as_u16(), self.message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(
            status = self.status.as_u16(),
            kind = ?self.kind,
            message = %self.message,
            cause = ?self.cause,
            "Handler error"
        );

        (
            self.status,
            [(header::X_CONTENT_TYPE_OPTIONS, "nosniff")],
            format!("{}\n", self.message),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn status_follows_failure_kind() {
        let cases = [
            (FailureKind::Decode, StatusCode::BAD_REQUEST),
            (FailureKind::Conversion, StatusCode::UNPROCESSABLE_ENTITY),
            (FailureKind::Store, StatusCode::INTERNAL_SERVER_ERROR),
            (FailureKind::Encode, StatusCode::INTERNAL_SERVER_ERROR),
            (FailureKind::Rejected, StatusCode::CONFLICT),
        ];
        for (kind, status) in cases {
            assert_eq!(kind.status(), status);
        }
    }

    #[test]
    fn decode_message_wraps_serde_error() {
        let cause = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let expected = format!("decode error: {}", cause);

        let err = AppError::decode(cause);
        assert_eq!(err.kind, FailureKind::Decode);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, expected);
    }

    #[test]
    fn rejected_id_names_the_id() {
        let err = AppError::rejected_id("2");
        assert_eq!(err.status, StatusCode::CONFLICT);
        assert_eq!(err.message, "invalid id: 2");
        assert_eq!(err.cause.to_string(), "invalid request id 2");
    }

    #[tokio::test]
    async fn response_is_plain_text_without_cause() {
        let err = AppError::new(FailureKind::Store, "disk I/O error at page 7", "add db error");
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/plain"));
        assert_eq!(response.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"add db error\n");
    }
}
