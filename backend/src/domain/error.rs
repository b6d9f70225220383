//! Domain-level error payload.
//!
//! Transport agnostic: the HTTP adapter maps [`ErrorCode`] to a status code
//! and serialises the payload. The wire body carries only the human-readable
//! `message`; the code exists solely to pick the status.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Machine-readable failure category, used for HTTP status mapping only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The targeted record does not exist.
    NotFound,
    /// The operation collides with an existing record.
    Conflict,
    /// Infrastructure failure: connection, query, or row decoding.
    InternalError,
}

/// Error payload returned to clients.
///
/// Serialises as `{"message": "..."}`. Correlation identifiers travel in the
/// `Trace-Id` response header rather than the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "ErrorBody")]
pub struct Error {
    code: ErrorCode,
    message: String,
}

/// Wire shape of an error response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable description of the failure.
    #[schema(example = "no student with that identifier")]
    pub message: String,
}

impl From<Error> for ErrorBody {
    fn from(value: Error) -> Self {
        Self {
            message: value.message,
        }
    }
}

impl Error {
    /// Create an error with an explicit code.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Failure category for status mapping.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::Conflict`].
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
    #[case(Error::not_found("gone"), ErrorCode::NotFound)]
    #[case(Error::conflict("taken"), ErrorCode::Conflict)]
    #[case(Error::internal("boom"), ErrorCode::InternalError)]
    fn constructors_set_the_expected_code(#[case] error: Error, #[case] expected: ErrorCode) {
        assert_eq!(error.code(), expected);
    }

    #[test]
    fn serialises_message_only() {
        let error = Error::conflict("a student with identifier A1 already exists");
        let value = serde_json::to_value(&error).expect("error serialises");

        assert_eq!(
            value,
            serde_json::json!({ "message": "a student with identifier A1 already exists" })
        );
    }

    #[test]
    fn display_matches_message() {
        let error = Error::not_found("missing");
        assert_eq!(error.to_string(), "missing");
    }
}
