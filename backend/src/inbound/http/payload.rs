//! Payload extractor configuration for the API scope.
//!
//! Actix renders extractor failures with its own error body by default. These
//! configs intercept JSON and path deserialisation failures so a malformed
//! request body produces the same `{"message": …}` shape as every other
//! error path.

use actix_web::error::JsonPayloadError;
use actix_web::web;
use tracing::debug;

use crate::domain::Error;

/// JSON extractor config mapping body failures to a 400 domain error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        debug!(error = %err, "rejecting request body");
        let message = match err {
            JsonPayloadError::ContentType => "request body must be JSON",
            _ => "request body is not valid JSON for this endpoint",
        };
        Error::invalid_request(message).into()
    })
}

/// Path extractor config mapping segment failures to a 400 domain error.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        debug!(error = %err, "rejecting request path");
        Error::invalid_request("request path is not valid for this endpoint").into()
    })
}
