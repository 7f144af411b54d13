use crate::models::ErrorResponse;
use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use shared::Error;
use tracing::{error, warn};

/// A `shared::Error` bound to the request path it occurred on
#[derive(Debug)]
pub struct ApiError {
    error: Error,
    path: String,
}

impl ApiError {
    pub fn new(error: Error, uri: &Uri) -> Self {
        Self {
            error,
            path: uri.path().to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self.error {
            Error::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            // Only `try_fetch` callers produce this; the data handlers get
            // an empty list when upstream fails.
            Error::UpstreamUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match self.error {
            Error::InvalidParameter(message) => {
                warn!("Invalid request on {}: {}", self.path, message);
                message
            }
            Error::UpstreamUnavailable(message) => {
                error!("Upstream error on {}: {}", self.path, message);
                message
            }
            Error::Internal(message) => {
                error!("Unexpected error on {}: {}", self.path, message);
                "An unexpected error occurred. Please try again later.".to_string()
            }
        };

        let body = ErrorResponse {
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            message,
            path: self.path,
        };

        (status, Json(body)).into_response()
    }
}

/// Return the trimmed value of a required query parameter
pub fn require_param(value: Option<String>, name: &str) -> Result<String, Error> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(Error::InvalidParameter(format!(
            "Required parameter '{}' is missing",
            name
        ))),
    }
}

/// Parse a boolean query parameter, accepting `true`/`false` in any case
pub fn parse_bool_param(value: Option<String>, name: &str) -> Result<bool, Error> {
    let raw = require_param(value, name)?;
    match raw.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(Error::InvalidParameter(format!(
            "Invalid value for parameter '{}'",
            name
        ))),
    }
}
