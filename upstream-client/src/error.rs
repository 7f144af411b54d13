use thiserror::Error;

/// Errors that can occur when talking to the upstream API
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Connection, timeout or body read failure
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Non-2xx status code
    #[error("upstream responded with HTTP {0}")]
    Status(u16),

    /// The API reports errors as a JSON object with an `error` code
    #[error("upstream error {code}: {message}")]
    Remote { code: String, message: String },

    #[error("failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Valid JSON that is neither a list nor an error object
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(&'static str),
}

impl From<UpstreamError> for shared::Error {
    fn from(err: UpstreamError) -> Self {
        shared::Error::UpstreamUnavailable(err.to_string())
    }
}
