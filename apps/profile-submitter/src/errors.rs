use reqwest::StatusCode;
use thiserror::Error;

/// Failure modes of a single profile request.
/// Never leaves the client: `SubmissionResult::from_outcome` flattens it at the boundary.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Request timed out")]
    Timeout,

    #[error("HTTP error! status: {status}, body: {message}")]
    Status { status: u16, message: String },

    #[error("User not found")]
    NotFound,

    #[error("{0}")]
    Transport(reqwest::Error),

    #[error("Failed to serialize profile: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("{0}")]
    NotConfigured(&'static str),
}

impl SubmitError {
    /// Status code reported to the caller for this failure.
    /// 408 on timeout is synthesized here; the transport never produced a response.
    pub fn status_code(&self) -> u16 {
        match self {
            SubmitError::Timeout => StatusCode::REQUEST_TIMEOUT.as_u16(),
            SubmitError::Status { status, .. } => *status,
            SubmitError::NotFound => StatusCode::NOT_FOUND.as_u16(),
            SubmitError::Transport(e) => e
                .status()
                .map(|s| s.as_u16())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR.as_u16()),
            SubmitError::Serialize(_) | SubmitError::NotConfigured(_) => {
                StatusCode::INTERNAL_SERVER_ERROR.as_u16()
            }
        }
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            SubmitError::Timeout
        } else {
            SubmitError::Transport(e)
        }
    }
}
