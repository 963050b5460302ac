use thiserror::Error;

/// Failure talking to the remote API.
///
/// A server that answers `status: false` is not an error at this level; it
/// is a normal response the use case interprets.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },

    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: u16 },

    #[error("failed to decode {endpoint} response: {message}")]
    Decode { endpoint: String, message: String },
}

impl ApiError {
    pub fn endpoint(&self) -> &str {
        match self {
            ApiError::Transport { endpoint, .. }
            | ApiError::Status { endpoint, .. }
            | ApiError::Decode { endpoint, .. } => endpoint,
        }
    }
}
