use thiserror::Error;

/// Failures of a single DofusDB request
#[derive(Debug, Error)]
pub enum LookupError {
    /// DNS, connection, TLS or body read failure
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API request failed with status: {status}")]
    Status { status: u16 },

    #[error("invalid JSON in response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl LookupError {
    /// HTTP status code, when the server answered with a non-2xx response
    pub fn status(&self) -> Option<u16> {
        match self {
            LookupError::Status { status } => Some(*status),
            _ => None,
        }
    }
}
