use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure or non-success HTTP status.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body did not match the expected payload shape.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The backend answered with `success = false`.
    #[error("Backend error: {0}")]
    Backend(String),
}

pub type ApiResult<T> = Result<T, ApiError>;
