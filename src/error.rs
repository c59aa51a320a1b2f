use reqwest::StatusCode;

/// Failure talking to the posts API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server responded with {0}")]
    Status(StatusCode),

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ApiError {
    /// Transport failures and non-2xx responses are treated alike by every pipeline.
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Transport(_) | ApiError::Status(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, ApiError::Decode(_))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Rejected locally, before anything reaches the server.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Message must not be empty")]
    EmptyMessage,

    #[error("Pick a category")]
    MissingCategory,

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}
