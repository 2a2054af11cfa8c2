use thiserror::Error;

/// Errors from talking to the booking backend.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Please fill all details!")]
    MissingFields,

    #[error("Passwords do not match!")]
    PasswordMismatch,

    /// The backend refused the request and explained why.
    #[error("{detail}")]
    Rejected { status: u16, detail: String },

    /// The backend answered with a status the client has no handling for.
    #[error("Unexpected error (status {0})")]
    Unexpected(u16),

    /// A successful response whose body is not a valid identity.
    #[error("Invalid response from backend: {0}")]
    InvalidResponse(String),

    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// HTTP status attached to the error, if the backend produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            ApiError::Unexpected(status) => Some(*status),
            _ => None,
        }
    }

    /// Get error code for the error type
    pub fn error_code(&self) -> &str {
        match self {
            ApiError::MissingFields => "MISSING_FIELDS",
            ApiError::PasswordMismatch => "PASSWORD_MISMATCH",
            ApiError::Rejected { .. } => "REJECTED",
            ApiError::Unexpected(_) => "UNEXPECTED",
            ApiError::InvalidResponse(_) => "INVALID_RESPONSE",
            ApiError::InvalidUrl(_) => "INVALID_URL",
            ApiError::Transport(_) => "TRANSPORT",
        }
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
