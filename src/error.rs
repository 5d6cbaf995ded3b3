use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeeError {
    #[error("Invalid credentials. Please try again.")]
    InvalidCredentials,
    #[error("A student with this Roll Number or Email already exists.")]
    DuplicateStudent,
    #[error("{0}")]
    Validation(String),
    #[error("Amount out of range.")]
    AmountOutOfRange,
    #[error("{0}")]
    Unauthorized(String),
    /// Carries the underlying reason; the message shown is always the same.
    #[error("Sorry, an error occurred while generating the document.")]
    Document(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FeeError>;
