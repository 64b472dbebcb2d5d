// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Messages suitable for showing to the user (one flash each)
    pub fn user_messages(&self) -> Vec<String> {
        match self {
            AppError::Domain(e) => e.messages(),
            AppError::Io(_) => vec![self.to_string()],
        }
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
