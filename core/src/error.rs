//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.
//!
//! Only document loading and configuration are fallible. Grouping, webhook
//! extraction and URL resolution are total over a loaded document.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// Generic errors (unparseable documents, unsupported versions, bad config).
    #[display("General Error: {_0}")]
    General(String),
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(err) => Some(err),
            AppError::General(_) => None,
        }
    }
}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
