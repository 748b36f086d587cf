//! Error Types

use thiserror::Error;

/// Result type alias for classification stages
pub type Result<T> = std::result::Result<T, FormatError>;

/// Why a classification stage did not produce its layout.
///
/// These never reach the user; `classify` logs them and tries the next stage.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Content is not JSON, or the JSON does not fit the expected shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The stage's preconditions are not met
    #[error("No match: {0}")]
    NoMatch(&'static str),
}

impl FormatError {
    /// True when the content was not JSON at all, as opposed to JSON of
    /// an unexpected shape
    pub fn is_syntax(&self) -> bool {
        matches!(self, FormatError::Json(e) if e.is_syntax() || e.is_eof())
    }
}
