use thiserror::Error;

/// Failures that reach the user as an error notice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// Input text is not valid JSON, or not an object of string values.
    #[error("{0}")]
    Parse(String),
    /// The clipboard rejected the write (permission denied, no clipboard available).
    #[error("{0}")]
    Clipboard(String),
}

impl From<serde_json::Error> for EditorError {
    fn from(e: serde_json::Error) -> Self {
        EditorError::Parse(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EditorError>;
