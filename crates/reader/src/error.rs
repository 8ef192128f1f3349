use thiserror::Error;

/// Result type for reader operations
pub type Result<T> = std::result::Result<T, ReaderError>;

/// Errors that can occur while loading a node list
#[derive(Error, Debug)]
pub enum ReaderError {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Document is not valid for its format
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No driver recognized the content
    #[error("Unable to detect document format")]
    UnknownFormat,

    /// Input holds nothing but whitespace
    #[error("Empty document")]
    EmptyDocument,

    /// A JSON-lines fragment failed to parse
    #[error("Invalid fragment at line {line}: {source}")]
    InvalidLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Invalid configuration
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

impl ReaderError {
    /// Create an invalid options error
    pub fn invalid_options(msg: impl Into<String>) -> Self {
        Self::InvalidOptions(msg.into())
    }
}
