use std::path::PathBuf;

/// Errors from configuration loading and document writing.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// No output path is configured, so nothing can be written.
    #[error("unable to write document: no output path specified in config")]
    MissingOutputPath,

    /// The configuration file could not be parsed.
    #[error("invalid config {path}: {reason}")]
    Config { path: PathBuf, reason: String },

    /// The requested document path would leave the output root.
    #[error("document path {path} escapes the output root")]
    OutsideRoot { path: PathBuf },

    /// Rendering the document to text failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error from the underlying file system.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for output operations.
pub type OutputResult<T> = Result<T, OutputError>;
