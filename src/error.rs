use thiserror::Error;

/// Failures that abort a report run.
#[derive(Debug, Error)]
pub enum Error {
    /// The OS did not give us a usable view of the current process or host.
    #[error("process snapshot unavailable: {0}")]
    SnapshotUnavailable(String),

    #[error("failed to encode snapshot as JSON: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("encoded snapshot is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),

    /// Writing the report line to the output stream failed.
    #[error("failed to write report: {0}")]
    Emit(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
