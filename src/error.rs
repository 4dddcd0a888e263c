use std::path::PathBuf;
use thiserror::Error;

/// Errors that can abort a matchcopy run.
///
/// Every variant is fatal: the run reports the message and stops. There is
/// no retry and no skip-and-continue past a failed transfer.
#[derive(Error, Debug)]
pub enum MatchCopyError {
    /// Bad CLI combination, unrecognized mode, or an invalid glob pattern
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Source, destination, or input-file path does not exist
    #[error("path does not exist: {0}")]
    InputNotFound(PathBuf),

    /// Input CSV is missing the required `pattern` column or has broken rows
    #[error("malformed input file {path}: {message}")]
    MalformedInput { path: PathBuf, message: String },

    /// A copy or move failed mid-run
    #[error("failed to transfer {path}: {source}")]
    Transfer {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The receipt file could not be written (transfers are not rolled back)
    #[error("failed to write receipts: {0}")]
    Receipt(#[from] std::io::Error),
}
