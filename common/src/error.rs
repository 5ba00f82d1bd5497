use std::path::PathBuf;

/// Failures of the log sink.
///
/// None of these are recovered inside the logger: a broken sink has to be
/// visible to whoever drives the scan.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("cannot open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write to log file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot truncate log file {path}: {source}")]
    Truncate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid timestamp format: {0:?}")]
    InvalidFormat(String),
}

pub type Result<T> = std::result::Result<T, LogError>;
