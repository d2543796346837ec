use thiserror::Error;

/// Error taxonomy for the analytics core.
///
/// The statistics functions never construct these: they degrade to
/// empty/NaN outputs and leave "was there enough data" to the caller.
/// Errors only arise at the ingestion and remote-compute boundaries.
#[derive(Debug, Error)]
pub enum Error {
    /// A required selection is missing or invalid before an action
    /// (no target column chosen, negative alpha, request already in flight).
    #[error("validation: {0}")]
    Validation(String),

    /// Capability unavailable, endpoint unreachable, or signing failed.
    #[error("transport: {0}")]
    Transport(String),

    /// The endpoint answered, but the response carries an error field.
    #[error("remote compute: {0}")]
    RemoteCompute(String),

    /// The input file could not be decoded as a table.
    #[error("data format: {0}")]
    DataFormat(String),
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Error::DataFormat(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::DataFormat(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Transport(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
