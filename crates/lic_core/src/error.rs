use thiserror::Error;

/// Errors raised by one evaluation run.
///
/// Validation failures abort the whole run before any decision is produced;
/// there is no partial output record.
#[derive(Error, Debug)]
pub enum DecideError {
    /// Top-level input check failed (point-count bounds or count/list mismatch).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A rule rejected its parameter set.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A connector tag outside the legal set was supplied.
    #[error("Unrecognized connector: {0}")]
    UnknownConnector(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<serde_json::Error> for DecideError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            DecideError::Deserialization(err.to_string())
        } else {
            DecideError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, DecideError>;
