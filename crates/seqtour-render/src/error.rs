//! Error types for dumping.

use thiserror::Error;

/// Errors that can occur while rendering or writing a dumped value.
#[derive(Debug, Error)]
pub enum DumpError {
    /// Writing to the destination failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The value could not be converted or serialized.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for DumpError {
    fn from(err: serde_json::Error) -> Self {
        DumpError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for DumpError {
    fn from(err: serde_yaml::Error) -> Self {
        DumpError::Serialization(err.to_string())
    }
}

impl From<csv::Error> for DumpError {
    fn from(err: csv::Error) -> Self {
        DumpError::Serialization(err.to_string())
    }
}

impl From<csv::IntoInnerError<csv::Writer<Vec<u8>>>> for DumpError {
    fn from(err: csv::IntoInnerError<csv::Writer<Vec<u8>>>) -> Self {
        DumpError::Serialization(err.to_string())
    }
}
