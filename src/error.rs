use std::io;
use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to unmarshal JSON ({input}): {source}")]
    Decode {
        input: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("record is not a JSON object: {0}")]
    NotAnObject(String),
    #[error("failed to parse priority {value:?}: {reason}")]
    InvalidPriority { value: String, reason: String },
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
    #[error("error reading input: {0}")]
    Read(#[source] io::Error),
    #[error("failed to write formatted entry: {0}")]
    Write(#[source] io::Error),
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub(crate) fn invalid_priority(value: impl Into<String>, err: ParseIntError) -> Self {
        Error::InvalidPriority {
            value: value.into(),
            reason: err.to_string(),
        }
    }
}
