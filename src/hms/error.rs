use crate::entry::EntryId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HmsError {
    #[error("Malformed {kind} record: {reason}")]
    MalformedRecord { kind: &'static str, reason: String },

    #[error("Invalid {kind} value: {value:?}")]
    InvalidEnumValue { kind: &'static str, value: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Duplicate id: {0}")]
    DuplicateId(EntryId),

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: EntryId },

    #[error("{}:{line}: {source}", path.display())]
    Row {
        path: PathBuf,
        line: usize,
        #[source]
        source: Box<HmsError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

impl HmsError {
    pub(crate) fn malformed(kind: &'static str, reason: impl Into<String>) -> Self {
        HmsError::MalformedRecord {
            kind,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HmsError>;
