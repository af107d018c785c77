use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinkError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Snapshot error: {0}")]
    SnapshotError(String),
    #[error("Invalid event: {0}")]
    InvalidEvent(String),
    #[error("Unknown session: {0}")]
    UnknownSession(u32),
    #[error("Internal error: {0}")]
    InternalError(Box<dyn std::error::Error + Send + Sync>),
}

impl From<serde_json::Error> for LinkError {
    fn from(err: serde_json::Error) -> Self {
        LinkError::SnapshotError(err.to_string())
    }
}

#[cfg(feature = "storage-rocksdb")]
impl From<rocksdb::Error> for LinkError {
    fn from(err: rocksdb::Error) -> Self {
        LinkError::InternalError(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, LinkError>;
