//! Error types for quran-api

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn invalid_dataset(msg: impl Into<String>) -> Self {
        Error::InvalidDataset(msg.into())
    }
}
