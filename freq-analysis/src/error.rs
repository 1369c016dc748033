//! Error types for frequency analysis and cipher operations

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrequencyError {
    #[error("corpus contains no recognized letters")]
    EmptyCorpus,

    #[error("mapping is not a bijection over the alphabet")]
    NotBijective,

    #[error("malformed reference table: {0}")]
    MalformedTable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FrequencyError>;
