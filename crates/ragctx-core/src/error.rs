use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to load configuration: {0}")]
    Config(#[from] figment::Error),

    #[error("Retrieval failed: {0}")]
    Retrieval(String),

    #[error("Embedding failed: {0}")]
    Embedding(String),
}

pub type Result<T> = std::result::Result<T, Error>;
