// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompanySearchError {
    #[error("Store error: {0}")]
    Store(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid search pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Import failed at line {line}: {message}")]
    Import { line: usize, message: String },
}
