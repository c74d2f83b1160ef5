use std::io;
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to serialize media type mappings: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Rendered declaration is not valid UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("'{0}' is not a valid constant identifier")]
    InvalidIdentifier(String),
}

pub type Result<T> = std::result::Result<T, Error>;
