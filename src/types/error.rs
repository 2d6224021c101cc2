use thiserror::Error;

/// Errors from loading worlds and configs, and from fallible helpers.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid metadata: {0}")]
    InvalidMetadata(String),
    #[error("out of bounds: {0}")]
    OutOfBounds(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
