//! Crate-wide error type.
use thiserror::Error;

/// Main error type for deck export operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The presentation-writing capability could not be acquired
    #[error("Capability unavailable: {0}")]
    CapabilityUnavailable(String),

    /// The export was invoked without a usable download target
    #[error("Environment mismatch: {0}")]
    EnvironmentMismatch(String),

    /// The content model violates its schema
    #[error("Invalid content: {0}")]
    InvalidContent(String),

    /// Configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// XML generation error
    #[error("XML error: {0}")]
    Xml(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for deck export operations.
pub type Result<T> = std::result::Result<T, Error>;
