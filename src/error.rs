//! Error types for the Agent Arena application.

use thiserror::Error;

/// The main error type for Agent Arena.
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal/TUI related errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog (static dashboard data) errors
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Channel communication errors
    #[error("Channel error: {0}")]
    Channel(String),

    /// A rotation was built over a list with no items.
    #[error("Cannot rotate over an empty {0} list")]
    EmptyItemList(String),

    /// Invalid input or state
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Alias for Result with our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new terminal error.
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a new config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new catalog error.
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Create a new channel error.
    pub fn channel(msg: impl Into<String>) -> Self {
        Self::Channel(msg.into())
    }

    /// Create a new empty item list error for the named list.
    pub fn empty_item_list(what: impl Into<String>) -> Self {
        Self::EmptyItemList(what.into())
    }

    /// Create a new invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Check if this error is recoverable (user can retry).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::Channel(_))
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_item_list_message() {
        let err = Error::empty_item_list("agent");
        assert_eq!(err.to_string(), "Cannot rotate over an empty agent list");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_invalid_input_is_recoverable() {
        assert!(Error::invalid_input("index 9 out of range").is_recoverable());
        assert!(!Error::config("bad").is_recoverable());
    }
}
