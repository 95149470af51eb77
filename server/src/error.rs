//! Error types for the preview server.

use leptos::config::errors::LeptosConfigError;
use thiserror::Error;

/// Result type alias using `ServerError`.
pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Error, Debug)]
pub enum ServerError {
    /// cargo-leptos configuration could not be read.
    #[error("Configuration error: {0}")]
    Config(#[from] LeptosConfigError),

    /// The logger was already installed.
    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),

    /// Binding or serving failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err: ServerError = io_err.into();
        assert!(err.to_string().contains("IO error"));
        assert!(err.to_string().contains("address in use"));
    }
}
