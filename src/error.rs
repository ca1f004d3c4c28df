//! Error types for pathdisplay.
//!
//! Formatting itself never fails on string input. Errors only come from the edges:
//! loading configuration, converting non UTF-8 paths and running external commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by the fallible parts of the crate
#[derive(Debug, Error)]
pub enum Error {
    /// Caller passed something the API cannot work with
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration file could not be parsed
    #[error("Failed to parse config {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Program is not on PATH
    #[error("Command not found: {0}")]
    CommandNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::InvalidArgument("cmd must not be empty".into());
        assert_eq!(err.to_string(), "Invalid argument: cmd must not be empty");

        let err = Error::CommandNotFound("definitely-missing".into());
        assert_eq!(err.to_string(), "Command not found: definitely-missing");
    }

    #[test]
    fn test_io_error_converts() {
        fn fails() -> Result<()> {
            Err(std::io::Error::other("boom"))?;
            Ok(())
        }
        let err = fails().unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("boom"));
    }
}
