//! Error types for restbell.

use thiserror::Error;

/// Errors that can occur anywhere in restbell.
#[derive(Debug, Error)]
pub enum RestbellError {
    /// Configuration or invalid-input error.
    #[error("{0}")]
    Config(String),

    /// A requested item was not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Filesystem I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = RestbellError::Config("bad time format".to_string());
        assert_eq!(err.to_string(), "bad time format");
    }

    #[test]
    fn test_not_found_error_display() {
        let err = RestbellError::NotFound("Reminder 'abc'".to_string());
        assert_eq!(err.to_string(), "Reminder 'abc' not found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: RestbellError = io.into();
        assert!(matches!(err, RestbellError::Io(_)));
    }
}
