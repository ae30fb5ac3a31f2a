//! Error types for MCEDS

use thiserror::Error;

/// Result type alias for MCEDS operations
pub type Result<T> = std::result::Result<T, MceError>;

/// Main error type for MCEDS
#[derive(Error, Debug)]
pub enum MceError {
    /// The refinement stage saw an enzyme class that seed discovery never produced
    #[error("No seed combinations recorded for enzyme class {class}")]
    MissingSeedData { class: String },

    #[error("Invalid scope mode: {0}")]
    InvalidScope(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl MceError {
    /// Create a parse error for a 1-based input line
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create a network error
    pub fn network(msg: impl std::fmt::Display) -> Self {
        Self::Network(msg.to_string())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_seed_data_message() {
        let err = MceError::MissingSeedData {
            class: "2.7.11.1".to_string(),
        };
        assert_eq!(err.to_string(), "No seed combinations recorded for enzyme class 2.7.11.1");
    }

    #[test]
    fn test_io_error_converts() {
        let err: MceError = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.tsv").into();
        assert!(matches!(err, MceError::Io(_)));
        assert_eq!(err.to_string(), "IO error: missing.tsv");
    }

    #[test]
    fn test_parse_error_message() {
        let err = MceError::parse(12, "Expected at least 3 fields, got 2");
        assert_eq!(err.to_string(), "Parse error at line 12: Expected at least 3 fields, got 2");
    }
}
