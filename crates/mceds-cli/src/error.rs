//! Error types for the MCEDS CLI
//!
//! User-facing errors with messages that say what to check next.

use mceds_common::MceError;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    /// Input membership file is missing
    #[error("File not found: '{0}'. Verify the file path exists and you have read permissions.")]
    FileNotFound(String),

    /// Delimiter argument is not a single ASCII character
    #[error("Invalid delimiter '{0}'. Use a single ASCII character, or 'tab'.")]
    InvalidDelimiter(String),

    /// Input could not be parsed
    #[error("Invalid input at line {line}: {message}. Expected 'EC<delimiter>PDB<delimiter>DOMAIN' rows.")]
    InvalidInput { line: usize, message: String },

    /// Remote cross-reference could not be fetched
    #[error("Download failed: {0}. Check your internet connection or MCEDS_SIFTS_URL.")]
    Download(String),

    /// Pipeline or ingestion failure
    #[error(transparent)]
    Core(MceError),

    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions and disk space.")]
    Io(#[from] std::io::Error),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check your environment variables.")]
    Config(String),

    /// JSON serialization failed
    #[error("Failed to write JSON report: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn invalid_delimiter(value: impl Into<String>) -> Self {
        Self::InvalidDelimiter(value.into())
    }
}

impl From<MceError> for CliError {
    fn from(err: MceError) -> Self {
        match err {
            MceError::Parse { line, message } => Self::InvalidInput { line, message },
            MceError::Network(msg) => Self::Download(msg),
            MceError::Config(msg) => Self::Config(msg),
            MceError::Io(io) => Self::Io(io),
            other => Self::Core(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_mentions_expected_format() {
        let err = CliError::from(MceError::parse(3, "expected 3 fields, found 2"));
        let msg = err.to_string();
        assert!(msg.contains("line 3"));
        assert!(msg.contains("EC<delimiter>PDB<delimiter>DOMAIN"));
    }

    #[test]
    fn test_missing_seed_data_passes_through() {
        let err = CliError::from(MceError::MissingSeedData {
            class: "1.1.1.1".to_string(),
        });
        assert!(matches!(err, CliError::Core(_)));
        assert_eq!(
            err.to_string(),
            "No seed combinations recorded for enzyme class 1.1.1.1"
        );
    }

    #[test]
    fn test_network_error_suggests_url_check() {
        let err = CliError::from(MceError::network("connection refused"));
        assert!(err.to_string().contains("MCEDS_SIFTS_URL"));
    }
}
