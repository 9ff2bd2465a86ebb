//! Application error types
//!
//! Centralized error handling for the CLI with one variant per failure class:
//! configuration discovery, remote Polly calls, local file I/O, and voice
//! selection. None of these are recovered or retried; every variant is fatal
//! to the run.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for application operations
pub type AppResult<T> = Result<T, AppError>;

/// Error type covering every failure the CLI can hit
#[derive(Error, Debug)]
pub enum AppError {
    /// AWS credentials/region could not be resolved, or settings are invalid
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A Polly call failed (voice page, synthesis, or a mid-stream read)
    #[error("Polly request failed: {0}")]
    RemoteRequest(String),

    /// Local file creation or write failed
    #[error("I/O error on '{}': {error}", .path.display())]
    LocalIo { path: PathBuf, error: String },

    /// No voice in the fetched catalog matches the requested identifier
    #[error("No voice found with id '{0}'")]
    VoiceSelection(String),
}

impl AppError {
    /// Create a configuration error
    pub fn configuration(error: impl Into<String>) -> Self {
        Self::Configuration(error.into())
    }

    /// Create a remote request error
    pub fn remote_request(error: impl fmt::Display) -> Self {
        Self::RemoteRequest(error.to_string())
    }

    /// Create a local I/O error for the given path
    pub fn local_io(path: impl AsRef<Path>, error: impl fmt::Display) -> Self {
        Self::LocalIo {
            path: path.as_ref().to_path_buf(),
            error: error.to_string(),
        }
    }

    /// Create a voice selection error
    pub fn voice_selection(voice_id: impl Into<String>) -> Self {
        Self::VoiceSelection(voice_id.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::configuration("no credentials");
        assert_eq!(err.to_string(), "Configuration error: no credentials");

        let err = AppError::remote_request("timeout");
        assert_eq!(err.to_string(), "Polly request failed: timeout");

        let err = AppError::local_io("/tmp/out.mp3", "permission denied");
        assert_eq!(
            err.to_string(),
            "I/O error on '/tmp/out.mp3': permission denied"
        );

        let err = AppError::voice_selection("Matthew");
        assert_eq!(err.to_string(), "No voice found with id 'Matthew'");
    }

    #[test]
    fn test_error_display_is_single_line() {
        let errors = vec![
            AppError::configuration("AWS credentials are not resolvable"),
            AppError::remote_request("DescribeVoices failed for 'en-US': timeout"),
            AppError::local_io("speech.mp3", "disk full"),
            AppError::voice_selection("Matthew"),
        ];
        for err in errors {
            assert!(!err.to_string().contains('\n'));
        }
    }
}
