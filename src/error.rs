//! Error types for ICC
//!
//! All modules use `IccResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ICC operations
pub type IccResult<T> = Result<T, IccError>;

/// All errors that can occur in ICC
#[derive(Error, Debug)]
pub enum IccError {
    // Path resolution errors
    #[error("Could not locate the per-user application data directory")]
    AppDataNotFound,

    // Backup errors
    #[error("Failed to create backup directory {}: {source}", path.display())]
    BackupDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot move {}: destination already exists: {}", from.display(), to.display())]
    DestinationExists { from: PathBuf, to: PathBuf },

    #[error("Failed to move {} to {}: {source}", from.display(), to.display())]
    Move {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Deletion errors
    #[error("Deletion sample contained no files, cannot estimate throughput")]
    EmptySample,

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Prompt / task plumbing
    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IccError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Check if error is retryable
    ///
    /// Retryable errors re-run the whole backup pass; artifacts already
    /// moved come back as not-found, so the retry cannot duplicate them.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Move { .. } | Self::DestinationExists { .. } | Self::BackupDirCreate { .. }
        )
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Move { .. } | Self::DestinationExists { .. } => {
                Some("Exit the client if it is currently running, then try again")
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = IccError::Move {
            from: PathBuf::from("/data/HttpCache"),
            to: PathBuf::from("/data/ICC Backups/1700000000_HttpCache"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "locked"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/data/HttpCache"));
        assert!(msg.contains("1700000000_HttpCache"));
    }

    #[test]
    fn error_hint() {
        let err = IccError::DestinationExists {
            from: PathBuf::from("a"),
            to: PathBuf::from("b"),
        };
        assert!(err.hint().unwrap().contains("Exit the client"));
        assert_eq!(IccError::EmptySample.hint(), None);
    }

    #[test]
    fn error_retryable() {
        let moved = IccError::Move {
            from: PathBuf::from("a"),
            to: PathBuf::from("b"),
            source: std::io::Error::other("busy"),
        };
        assert!(moved.is_retryable());
        assert!(!IccError::EmptySample.is_retryable());
        assert!(!IccError::io("reading dir", std::io::Error::other("x")).is_retryable());
    }
}
