//! Error types for scanning operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while scanning a directory.
///
/// Only the directory a caller asked for can fail a scan. Anything that
/// goes wrong below it is absorbed as a zero-size contribution.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The requested directory could not be opened for listing.
    #[error("Cannot read directory {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Memory for the entry list could not be reserved.
    #[error("Out of memory while scanning {}", path.display())]
    ResourceExhausted { path: PathBuf },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl ScanError {
    /// Create an unreadable-directory error with path context.
    pub fn unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Unreadable {
            path: path.into(),
            source,
        }
    }

    /// The underlying I/O error kind, if this error came from the filesystem.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Self::Unreadable { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreadable_keeps_kind() {
        let err = ScanError::unreadable(
            "/test/path",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, ScanError::Unreadable { .. }));
        assert_eq!(err.io_kind(), Some(std::io::ErrorKind::PermissionDenied));
    }

    #[test]
    fn test_error_messages() {
        let err = ScanError::unreadable(
            "/missing",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().contains("/missing"));

        let err = ScanError::ResourceExhausted {
            path: PathBuf::from("/big"),
        };
        assert_eq!(err.io_kind(), None);
        assert!(err.to_string().contains("Out of memory"));
    }
}
