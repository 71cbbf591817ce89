//! Navigation error types.

use std::path::PathBuf;

use thiserror::Error;

use dirscope_core::ScanError;

/// A navigation step that could not be completed.
///
/// None of these end the session; the controller keeps a valid view and
/// the interface reports the message until the next successful step.
#[derive(Debug, Error)]
pub enum NavigationError {
    /// The selected entry could not be resolved to a canonical path.
    #[error("Cannot resolve {}: {source}", path.display())]
    PathResolution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A scan requested while navigating failed.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// Entering a directory failed and reloading the previous one failed too.
    #[error("Cannot reload {}: {source}", path.display())]
    Recovery {
        path: PathBuf,
        #[source]
        source: ScanError,
    },
}

/// Failure that ends the interactive session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The starting directory could not be scanned.
    #[error("could not scan directory: {0}")]
    Startup(#[source] ScanError),

    /// The terminal could not be driven.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_message() {
        let err = SessionError::Startup(ScanError::unreadable(
            "/nope",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        ));
        assert!(err.to_string().starts_with("could not scan directory: "));
        assert!(err.to_string().contains("/nope"));
    }

    #[test]
    fn test_scan_error_is_transparent() {
        let scan = ScanError::unreadable(
            "/gone",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        let expected = scan.to_string();
        let err = NavigationError::from(scan);
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_recovery_message_names_previous_path() {
        let err = NavigationError::Recovery {
            path: PathBuf::from("/was/here"),
            source: ScanError::ResourceExhausted {
                path: PathBuf::from("/was/here"),
            },
        };
        assert!(err.to_string().starts_with("Cannot reload /was/here"));
    }
}
