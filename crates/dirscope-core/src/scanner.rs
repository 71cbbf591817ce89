//! The scanning seam used by the navigation layer.

use std::path::{Path, PathBuf};

use crate::error::ScanError;
use crate::view::DirectoryView;

/// Something that can produce a [`DirectoryView`] for a path.
///
/// `scan` is a blocking, read-only operation. `resolve` turns a path into
/// the canonical absolute form navigation stores as its current location.
pub trait Scanner {
    /// Scan one directory level, computing recursive subdirectory sizes.
    fn scan(&self, path: &Path) -> Result<DirectoryView, ScanError>;

    /// Resolve `path` to a canonical absolute path.
    fn resolve(&self, path: &Path) -> std::io::Result<PathBuf> {
        path.canonicalize()
    }
}

impl<S: Scanner + ?Sized> Scanner for &S {
    fn scan(&self, path: &Path) -> Result<DirectoryView, ScanError> {
        (**self).scan(path)
    }

    fn resolve(&self, path: &Path) -> std::io::Result<PathBuf> {
        (**self).resolve(path)
    }
}
