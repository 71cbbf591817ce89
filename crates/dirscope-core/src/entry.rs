//! Directory entry types.

use std::path::{Path, PathBuf};

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Inode information for hardlink detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InodeInfo {
    /// Inode number.
    pub inode: u64,
    /// Device ID.
    pub device: u64,
}

impl InodeInfo {
    /// Create new inode info.
    pub fn new(inode: u64, device: u64) -> Self {
        Self { inode, device }
    }
}

/// One immediate subdirectory of a scanned directory.
///
/// The size is fixed when the scan produces the entry; a rescan builds
/// new entries rather than updating old ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    name: CompactString,
    full_path: PathBuf,
    size: u64,
}

impl DirectoryEntry {
    /// Create a new entry.
    pub fn new(name: impl Into<CompactString>, full_path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            name: name.into(),
            full_path: full_path.into(),
            size,
        }
    }

    /// Base name of the subdirectory.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute path of the subdirectory.
    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    /// Recursive size in bytes of all regular files below this directory.
    pub fn size(&self) -> u64 {
        self.size
    }
}
