//! Directory view snapshot.

use std::cmp::Ordering;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::entry::DirectoryEntry;

/// Snapshot of one directory's scan result.
///
/// Entries are ordered largest first, ties broken by ascending name in
/// byte order. The ordering is established at construction and never
/// changes afterwards; selection indices refer to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryView {
    path: PathBuf,
    entries: Vec<DirectoryEntry>,
    total_size: u64,
    #[serde(default)]
    skipped: u64,
}

impl DirectoryView {
    /// Create a view, sorting `entries` into display order.
    pub fn new(path: impl Into<PathBuf>, mut entries: Vec<DirectoryEntry>, total_size: u64) -> Self {
        entries.sort_by(compare_entries);
        Self {
            path: path.into(),
            entries,
            total_size,
            skipped: 0,
        }
    }

    /// Record how many nested entries were absorbed as zero-size.
    pub fn with_skipped(mut self, skipped: u64) -> Self {
        self.skipped = skipped;
        self
    }

    /// Path that was scanned.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Subdirectories, largest first.
    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    /// Total bytes of all regular files below this directory, including
    /// the files directly inside it.
    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    /// Number of nested entries that were unreadable or skipped.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    /// Number of subdirectory entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the directory has no listed subdirectories.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the entry at `index`.
    pub fn get(&self, index: usize) -> Option<&DirectoryEntry> {
        self.entries.get(index)
    }

    /// Size of the largest entry, 0 when empty.
    pub fn max_entry_size(&self) -> u64 {
        self.entries.first().map(DirectoryEntry::size).unwrap_or(0)
    }

    /// Bytes held by regular files directly inside this directory.
    pub fn direct_files_size(&self) -> u64 {
        let in_entries: u64 = self.entries.iter().map(DirectoryEntry::size).sum();
        self.total_size.saturating_sub(in_entries)
    }

    /// Size of entry `index` relative to the largest entry (0.0 - 1.0).
    pub fn ratio(&self, index: usize) -> f64 {
        let max = self.max_entry_size().max(1);
        self.get(index)
            .map(|entry| entry.size() as f64 / max as f64)
            .unwrap_or(0.0)
    }
}

/// Descending size, then ascending raw name bytes.
fn compare_entries(a: &DirectoryEntry, b: &DirectoryEntry) -> Ordering {
    b.size()
        .cmp(&a.size())
        .then_with(|| raw_name(a).cmp(raw_name(b)))
}

/// Name as stored on disk; the display name may be a lossy conversion.
fn raw_name(entry: &DirectoryEntry) -> &[u8] {
    entry
        .full_path()
        .file_name()
        .map(OsStr::as_encoded_bytes)
        .unwrap_or_else(|| entry.name().as_bytes())
}
