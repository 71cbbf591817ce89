//! Recursive directory size scanner.

use std::fs::{self, Metadata};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

#[cfg(unix)]
use std::os::unix::fs::MetadataExt;

use compact_str::CompactString;
use jwalk::{Parallelism, WalkDir};
use tracing::{debug, info};

use dirscope_core::{DirectoryEntry, DirectoryView, InodeInfo, ScanConfig, ScanError, Scanner};

use crate::inode::InodeTracker;

/// Scanner producing one [`DirectoryView`] per call.
///
/// The directory itself is listed with `std::fs::read_dir`; each
/// subdirectory's recursive size comes from a jwalk traversal. Symbolic
/// links are never followed or counted, at any depth, which is what keeps
/// the walk free of cycles.
#[derive(Debug, Clone, Default)]
pub struct DirScanner {
    config: ScanConfig,
}

/// Bytes counted and entries absorbed while sizing a subtree.
#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    bytes: u64,
    skipped: u64,
}

impl DirScanner {
    /// Create a scanner with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ScanConfig::default())
    }

    /// Create a scanner with a custom configuration.
    pub fn with_config(config: ScanConfig) -> Self {
        Self { config }
    }

    /// The configuration this scanner uses.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan `path`, sizing each immediate subdirectory recursively.
    ///
    /// Fails only when `path` itself cannot be listed. Unreadable or
    /// over-long entries anywhere below it contribute zero bytes.
    pub fn scan(&self, path: &Path) -> Result<DirectoryView, ScanError> {
        self.config.validate()?;

        let start = Instant::now();
        let root = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

        let listing = fs::read_dir(&root).map_err(|e| ScanError::unreadable(&root, e))?;

        let inodes = InodeTracker::new();
        let mut entries: Vec<DirectoryEntry> = Vec::new();
        let mut total: u64 = 0;
        let mut skipped: u64 = 0;

        for item in listing {
            let item = match item {
                Ok(item) => item,
                Err(err) => {
                    debug!(path = %root.display(), error = %err, "skipping unreadable entry");
                    skipped += 1;
                    continue;
                }
            };

            let full_path = item.path();
            if self.config.exceeds_path_limit(full_path.as_os_str().len()) {
                debug!(path = %full_path.display(), "skipping entry with over-long path");
                skipped += 1;
                continue;
            }

            // lstat: symlinks are reported as symlinks, never as their target
            let metadata = match fs::symlink_metadata(&full_path) {
                Ok(m) => m,
                Err(err) => {
                    debug!(path = %full_path.display(), error = %err, "skipping entry without metadata");
                    skipped += 1;
                    continue;
                }
            };

            let file_type = metadata.file_type();
            if file_type.is_symlink() {
                continue;
            }

            if file_type.is_file() {
                total += self.file_size(&metadata, &inodes);
            } else if file_type.is_dir() {
                let tally = self.subtree_size(&full_path, &inodes);
                total += tally.bytes;
                skipped += tally.skipped;

                entries
                    .try_reserve(1)
                    .map_err(|_| ScanError::ResourceExhausted { path: root.clone() })?;
                let name = CompactString::new(item.file_name().to_string_lossy());
                entries.push(DirectoryEntry::new(name, full_path, tally.bytes));
            }
            // Devices, sockets and FIFOs hold no countable bytes
        }

        let view = DirectoryView::new(root, entries, total).with_skipped(skipped);

        info!(
            path = %view.path().display(),
            entries = view.len(),
            total_size = view.total_size(),
            skipped = view.skipped(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "scan complete"
        );

        Ok(view)
    }

    /// Recursively sum regular-file bytes below `dir`.
    fn subtree_size(&self, dir: &Path, inodes: &InodeTracker) -> Tally {
        let max_path_len = self.config.max_path_len;
        let over_long = Arc::new(AtomicU64::new(0));
        let over_long_counter = Arc::clone(&over_long);

        let walker = WalkDir::new(dir)
            .parallelism(self.parallelism())
            .skip_hidden(false)
            .follow_links(false)
            .min_depth(1)
            .max_depth(self.walk_depth())
            .process_read_dir(move |_depth, _path, _state, children| {
                // Dropping a child here also keeps the walker out of it
                children.retain(|child| match child {
                    Ok(entry) if entry.path().as_os_str().len() > max_path_len => {
                        over_long_counter.fetch_add(1, Ordering::Relaxed);
                        false
                    }
                    _ => true,
                });
            });

        let mut tally = Tally::default();

        for entry_result in walker {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    let path = err.path().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf());
                    debug!(path = %path.display(), error = %err, "absorbing unreadable subtree");
                    tally.skipped += 1;
                    continue;
                }
            };

            // Directory edges are walked, symlinks and special files carry no bytes
            if !entry.file_type().is_file() {
                continue;
            }

            // Links are not followed, so this is the lstat of the entry
            match entry.metadata() {
                Ok(metadata) => tally.bytes += self.file_size(&metadata, inodes),
                Err(err) => {
                    debug!(path = %entry.path().display(), error = %err, "skipping entry without metadata");
                    tally.skipped += 1;
                }
            }
        }

        tally.skipped += over_long.load(Ordering::Relaxed);
        tally
    }

    /// Bytes a regular file contributes to the totals.
    fn file_size(&self, metadata: &Metadata, inodes: &InodeTracker) -> u64 {
        if self.config.count_hardlinks_once && get_nlink(metadata) > 1 {
            let info = InodeInfo::new(get_ino(metadata), get_dev(metadata));
            if !inodes.track(info) {
                return 0; // Already counted this inode
            }
        }
        metadata.len()
    }

    fn parallelism(&self) -> Parallelism {
        match self.config.threads {
            0 => Parallelism::RayonDefaultPool {
                busy_timeout: Duration::from_millis(100),
            },
            1 => Parallelism::Serial,
            n => Parallelism::RayonNewPool(n),
        }
    }

    /// jwalk depth counts from the subdirectory itself, so files directly
    /// inside it are at depth 1.
    fn walk_depth(&self) -> usize {
        self.config
            .max_depth
            .map(|d| (d as usize).saturating_add(1))
            .unwrap_or(usize::MAX)
    }
}

impl Scanner for DirScanner {
    fn scan(&self, path: &Path) -> Result<DirectoryView, ScanError> {
        DirScanner::scan(self, path)
    }

    fn resolve(&self, path: &Path) -> std::io::Result<PathBuf> {
        path.canonicalize()
    }
}

// Cross-platform metadata helpers

/// Get the device ID from metadata.
#[cfg(unix)]
fn get_dev(metadata: &Metadata) -> u64 {
    metadata.dev()
}

#[cfg(not(unix))]
fn get_dev(_metadata: &Metadata) -> u64 {
    0
}

/// Get the inode number from metadata.
#[cfg(unix)]
fn get_ino(metadata: &Metadata) -> u64 {
    metadata.ino()
}

#[cfg(not(unix))]
fn get_ino(_metadata: &Metadata) -> u64 {
    0
}

/// Get the number of hard links from metadata.
#[cfg(unix)]
fn get_nlink(metadata: &Metadata) -> u64 {
    metadata.nlink()
}

#[cfg(not(unix))]
fn get_nlink(_metadata: &Metadata) -> u64 {
    1 // Without inode numbers every file counts on its own
}
