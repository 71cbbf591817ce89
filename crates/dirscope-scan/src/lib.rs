//! Directory size aggregation engine for dirscope.
//!
//! # Overview
//!
//! `dirscope-scan` computes one level of a directory hierarchy at a time:
//! every immediate subdirectory of the requested path, with the recursive
//! size of all regular files below it.
//!
//! - **Symlinks are never followed** and never counted, at any depth
//! - **Nested errors are absorbed** as zero-size contributions
//! - **Only the requested directory** being unreadable fails a scan
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use dirscope_scan::DirScanner;
//!
//! let scanner = DirScanner::new();
//! let view = scanner.scan(Path::new("/path/to/scan")).unwrap();
//!
//! println!("Total size: {} bytes", view.total_size());
//! for entry in view.entries() {
//!     println!("{:>12} {}", entry.size(), entry.name());
//! }
//! ```

mod inode;
mod scanner;

pub use inode::InodeTracker;
pub use scanner::DirScanner;

// Re-export core types for convenience
pub use dirscope_core::{DirectoryEntry, DirectoryView, ScanConfig, ScanError, Scanner};
