//! Core types and traits for dirscope.
//!
//! This crate provides the data structures shared by the scan engine and
//! the terminal interface: directory entries and views, scan
//! configuration, errors, and the [`Scanner`] seam the navigation layer
//! is written against.

mod config;
mod entry;
mod error;
mod scanner;
mod size;
mod view;

pub use config::{ScanConfig, ScanConfigBuilder, DEFAULT_MAX_PATH_LEN};
pub use entry::{DirectoryEntry, InodeInfo};
pub use error::ScanError;
pub use scanner::Scanner;
pub use size::{format_size, SIZE_UNITS};
pub use view::DirectoryView;
