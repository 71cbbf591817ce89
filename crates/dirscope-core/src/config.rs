//! Scan configuration types.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::ScanError;

/// Longest composed path the scanner will stat (Linux `PATH_MAX`).
pub const DEFAULT_MAX_PATH_LEN: usize = 4096;

/// Configuration for scanning operations.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ScanConfig {
    /// Directory levels descended below each listed subdirectory
    /// (None = unlimited).
    #[builder(default)]
    #[serde(default)]
    pub max_depth: Option<u32>,

    /// Entries whose full path is longer than this many bytes are skipped.
    #[builder(default = "DEFAULT_MAX_PATH_LEN")]
    #[serde(default = "default_max_path_len")]
    pub max_path_len: usize,

    /// Count a multiply-linked file only the first time its inode is seen.
    #[builder(default = "false")]
    #[serde(default)]
    pub count_hardlinks_once: bool,

    /// Threads for nested traversal (1 = serial, 0 = shared pool).
    #[builder(default = "1")]
    #[serde(default = "default_threads")]
    pub threads: usize,
}

fn default_max_path_len() -> usize {
    DEFAULT_MAX_PATH_LEN
}

fn default_threads() -> usize {
    1
}

impl ScanConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.max_path_len == Some(0) {
            return Err("Path length limit must be positive".to_string());
        }
        Ok(())
    }
}

impl ScanConfig {
    /// Create a new scan config builder.
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::default()
    }

    /// Create the default configuration: serial, unlimited depth,
    /// every regular file counted.
    pub fn new() -> Self {
        Self {
            max_depth: None,
            max_path_len: DEFAULT_MAX_PATH_LEN,
            count_hardlinks_once: false,
            threads: 1,
        }
    }

    /// Reject settings that bypassed the builder, e.g. via deserialization.
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.max_path_len == 0 {
            return Err(ScanError::InvalidConfig {
                message: "Path length limit must be positive".to_string(),
            });
        }
        Ok(())
    }

    /// Check if a composed path is too long to be scanned.
    pub fn exceeds_path_limit(&self, path_len: usize) -> bool {
        path_len > self.max_path_len
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = ScanConfig::builder()
            .max_depth(Some(3u32))
            .threads(4usize)
            .count_hardlinks_once(true)
            .build()
            .unwrap();

        assert_eq!(config.max_depth, Some(3));
        assert_eq!(config.threads, 4);
        assert!(config.count_hardlinks_once);
        assert_eq!(config.max_path_len, DEFAULT_MAX_PATH_LEN);
    }

    #[test]
    fn test_config_builder_rejects_zero_path_len() {
        let result = ScanConfig::builder().max_path_len(0usize).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_config_default() {
        let config = ScanConfig::default();
        assert_eq!(config, ScanConfig::builder().build().unwrap());
        assert!(config.max_depth.is_none());
        assert_eq!(config.threads, 1);
        assert!(!config.count_hardlinks_once);
    }

    #[test]
    fn test_exceeds_path_limit() {
        let config = ScanConfig::builder().max_path_len(10usize).build().unwrap();
        assert!(!config.exceeds_path_limit(10));
        assert!(config.exceeds_path_limit(11));
    }
}
