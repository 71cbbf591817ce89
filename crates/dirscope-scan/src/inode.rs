//! Opt-in hardlink de-duplication for a single scan.

use dashmap::DashSet;
use dirscope_core::InodeInfo;

/// Seen `(inode, device)` keys for one scan.
///
/// Only consulted when `ScanConfig::count_hardlinks_once` is set, and then
/// only for files whose link count is above one; by default every link is
/// counted. The scanner creates a fresh tracker per call, so a rescan
/// counts a shared file again. The set is concurrent because nested
/// traversal may run on a rayon pool.
#[derive(Debug, Default)]
pub struct InodeTracker {
    seen: DashSet<InodeInfo>,
}

impl InodeTracker {
    /// Create a new inode tracker.
    pub fn new() -> Self {
        Self {
            seen: DashSet::new(),
        }
    }

    /// Record `info`. Returns `true` the first time it is seen in this
    /// scan, meaning the file's bytes should be counted.
    pub fn track(&self, info: InodeInfo) -> bool {
        self.seen.insert(info)
    }

    /// Get the number of unique inodes tracked.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Check if no inodes have been tracked.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_new_inode() {
        let tracker = InodeTracker::new();
        let info = InodeInfo::new(12345, 1);

        assert!(tracker.track(info));
        assert!(!tracker.track(info)); // Second time returns false
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_different_devices() {
        let tracker = InodeTracker::new();
        assert!(tracker.is_empty());

        assert!(tracker.track(InodeInfo::new(12345, 1)));
        assert!(tracker.track(InodeInfo::new(12345, 2))); // Different device, so it's new
    }
}
