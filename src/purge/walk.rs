//! File enumeration for the deletion passes

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Collect every file beneath `root`, depth-first.
///
/// Uses an explicit stack rather than recursion so arbitrarily deep
/// trees cannot exhaust the call stack. Symlinks are treated as files
/// and not followed. Unreadable directories are skipped; every reachable
/// file appears exactly once. Order is unspecified.
pub fn collect_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(dir) = stack.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("skipping unreadable directory {}: {}", dir.display(), e);
                continue;
            }
        };

        for entry in entries.flatten() {
            match entry.file_type() {
                Ok(kind) if kind.is_dir() => stack.push(entry.path()),
                Ok(_) => files.push(entry.path()),
                Err(e) => debug!("skipping unreadable entry {}: {}", entry.path().display(), e),
            }
        }
    }

    files
}
