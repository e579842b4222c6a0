//! Recursive directory sizing and byte formatting

use jwalk::WalkDir;
use std::path::Path;

/// Total byte size of all files under `root`, recursively.
///
/// Returns 0 when the root does not exist; an empty or missing backup
/// root is a valid state, not an error. The walk fans out across
/// subdirectories on a thread pool and the per-entry sizes are folded
/// here, so the result does not depend on visit order. Traversal is
/// iterative; tree depth is bounded only by the filesystem.
pub fn dir_size(root: &Path) -> u64 {
    if !root.exists() {
        return 0;
    }

    WalkDir::new(root)
        .skip_hidden(false)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.metadata().ok())
        .map(|meta| meta.len())
        .sum()
}

/// Format a byte count with 1024-based units, trimming trailing zeros
/// ("1 KB", "1.5 KB", "1.25 MB")
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        return format!("{} {}", bytes, UNITS[0]);
    }

    let mut rendered = format!("{:.2}", value);
    while rendered.ends_with('0') {
        rendered.pop();
    }
    if rendered.ends_with('.') {
        rendered.pop();
    }
    format!("{} {}", rendered, UNITS[unit])
}
