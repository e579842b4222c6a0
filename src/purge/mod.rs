//! Bulk deletion of accumulated backups
//!
//! Deleting a backup tree can mean hundreds of thousands of small files,
//! so the work is split into two passes: a timed sample whose measured
//! throughput predicts the total duration, then the remainder. Per-file
//! failures are counted and skipped, never fatal. Once the files are
//! gone the now-empty subdirectories are pruned; a directory held open
//! by an external process is warned about and left behind.

mod delete;
mod plan;
mod walk;

pub use delete::{delete_files, remove_subdirectories, DeleteSummary, DirWarning};
pub use plan::{DeletionPlan, DEFAULT_SAMPLE_SIZE};
pub use walk::collect_files;
