//! Deletion throughput sampling and time estimation

use crate::error::{IccError, IccResult};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Number of files deleted in the timed sample pass
pub const DEFAULT_SAMPLE_SIZE: usize = 3000;

/// Floor for the measured sample duration. Keeps throughput finite when
/// the sample finishes faster than the clock resolution.
const MIN_SAMPLE_DURATION: Duration = Duration::from_millis(1);

/// A timed deletion sample and the throughput derived from it
///
/// Computed fresh for every purge run; nothing is persisted. The
/// extrapolation assumes per-file deletion cost is uniform across the
/// tree, which can be off on filesystems where metadata operations
/// dominate (network drives).
#[derive(Debug)]
pub struct DeletionPlan {
    /// Total files enumerated before sampling started
    pub total_files: usize,
    /// Files the sample pass attempted to delete
    pub sampled: usize,
    /// Files in the sample that could not be deleted
    pub sample_failed: usize,
    /// Wall-clock duration of the sample pass, clamped to a minimum
    pub measured: Duration,
    /// Observed deletion throughput in files per second
    pub files_per_sec: f64,
}

impl DeletionPlan {
    /// Delete up to `sample_size` files from the front of `files`, timing
    /// the pass, and derive throughput from it.
    ///
    /// Per-file failures are tolerated and counted. A degenerate elapsed
    /// time is clamped rather than propagated; the only failure is a
    /// sample with no files in it at all.
    pub fn sample(
        files: &[PathBuf],
        sample_size: usize,
        mut on_progress: impl FnMut(usize, usize),
    ) -> IccResult<Self> {
        let sample = &files[..sample_size.min(files.len())];
        if sample.is_empty() {
            return Err(IccError::EmptySample);
        }

        let start = Instant::now();
        let mut failed = 0;
        for (done, file) in sample.iter().enumerate() {
            if std::fs::remove_file(file).is_err() {
                failed += 1;
            }
            on_progress(done + 1, sample.len());
        }
        let measured = start.elapsed().max(MIN_SAMPLE_DURATION);

        Ok(Self {
            total_files: files.len(),
            sampled: sample.len(),
            sample_failed: failed,
            measured,
            files_per_sec: sample.len() as f64 / measured.as_secs_f64(),
        })
    }

    /// Files left for the remainder pass
    pub fn remaining(&self) -> usize {
        self.total_files - self.sampled
    }

    /// Expected duration for the remaining files, rounded up to whole minutes
    pub fn estimated_minutes(&self) -> u64 {
        let seconds = self.remaining() as f64 / self.files_per_sec;
        (seconds / 60.0).ceil() as u64
    }
}
