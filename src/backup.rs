//! Backup engine - relocates cache artifacts into a timestamped backup folder
//!
//! A backup pass renames each artifact in table order into the backup
//! root under a `{unix-seconds}_{name}` file name. Absent artifacts are a
//! normal outcome, not an error, which is what makes a retried pass safe:
//! whatever an earlier pass already moved simply reports as not found.

use crate::artifacts::{backup_file_name, ArtifactKind, CacheArtifact};
use crate::error::{IccError, IccResult};
use chrono::Utc;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

/// Outcome of a single artifact in a backup pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupOutcome {
    /// The artifact was renamed into the backup root
    Moved(ArtifactKind),
    /// The artifact was absent. Normal if the cache was recently cleaned.
    NotFound,
}

/// Result of one artifact in one backup pass
///
/// Not persisted anywhere; the filesystem move itself is the only record
/// that survives the run.
#[derive(Debug, Clone)]
pub struct BackupRecord {
    /// Artifact name from the fixed table
    pub name: &'static str,
    /// Resolved source path under the client data directory
    pub original_path: PathBuf,
    /// Destination path, when the artifact was moved
    pub backup_path: Option<PathBuf>,
    /// Unix-seconds prefix stamped on this pass
    pub timestamp: i64,
    /// What happened to this artifact
    pub outcome: BackupOutcome,
}

impl BackupRecord {
    /// Whether this record represents a completed move
    pub fn was_moved(&self) -> bool {
        matches!(self.outcome, BackupOutcome::Moved(_))
    }
}

/// Moves the fixed artifact set from a source root into a backup root
///
/// The artifact table is injected so tests can run against synthetic
/// sets; production callers pass [`crate::artifacts::CLIENT_CACHE_ARTIFACTS`].
#[derive(Debug)]
pub struct BackupEngine<'a> {
    source_root: PathBuf,
    backup_root: PathBuf,
    artifacts: &'a [CacheArtifact],
}

impl<'a> BackupEngine<'a> {
    /// Create an engine for one source/backup root pair
    pub fn new(
        source_root: impl Into<PathBuf>,
        backup_root: impl Into<PathBuf>,
        artifacts: &'a [CacheArtifact],
    ) -> Self {
        Self {
            source_root: source_root.into(),
            backup_root: backup_root.into(),
            artifacts,
        }
    }

    /// Run one backup pass stamped with the current unix time
    pub async fn run(&self) -> IccResult<Vec<BackupRecord>> {
        self.run_at(Utc::now().timestamp()).await
    }

    /// Run one backup pass with an explicit timestamp prefix
    ///
    /// Creates the backup root if it does not exist (idempotent), then
    /// moves artifacts in table order. The first unexpected failure aborts
    /// the remaining artifacts; the caller decides whether to retry the
    /// whole pass.
    pub async fn run_at(&self, timestamp: i64) -> IccResult<Vec<BackupRecord>> {
        fs::create_dir_all(&self.backup_root)
            .await
            .map_err(|e| IccError::BackupDirCreate {
                path: self.backup_root.clone(),
                source: e,
            })?;

        let mut records = Vec::with_capacity(self.artifacts.len());
        for artifact in self.artifacts {
            records.push(self.move_artifact(artifact, timestamp).await?);
        }
        Ok(records)
    }

    async fn move_artifact(
        &self,
        artifact: &CacheArtifact,
        timestamp: i64,
    ) -> IccResult<BackupRecord> {
        let from = self.source_root.join(artifact.name);

        // Kind is re-detected at move time; the table's kind is only what
        // the client normally creates.
        let found = match fs::symlink_metadata(&from).await {
            Ok(meta) if meta.is_dir() => ArtifactKind::Directory,
            Ok(_) => ArtifactKind::File,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("artifact not present: {}", from.display());
                return Ok(BackupRecord {
                    name: artifact.name,
                    original_path: from,
                    backup_path: None,
                    timestamp,
                    outcome: BackupOutcome::NotFound,
                });
            }
            Err(e) => {
                return Err(IccError::io(
                    format!("checking artifact {}", from.display()),
                    e,
                ))
            }
        };
        if found != artifact.kind {
            debug!(
                "artifact {} found as {:?}, table expects {:?}",
                artifact.name, found, artifact.kind
            );
        }

        let to = self
            .backup_root
            .join(backup_file_name(timestamp, artifact.name));

        // rename() over an existing directory fails with an unhelpful
        // message on some platforms; report the collision explicitly.
        if fs::symlink_metadata(&to).await.is_ok() {
            return Err(IccError::DestinationExists { from, to });
        }

        fs::rename(&from, &to)
            .await
            .map_err(|e| IccError::Move {
                from: from.clone(),
                to: to.clone(),
                source: e,
            })?;

        debug!("moved {} => {}", from.display(), to.display());
        Ok(BackupRecord {
            name: artifact.name,
            original_path: from,
            backup_path: Some(to),
            timestamp,
            outcome: BackupOutcome::Moved(found),
        })
    }
}
