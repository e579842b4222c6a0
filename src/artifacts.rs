//! Fixed cache artifact table and path resolution
//!
//! The client stores its caches under a per-user application data
//! directory. The artifact names below are fixed; which of them exist at
//! any moment depends on what the client has written since the last clean.

use crate::error::{IccError, IccResult};
use std::path::{Path, PathBuf};

/// Expected kind of an artifact on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// A single cache file
    File,
    /// A cache directory tree
    Directory,
}

/// A named cache file or directory tracked for backup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheArtifact {
    /// File or directory name directly under the client data directory
    pub name: &'static str,
    /// Kind the client normally creates this artifact as
    pub kind: ArtifactKind,
}

/// Cache artifacts in removal order.
///
/// The order is significant: the client locks some of these files before
/// others on startup, and removing them in this order avoids failing
/// halfway through a partially locked set.
pub const CLIENT_CACHE_ARTIFACTS: &[CacheArtifact] = &[
    CacheArtifact {
        name: "HttpCache",
        kind: ArtifactKind::Directory,
    },
    CacheArtifact {
        name: "PixmapCache",
        kind: ArtifactKind::Directory,
    },
    CacheArtifact {
        name: "productInfoCache.db",
        kind: ArtifactKind::File,
    },
    CacheArtifact {
        name: "_buddyState.pickle",
        kind: ArtifactKind::File,
    },
    CacheArtifact {
        name: "productAuth.pickle",
        kind: ArtifactKind::File,
    },
    CacheArtifact {
        name: "localstorage.pickle",
        kind: ArtifactKind::File,
    },
];

/// Directory under the client data directory that holds relocated caches
pub const BACKUP_DIR_NAME: &str = "ICC Backups";

/// The client's per-user data directory
///
/// On Windows this is the roaming application data folder the client
/// writes to; on other platforms the equivalent per-user config root.
pub fn client_data_dir() -> IccResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("IMVU"))
        .ok_or(IccError::AppDataNotFound)
}

/// The backup root for a given client data directory
pub fn backup_root(source_root: &Path) -> PathBuf {
    source_root.join(BACKUP_DIR_NAME)
}

/// Backup file name for an artifact moved at `timestamp` (unix seconds)
pub fn backup_file_name(timestamp: i64, name: &str) -> String {
    format!("{}_{}", timestamp, name)
}
