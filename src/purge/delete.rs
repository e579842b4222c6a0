//! Best-effort deletion passes and empty-directory pruning

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Counts from a best-effort deletion pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DeleteSummary {
    /// Files removed
    pub deleted: usize,
    /// Files that could not be removed and were skipped
    pub failed: usize,
}

/// Delete each file individually, best-effort.
///
/// A file that cannot be deleted is counted and skipped; it surfaces
/// later as a directory that fails to prune, not as a batch abort.
pub fn delete_files(
    files: &[PathBuf],
    mut on_progress: impl FnMut(usize, usize),
) -> DeleteSummary {
    let mut summary = DeleteSummary::default();

    for (done, file) in files.iter().enumerate() {
        match fs::remove_file(file) {
            Ok(()) => summary.deleted += 1,
            Err(e) => {
                debug!("could not delete {}: {}", file.display(), e);
                summary.failed += 1;
            }
        }
        on_progress(done + 1, files.len());
    }

    summary
}

/// A directory that survived pruning
#[derive(Debug, Clone)]
pub struct DirWarning {
    /// The directory that could not be removed
    pub path: PathBuf,
    /// The underlying error text
    pub reason: String,
}

/// Remove the now-empty subdirectories of `root`, leaving `root` itself.
///
/// Each subdirectory is cleared bottom-up: read-only attributes are
/// dropped, leftover files are deleted best-effort, then the directory
/// itself is removed. A directory that still cannot be removed (an
/// external process such as a search indexer or antivirus scanner may
/// hold a handle on it) is recorded and skipped; siblings are still
/// processed.
pub fn remove_subdirectories(root: &Path) -> Vec<DirWarning> {
    let mut warnings = Vec::new();

    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("cannot enumerate {}: {}", root.display(), e);
            return warnings;
        }
    };

    for entry in entries.flatten() {
        if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            remove_dir_tree(&entry.path(), &mut warnings);
        }
    }

    warnings
}

fn remove_dir_tree(dir: &Path, warnings: &mut Vec<DirWarning>) {
    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
                remove_dir_tree(&path, warnings);
            } else {
                clear_readonly(&path);
                if let Err(e) = fs::remove_file(&path) {
                    debug!("could not delete {}: {}", path.display(), e);
                }
            }
        }
    }

    clear_readonly(dir);
    if let Err(e) = fs::remove_dir(dir) {
        warn!(
            "directory {} could not be removed: {}. An external process may \
             still hold a handle on it; known causes include search indexers \
             and real-time antivirus scanners.",
            dir.display(),
            e
        );
        warnings.push(DirWarning {
            path: dir.to_path_buf(),
            reason: e.to_string(),
        });
    }
}

/// Drop a read-only attribute if present, best-effort
fn clear_readonly(path: &Path) {
    if let Ok(meta) = fs::symlink_metadata(path) {
        let mut perms = meta.permissions();
        if perms.readonly() {
            #[allow(clippy::permissions_set_readonly_false)]
            perms.set_readonly(false);
            let _ = fs::set_permissions(path, perms);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn delete_files_counts_outcomes() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a");
        let b = temp.path().join("b");
        fs::write(&a, b"1").unwrap();
        fs::write(&b, b"2").unwrap();
        let ghost = temp.path().join("ghost");

        let mut last = (0, 0);
        let summary = delete_files(&[a.clone(), ghost, b.clone()], |done, total| {
            last = (done, total);
        });

        assert_eq!(summary, DeleteSummary { deleted: 2, failed: 1 });
        assert_eq!(last, (3, 3));
        assert!(!a.exists());
        assert!(!b.exists());
    }

    #[test]
    fn delete_files_empty_list() {
        let summary = delete_files(&[], |_, _| panic!("no progress expected"));
        assert_eq!(summary, DeleteSummary::default());
    }

    #[test]
    fn prunes_empty_directory_trees() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("a/b/c")).unwrap();
        fs::create_dir_all(temp.path().join("d")).unwrap();

        let warnings = remove_subdirectories(temp.path());

        assert!(warnings.is_empty());
        assert!(!temp.path().join("a").exists());
        assert!(!temp.path().join("d").exists());
        // The root itself is preserved
        assert!(temp.path().exists());
    }

    #[test]
    fn removes_leftover_and_readonly_files() {
        let temp = TempDir::new().unwrap();
        let sub = temp.path().join("sub");
        fs::create_dir_all(&sub).unwrap();
        let locked = sub.join("stale.bin");
        fs::write(&locked, b"x").unwrap();
        let mut perms = fs::metadata(&locked).unwrap().permissions();
        perms.set_readonly(true);
        fs::set_permissions(&locked, perms).unwrap();

        let warnings = remove_subdirectories(temp.path());

        assert!(warnings.is_empty());
        assert!(!sub.exists());
    }

    #[cfg(unix)]
    #[test]
    fn blocked_directory_survives_with_warning_while_siblings_go() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let blocked = temp.path().join("blocked");
        fs::create_dir_all(&blocked).unwrap();
        fs::write(blocked.join("held.bin"), b"x").unwrap();
        let sibling = temp.path().join("sibling");
        fs::create_dir_all(&sibling).unwrap();

        // An execute+read-only directory rejects unlinking its children,
        // standing in for an external process holding the tree open.
        fs::set_permissions(&blocked, fs::Permissions::from_mode(0o555)).unwrap();

        let warnings = remove_subdirectories(temp.path());

        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].path, blocked);
        assert!(blocked.exists());
        assert!(!sibling.exists());

        // Restore so TempDir can clean up
        fs::set_permissions(&blocked, fs::Permissions::from_mode(0o755)).unwrap();
    }
}
