//! Integration tests for ICC

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn icc() -> Command {
        cargo_bin_cmd!("icc")
    }

    /// Create a client data dir populated with a cache directory and a
    /// cache file from the fixed artifact table
    fn seed_client_dir(app_dir: &Path) {
        let http_cache = app_dir.join("HttpCache");
        fs::create_dir_all(http_cache.join("entries")).unwrap();
        fs::write(http_cache.join("entries/blob0"), vec![0u8; 128]).unwrap();
        fs::write(app_dir.join("productInfoCache.db"), vec![1u8; 64]).unwrap();
    }

    fn backup_entries(app_dir: &Path) -> Vec<String> {
        let backup_root = app_dir.join("ICC Backups");
        if !backup_root.exists() {
            return Vec::new();
        }
        fs::read_dir(backup_root)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn help_displays() {
        icc()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Instant Cache Cleaner"));
    }

    #[test]
    fn version_displays() {
        icc()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("icc"));
    }

    #[test]
    fn backup_empty_client_dir_reports_not_found() {
        let temp = TempDir::new().unwrap();

        icc()
            .args(["--app-dir", temp.path().to_str().unwrap(), "backup"])
            .assert()
            .success()
            .stdout(predicate::str::contains("cache not found"))
            .stdout(predicate::str::contains("All finished"));

        assert!(backup_entries(temp.path()).is_empty());
    }

    #[test]
    fn backup_moves_present_artifacts() {
        let temp = TempDir::new().unwrap();
        seed_client_dir(temp.path());

        icc()
            .args(["--app-dir", temp.path().to_str().unwrap(), "backup"])
            .assert()
            .success()
            .stdout(predicate::str::contains("=>"));

        assert!(!temp.path().join("HttpCache").exists());
        assert!(!temp.path().join("productInfoCache.db").exists());

        let entries = backup_entries(temp.path());
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().any(|n| n.ends_with("_HttpCache")));
        assert!(entries.iter().any(|n| n.ends_with("_productInfoCache.db")));
    }

    #[test]
    fn backup_twice_is_idempotent() {
        let temp = TempDir::new().unwrap();
        seed_client_dir(temp.path());

        icc()
            .args(["--app-dir", temp.path().to_str().unwrap(), "backup"])
            .assert()
            .success();
        let after_first = backup_entries(temp.path());

        icc()
            .args(["--app-dir", temp.path().to_str().unwrap(), "backup"])
            .assert()
            .success()
            .stdout(predicate::str::contains("cache not found"));

        // Nothing new was moved, nothing was duplicated
        assert_eq!(backup_entries(temp.path()).len(), after_first.len());
    }

    #[test]
    fn app_dir_from_environment() {
        let temp = TempDir::new().unwrap();
        seed_client_dir(temp.path());

        icc()
            .env("ICC_APP_DIR", temp.path())
            .arg("backup")
            .assert()
            .success();

        assert!(!temp.path().join("HttpCache").exists());
    }

    #[test]
    fn list_empty() {
        let temp = TempDir::new().unwrap();

        icc()
            .args(["--app-dir", temp.path().to_str().unwrap(), "list"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No backups found"));

        icc()
            .args(["--app-dir", temp.path().to_str().unwrap(), "list", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[]"));
    }

    #[test]
    fn list_shows_backups_after_a_pass() {
        let temp = TempDir::new().unwrap();
        seed_client_dir(temp.path());

        icc()
            .args(["--app-dir", temp.path().to_str().unwrap(), "backup"])
            .assert()
            .success();

        icc()
            .args(["--app-dir", temp.path().to_str().unwrap(), "list"])
            .assert()
            .success()
            .stdout(predicate::str::contains("_HttpCache"))
            .stdout(predicate::str::contains("2 backup(s)"));
    }

    #[test]
    fn purge_empty_root_is_a_noop() {
        let temp = TempDir::new().unwrap();

        icc()
            .args(["--app-dir", temp.path().to_str().unwrap(), "--yes", "purge"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No backup files to delete"));
    }

    #[test]
    fn purge_without_confirmation_leaves_backups() {
        let temp = TempDir::new().unwrap();
        let backup_root = temp.path().join("ICC Backups");
        fs::create_dir_all(&backup_root).unwrap();
        fs::write(backup_root.join("1700000000_state.db"), b"x").unwrap();

        // Non-interactive run without --yes declines the prompt
        icc()
            .args(["--app-dir", temp.path().to_str().unwrap(), "purge"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Backups left in place"));

        assert!(backup_root.join("1700000000_state.db").exists());
    }

    #[test]
    fn purge_deletes_files_and_prunes_directories() {
        let temp = TempDir::new().unwrap();
        let backup_root = temp.path().join("ICC Backups");
        let moved_cache = backup_root.join("1700000000_HttpCache");
        fs::create_dir_all(moved_cache.join("entries/deep")).unwrap();
        for i in 0..25 {
            fs::write(moved_cache.join(format!("entries/blob{}", i)), b"data").unwrap();
        }
        fs::write(moved_cache.join("entries/deep/blob"), b"data").unwrap();
        fs::write(backup_root.join("1700000000_state.db"), b"data").unwrap();

        icc()
            .args(["--app-dir", temp.path().to_str().unwrap(), "--yes", "purge"])
            .assert()
            .success()
            .stdout(predicate::str::contains("All backups have been deleted"));

        // Files and the directory skeleton are gone; the root remains
        assert!(!moved_cache.exists());
        assert!(!backup_root.join("1700000000_state.db").exists());
        assert!(backup_root.exists());
    }

    #[test]
    fn clean_non_interactive_backs_up_without_purging() {
        let temp = TempDir::new().unwrap();
        seed_client_dir(temp.path());

        // Default-true continue prompt proceeds; default-false size/purge
        // prompt declines
        icc()
            .args(["--app-dir", temp.path().to_str().unwrap(), "clean"])
            .assert()
            .success()
            .stdout(predicate::str::contains("All finished"));

        assert!(!temp.path().join("HttpCache").exists());
        assert_eq!(backup_entries(temp.path()).len(), 2);
    }

    #[test]
    fn clean_with_yes_purges_after_backup() {
        let temp = TempDir::new().unwrap();
        seed_client_dir(temp.path());

        icc()
            .args(["--app-dir", temp.path().to_str().unwrap(), "--yes", "clean"])
            .assert()
            .success()
            .stdout(predicate::str::contains("All backups have been deleted"));

        // Everything moved in this run was deleted again by the purge
        let entries = backup_entries(temp.path());
        assert!(entries.is_empty(), "leftover backup entries: {:?}", entries);
    }
}
