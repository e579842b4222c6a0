//! Backup command - relocate the client cache into the backup folder

use crate::artifacts::{self, CLIENT_CACHE_ARTIFACTS};
use crate::backup::{BackupEngine, BackupRecord};
use crate::error::IccResult;
use crate::ui::{self, UiContext};
use console::style;
use std::path::{Path, PathBuf};

/// Execute the backup command
pub async fn execute(app_dir: Option<PathBuf>, ctx: &UiContext) -> IccResult<()> {
    let source_root = super::resolve_source_root(app_dir)?;
    let backup_root = artifacts::backup_root(&source_root);

    let records = run_backup_pass(ctx, &source_root, &backup_root).await?;
    let moved = records.iter().filter(|r| r.was_moved()).count();
    ui::step_ok(
        ctx,
        &format!(
            "All finished! {} artifact(s) backed up. You may now re-open the client.",
            moved
        ),
    );
    Ok(())
}

/// Run the backup engine with a caller-controlled retry loop.
///
/// Move failures almost always mean a still-running client holds a lock
/// on one of the caches. Retrying re-runs the whole pass; artifacts a
/// previous attempt already moved come back as not-found, so a retry
/// never duplicates anything.
pub(crate) async fn run_backup_pass(
    ctx: &UiContext,
    source_root: &Path,
    backup_root: &Path,
) -> IccResult<Vec<BackupRecord>> {
    let engine = BackupEngine::new(source_root, backup_root, CLIENT_CACHE_ARTIFACTS);

    loop {
        match engine.run().await {
            Ok(records) => {
                print_records(&records);
                return Ok(records);
            }
            Err(e) if e.is_retryable() => {
                ui::step_error(ctx, &format!("There was an issue with the backup: {}", e));
                if let Some(hint) = e.hint() {
                    ui::remark(ctx, hint);
                }
                if !ui::confirm(ctx, "Do you want to try again?", false).await? {
                    return Err(e);
                }
            }
            Err(e) => return Err(e),
        }
    }
}

/// One line per artifact: the source path, then where it went
fn print_records(records: &[BackupRecord]) {
    for record in records {
        println!("{}", record.original_path.display());
        match &record.backup_path {
            Some(to) => println!("  => {}", to.display()),
            None => println!(
                "  => {}",
                style("cache not found - this is normal if you recently cleaned the cache").dim()
            ),
        }
    }
}
