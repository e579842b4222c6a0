//! Purge command - size up and bulk-delete accumulated backups

use crate::artifacts::{self, BACKUP_DIR_NAME};
use crate::error::{IccError, IccResult};
use crate::purge::{
    collect_files, delete_files, remove_subdirectories, DeletionPlan, DEFAULT_SAMPLE_SIZE,
};
use crate::size::{dir_size, format_bytes};
use crate::ui::{self, DeleteProgress, TaskSpinner, UiContext};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::task;
use tracing::info;

/// Execute the purge command
pub async fn execute(app_dir: Option<PathBuf>, ctx: &UiContext) -> IccResult<()> {
    let source_root = super::resolve_source_root(app_dir)?;
    let backup_root = artifacts::backup_root(&source_root);

    run_purge_flow(ctx, &backup_root).await
}

/// The full purge sequence: size report, confirmation, timed sample,
/// estimate, remainder pass, empty-directory pruning.
pub(crate) async fn run_purge_flow(ctx: &UiContext, backup_root: &Path) -> IccResult<()> {
    let mut spinner = TaskSpinner::new(ctx);
    spinner.start("Calculating size of backups, please wait...");
    let size = {
        let root = backup_root.to_path_buf();
        task::spawn_blocking(move || dir_size(&root))
            .await
            .map_err(|e| IccError::Internal(format!("size task failed: {}", e)))?
    };
    spinner.stop(&format!(
        "The \"{}\" folder is currently {}",
        BACKUP_DIR_NAME,
        format_bytes(size)
    ));

    let files = {
        let root = backup_root.to_path_buf();
        task::spawn_blocking(move || collect_files(&root))
            .await
            .map_err(|e| IccError::Internal(format!("walk task failed: {}", e)))?
    };
    if files.is_empty() {
        ui::step_info(ctx, "No backup files to delete.");
        return Ok(());
    }

    if !ui::confirm(ctx, "Do you want to delete all backups?", false).await? {
        ui::outro_warn(ctx, "Backups left in place.");
        return Ok(());
    }

    ui::step_info(ctx, "Counting files and measuring deletion speed...");
    let started = Instant::now();
    let (plan, files) = {
        let ctx = ctx.clone();
        task::spawn_blocking(move || {
            let mut bar = DeleteProgress::new(&ctx, "Sampling");
            let plan = DeletionPlan::sample(&files, DEFAULT_SAMPLE_SIZE, |done, total| {
                bar.update(done, total);
            });
            bar.finish();
            plan.map(|p| (p, files))
        })
        .await
        .map_err(|e| IccError::Internal(format!("sample task failed: {}", e)))??
    };
    info!(
        "sampled {} files in {:?} ({:.0} files/sec)",
        plan.sampled, plan.measured, plan.files_per_sec
    );

    if plan.remaining() > 0 {
        ui::step_info(
            ctx,
            &format!(
                "Found {} files, this should take about ~{} minute(s) or less...",
                plan.total_files,
                plan.estimated_minutes()
            ),
        );

        if !ui::confirm(ctx, "Do you wish to continue?", true).await? {
            ui::outro_warn(ctx, "Remaining backups left in place.");
            return Ok(());
        }

        let remaining = files[plan.sampled..].to_vec();
        let summary = {
            let ctx = ctx.clone();
            task::spawn_blocking(move || {
                let mut bar = DeleteProgress::new(&ctx, "Deleting");
                let summary = delete_files(&remaining, |done, total| bar.update(done, total));
                bar.finish();
                summary
            })
            .await
            .map_err(|e| IccError::Internal(format!("delete task failed: {}", e)))?
        };

        if summary.failed > 0 {
            ui::step_warn(
                ctx,
                &format!("{} file(s) could not be deleted and were skipped", summary.failed),
            );
        }
    }

    // Remove the now-empty directory skeleton; the backup root survives
    let warnings = {
        let root = backup_root.to_path_buf();
        task::spawn_blocking(move || remove_subdirectories(&root))
            .await
            .map_err(|e| IccError::Internal(format!("prune task failed: {}", e)))?
    };
    for warning in &warnings {
        ui::step_warn(
            ctx,
            &format!(
                "Could not remove {}: {}. An external process (search indexer, \
                 antivirus) may still hold a handle on it.",
                warning.path.display(),
                warning.reason
            ),
        );
    }

    ui::step_info(
        ctx,
        &format!(
            "Total elapsed time was {:.1} seconds",
            started.elapsed().as_secs_f64()
        ),
    );
    ui::outro_success(ctx, "All backups have been deleted.");
    Ok(())
}
