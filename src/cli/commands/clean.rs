//! Clean command - the default interactive backup-then-purge flow

use crate::artifacts;
use crate::error::{IccError, IccResult};
use crate::ui::{self, UiContext};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Execute the clean command
pub async fn execute(app_dir: Option<PathBuf>, ctx: &UiContext) -> IccResult<()> {
    ui::intro(ctx, "Instant Cache Cleaner");
    ui::remark(
        ctx,
        "This will create a backup and then remove cache files from the client within seconds.",
    );
    ui::remark(
        ctx,
        "Please exit the client and confirm it is not running in the taskbar.",
    );

    if !ui::confirm(ctx, "Do you want to continue?", true).await? {
        ui::outro_warn(ctx, "Nothing was changed.");
        return Ok(());
    }

    let source_root = super::resolve_source_root(app_dir)?;
    let backup_root = artifacts::backup_root(&source_root);

    super::backup::run_backup_pass(ctx, &source_root, &backup_root).await?;
    ui::step_ok(ctx, "All finished! You may now re-open the client.");

    if has_backup_entries(&backup_root).await?
        && ui::confirm(
            ctx,
            "Would you like to calculate the size of the backups? ETA ~3 seconds to 5 minutes",
            false,
        )
        .await?
    {
        super::purge::run_purge_flow(ctx, &backup_root).await?;
    }

    ui::pause(ctx);
    Ok(())
}

/// Whether anything has accumulated under the backup root
async fn has_backup_entries(backup_root: &Path) -> IccResult<bool> {
    let mut entries = match fs::read_dir(backup_root).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(e) => {
            return Err(IccError::io(
                format!("reading backup directory {}", backup_root.display()),
                e,
            ))
        }
    };

    let first = entries
        .next_entry()
        .await
        .map_err(|e| IccError::io("reading backup directory entry", e))?;
    Ok(first.is_some())
}
