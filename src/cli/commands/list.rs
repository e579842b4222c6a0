//! List command - show accumulated backups and their sizes

use crate::artifacts;
use crate::cli::args::{ListArgs, OutputFormat};
use crate::error::{IccError, IccResult};
use crate::size::{dir_size, format_bytes};
use crate::ui::{self, UiContext};
use console::style;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tokio::task;

/// One entry directly under the backup root
#[derive(Debug, Serialize)]
pub struct BackupEntry {
    /// File or directory name (`{timestamp}_{artifact}`)
    pub name: String,
    /// Total size in bytes (recursive for directories)
    pub size_bytes: u64,
    /// Whether this entry is a relocated directory tree
    pub is_dir: bool,
}

/// Execute the list command
pub async fn execute(args: ListArgs, app_dir: Option<PathBuf>, ctx: &UiContext) -> IccResult<()> {
    let source_root = super::resolve_source_root(app_dir)?;
    let backup_root = artifacts::backup_root(&source_root);

    let entries = task::spawn_blocking(move || read_entries(&backup_root))
        .await
        .map_err(|e| IccError::Internal(format!("list task failed: {}", e)))??;

    if entries.is_empty() {
        match args.format {
            OutputFormat::Json => println!("[]"),
            OutputFormat::Plain => {}
            OutputFormat::Table => ui::step_info(ctx, "No backups found."),
        }
        return Ok(());
    }

    match args.format {
        OutputFormat::Table => print_table(&entries),
        OutputFormat::Json => print_json(&entries)?,
        OutputFormat::Plain => print_plain(&entries),
    }

    Ok(())
}

/// Enumerate the direct children of the backup root, sized recursively
fn read_entries(backup_root: &std::path::Path) -> IccResult<Vec<BackupEntry>> {
    let read_dir = match fs::read_dir(backup_root) {
        Ok(read_dir) => read_dir,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(IccError::io(
                format!("reading backup directory {}", backup_root.display()),
                e,
            ))
        }
    };

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| IccError::io("reading backup directory entry", e))?;
        let path = entry.path();
        let is_dir = path.is_dir();
        let size_bytes = if is_dir {
            dir_size(&path)
        } else {
            fs::metadata(&path).map(|m| m.len()).unwrap_or(0)
        };
        entries.push(BackupEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            size_bytes,
            is_dir,
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

fn print_table(entries: &[BackupEntry]) {
    println!(
        "{:<50} {:<6} {:<12}",
        style("NAME").bold(),
        style("KIND").bold(),
        style("SIZE").bold()
    );
    println!("{}", "-".repeat(68));

    for entry in entries {
        let kind = if entry.is_dir { "dir" } else { "file" };
        println!(
            "{:<50} {:<6} {:<12}",
            entry.name,
            kind,
            format_bytes(entry.size_bytes)
        );
    }

    let total: u64 = entries.iter().map(|e| e.size_bytes).sum();
    println!();
    println!("{} backup(s), {} total", entries.len(), format_bytes(total));
}

fn print_json(entries: &[BackupEntry]) -> IccResult<()> {
    let json = serde_json::to_string_pretty(entries)
        .map_err(|e| IccError::Internal(format!("serializing backup list: {}", e)))?;
    println!("{}", json);
    Ok(())
}

fn print_plain(entries: &[BackupEntry]) {
    for entry in entries {
        println!("{}", entry.name);
    }
}
