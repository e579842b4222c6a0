//! CLI command implementations

pub mod backup;
pub mod clean;
pub mod list;
pub mod purge;

pub use backup::execute as backup;
pub use clean::execute as clean;
pub use list::execute as list;
pub use purge::execute as purge;

use crate::artifacts;
use crate::error::IccResult;
use std::path::PathBuf;

/// Resolve the client data directory, honoring an explicit override
pub(crate) fn resolve_source_root(app_dir: Option<PathBuf>) -> IccResult<PathBuf> {
    match app_dir {
        Some(dir) => Ok(dir),
        None => artifacts::client_data_dir(),
    }
}
