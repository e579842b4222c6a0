//! UI module for consistent, modern CLI experience
//!
//! Uses `cliclack` for interactive prompts with automatic fallback to
//! plain output in CI/non-interactive environments.
//!
//! # Example
//!
//! ```rust,ignore
//! use icc::ui::{self, UiContext, TaskSpinner};
//!
//! let ctx = UiContext::detect().with_auto_yes(args.yes);
//!
//! ui::intro(&ctx, "Instant Cache Cleaner");
//!
//! let mut spinner = TaskSpinner::new(&ctx);
//! spinner.start("Calculating size of backups...");
//! // ... do work ...
//! spinner.stop("The backup folder is currently 1.5 GB");
//!
//! let yes = ui::confirm(&ctx, "Do you want to delete all backups?", false).await?;
//!
//! ui::outro_success(&ctx, "All backups have been deleted.");
//! ```

mod context;
mod output;
mod progress;
mod prompts;
mod theme;

pub use context::UiContext;
pub use output::{
    intro, outro_success, outro_warn, remark, step_error, step_info, step_ok, step_warn,
};
pub use progress::{DeleteProgress, TaskSpinner};
pub use prompts::{confirm, pause};
pub use theme::{init_theme, IccTheme};
