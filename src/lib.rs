//! ICC - Instant Cache Cleaner
//!
//! Relocates the client's cache files into a timestamped backup folder,
//! and bulk-deletes accumulated backups with a sampled time estimate.

pub mod artifacts;
pub mod backup;
pub mod cli;
pub mod error;
pub mod purge;
pub mod size;
pub mod ui;

pub use error::{IccError, IccResult};
