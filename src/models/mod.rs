//! Data models and types for the shell.
//!
//! Contains domain types for:
//! - [`FsEntry`], [`DirEntry`] - Virtual filesystem representation
//! - [`Session`], [`HistoryEntry`] - Caller-owned transcript used for replay

mod filesystem;
mod session;

pub use filesystem::{DirEntry, FsEntry};
pub use session::{HistoryEntry, Session};
