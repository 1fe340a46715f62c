//! An in-memory Linux-like shell.
//!
//! [`ShellEmulator`] owns a virtual filesystem tree, a working directory and
//! an environment, and answers one command line at a time with one string of
//! output. Nothing touches the host filesystem.
//!
//! ```
//! use lindroid_shell::{CLEAR_SENTINEL, ShellEmulator};
//!
//! let mut shell = ShellEmulator::new();
//! shell.execute_command("mkdir projects");
//! assert_eq!(shell.execute_command("ls"), "Documents Downloads Pictures projects readme.txt");
//! assert_eq!(shell.execute_command("clear"), CLEAR_SENTINEL);
//! ```

pub mod config;
pub mod core;
pub mod models;

pub use crate::config::CLEAR_SENTINEL;
pub use crate::core::error::{EnvironmentError, PathError, ShellError};
pub use crate::core::{
    AutocompleteResult, Command, CommandResult, PathArg, ShellEmulator, ShellState, VirtualFs,
    autocomplete, get_hint,
};
pub use crate::models::{DirEntry, FsEntry, HistoryEntry, Session};
