//! Core business logic for the shell.
//!
//! This module provides:
//! - [`ShellEmulator`] command dispatch over [`ShellState`]
//! - [`VirtualFs`] virtual filesystem tree
//! - [`path`] resolution of path arguments against the working directory
//! - [`autocomplete`] and [`get_hint`] for tab completion

mod autocomplete;
mod commands;
pub mod env;
pub mod error;
mod filesystem;
pub mod parser;
pub mod path;
mod shell;

pub use autocomplete::{AutocompleteResult, autocomplete, get_hint};
pub use commands::{Command, CommandResult, PathArg};
pub use filesystem::VirtualFs;
pub use shell::{ShellEmulator, ShellState};
