//! Error types for the shell.
//!
//! Every failure a command can hit is a recoverable, displayable error. The
//! dispatcher renders them with `to_string()`, so the `Display` text of each
//! variant is exactly what the user sees.
//!
//! - [`ShellError`] - Command-level failures
//! - [`PathError`] - Path resolution misses
//! - [`EnvironmentError`] - Malformed variable assignments

use thiserror::Error;

/// Why a path did not resolve to a node.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// A segment does not exist.
    #[error("not found")]
    NotFound,
    /// A segment exists but is a file where a directory is required.
    #[error("not a directory")]
    NotADirectory,
}

/// Environment variable assignment errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvironmentError {
    /// No `=`, or an empty key or value.
    #[error("invalid syntax (usage: export KEY=VALUE)")]
    InvalidSyntax,
    /// Key is not an identifier.
    #[error("invalid variable name '{0}' (use letters, numbers, underscores)")]
    InvalidVariableName(String),
}

/// Command failures, rendered as the command's output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// Required argument absent.
    #[error("{command}: missing operand")]
    MissingOperand { command: &'static str },

    /// Named entry does not exist (or is the wrong kind for the command).
    #[error("{command}: {name}: No such file or directory")]
    NotFound { command: &'static str, name: String },

    /// `cd` target does not resolve.
    #[error("cd: {0}: No such directory")]
    NoSuchDirectory(String),

    /// `cd` target is a file.
    #[error("cd: {0}: Not a directory")]
    NotADirectory(String),

    /// Working directory no longer resolves to a directory.
    #[error("{command}: cannot access '{path}': No such directory")]
    CannotAccess { command: &'static str, path: String },

    /// Name cannot be a single child entry (`.`, `..`, or contains `/`).
    #[error("{command}: {name}: Invalid name")]
    InvalidName { command: &'static str, name: String },

    /// Creation collides with an existing sibling.
    #[error("{command}: {name}: Already exists")]
    AlreadyExists { command: &'static str, name: String },

    /// Malformed `export` assignment.
    #[error("export: {0}")]
    Environment(#[from] EnvironmentError),

    /// Dispatch table miss.
    #[error("{0}: command not found. Type 'help' for available commands.")]
    CommandNotFound(String),
}

impl ShellError {
    pub fn not_found(command: &'static str, name: impl Into<String>) -> Self {
        Self::NotFound {
            command,
            name: name.into(),
        }
    }

    pub fn invalid_name(command: &'static str, name: impl Into<String>) -> Self {
        Self::InvalidName {
            command,
            name: name.into(),
        }
    }

    pub fn already_exists(command: &'static str, name: impl Into<String>) -> Self {
        Self::AlreadyExists {
            command,
            name: name.into(),
        }
    }
}
