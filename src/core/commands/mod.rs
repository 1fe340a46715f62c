//! Command parsing and execution.
//!
//! This module provides:
//! - `Command` enum for parsed shell commands
//! - `CommandResult` for command execution results
//! - `execute_command` for running a command against shell state
//!
//! # Architecture
//!
//! Tokenized input is parsed into the `Command` enum by `Command::parse`,
//! which already rejects unknown names and missing operands. The parsed
//! command is then executed via `execute_command`.

mod execute;
mod result;

pub use execute::execute_command;
pub use result::CommandResult;

use std::fmt;

use crate::core::error::ShellError;

// =============================================================================
// Path Argument Type
// =============================================================================

/// A path argument passed to a command (e.g., `cd foo`, `cat bar.txt`).
///
/// Stored as typed; validation happens during execution against the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathArg(String);

impl PathArg {
    /// Create a new path argument from a string.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Get the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PathArg {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl PartialEq<&str> for PathArg {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Command Enum
// =============================================================================

/// Parsed shell command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Clear,
    Echo(String),
    Date,
    Whoami,
    Pwd,
    /// List the current directory. The path is accepted but not used.
    Ls(Option<PathArg>),
    /// Change directory; `None` means home.
    Cd(Option<PathArg>),
    Cat(PathArg),
    Mkdir(PathArg),
    Touch(PathArg),
    Rm(PathArg),
    Mv {
        src: PathArg,
        dest: PathArg,
    },
    /// `-a` prints every field.
    Uname {
        all: bool,
    },
    Env,
    /// `None` lists variables, otherwise a single `KEY=VALUE` assignment.
    ///
    /// All arguments are joined with one space before parsing, so a quoted
    /// value may contain spaces and `export A=1 B=2` sets `A` to `1 B=2`.
    Export(Option<String>),
    Unset(String),
    History,
}

impl Command {
    /// Get all available command names for autocomplete.
    pub fn names() -> &'static [&'static str] {
        &[
            "cat", "cd", "clear", "cls", "date", "echo", "env", "export", "help", "history", "ls",
            "mkdir", "mv", "pwd", "rm", "touch", "uname", "unset", "whoami",
        ]
    }

    /// Parse command from name and arguments.
    ///
    /// The name is matched case-insensitively.
    pub fn parse(name: &str, args: &[String]) -> Result<Self, ShellError> {
        let cmd = match name.to_lowercase().as_str() {
            "help" | "?" => Self::Help,
            "clear" | "cls" => Self::Clear,
            "echo" => Self::Echo(args.join(" ")),
            "date" => Self::Date,
            "whoami" => Self::Whoami,
            "pwd" => Self::Pwd,
            "ls" => Self::Ls(args.first().map(PathArg::new)),
            "cd" => Self::Cd(args.first().map(PathArg::new)),
            "cat" => Self::Cat(required(args, "cat")?),
            "mkdir" => Self::Mkdir(required(args, "mkdir")?),
            "touch" => Self::Touch(required(args, "touch")?),
            "rm" => Self::Rm(required(args, "rm")?),
            "mv" => match args {
                [src, dest, ..] => Self::Mv {
                    src: PathArg::new(src),
                    dest: PathArg::new(dest),
                },
                _ => return Err(ShellError::MissingOperand { command: "mv" }),
            },
            "uname" => Self::Uname {
                all: args.iter().any(|a| a == "-a"),
            },
            "env" => Self::Env,
            "export" => {
                if args.is_empty() {
                    Self::Export(None)
                } else {
                    Self::Export(Some(args.join(" ")))
                }
            }
            "unset" => match args.first() {
                Some(key) => Self::Unset(key.clone()),
                None => return Err(ShellError::MissingOperand { command: "unset" }),
            },
            "history" => Self::History,
            _ => return Err(ShellError::CommandNotFound(name.to_string())),
        };
        Ok(cmd)
    }

    /// Canonical command name, used for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Clear => "clear",
            Self::Echo(_) => "echo",
            Self::Date => "date",
            Self::Whoami => "whoami",
            Self::Pwd => "pwd",
            Self::Ls(_) => "ls",
            Self::Cd(_) => "cd",
            Self::Cat(_) => "cat",
            Self::Mkdir(_) => "mkdir",
            Self::Touch(_) => "touch",
            Self::Rm(_) => "rm",
            Self::Mv { .. } => "mv",
            Self::Uname { .. } => "uname",
            Self::Env => "env",
            Self::Export(_) => "export",
            Self::Unset(_) => "unset",
            Self::History => "history",
        }
    }
}

/// First argument, or a missing-operand error for `command`.
fn required(args: &[String], command: &'static str) -> Result<PathArg, ShellError> {
    args.first()
        .map(PathArg::new)
        .ok_or(ShellError::MissingOperand { command })
}

// =============================================================================
// Tests
// =============================================================================
