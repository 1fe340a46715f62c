//! The shell emulator: tokenizes a command line, dispatches it and returns
//! one displayable result.

use crate::core::commands::{Command, CommandResult, execute_command};
use crate::core::env::Environment;
use crate::core::parser::parse_input;
use crate::core::path::{display_path, home_path};
use crate::core::VirtualFs;

/// Per-instance mutable state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellState {
    /// Segments from the root; empty at the root. Always names an existing
    /// directory.
    pub working_directory: Vec<String>,
    pub environment: Environment,
}

impl Default for ShellState {
    /// Home directory and the seeded environment.
    fn default() -> Self {
        Self {
            working_directory: home_path(),
            environment: Environment::default(),
        }
    }
}

/// An in-memory shell over its own filesystem tree.
///
/// Every call to [`execute`](Self::execute) runs to completion and either
/// applies all of its effects or none of them.
///
/// ```
/// use lindroid_shell::ShellEmulator;
///
/// let mut shell = ShellEmulator::new();
/// assert_eq!(shell.execute_command("cd Documents"), "");
/// assert_eq!(shell.current_path(), "/home/lindroid-user/Documents");
/// ```
#[derive(Clone, Debug)]
pub struct ShellEmulator {
    fs: VirtualFs,
    state: ShellState,
}

impl ShellEmulator {
    /// New shell over the default layout, starting in the home directory.
    pub fn new() -> Self {
        Self::with_fs(VirtualFs::default_layout())
    }

    /// New shell over a caller-supplied tree.
    ///
    /// Starts in the home directory if the tree has one, otherwise at the
    /// root.
    pub fn with_fs(fs: VirtualFs) -> Self {
        let mut state = ShellState::default();
        if !fs.is_directory(&state.working_directory) {
            state.working_directory.clear();
        }

        tracing::info!(cwd = %display_path(&state.working_directory), "shell created");
        Self { fs, state }
    }

    /// Fresh shell with `commands` executed in order.
    pub fn replay<I, S>(commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut shell = Self::new();
        for cmd in commands {
            shell.execute(cmd.as_ref());
        }
        shell
    }

    /// Execute one raw command line.
    ///
    /// Blank input produces empty output. Failures are rendered as output
    /// and leave the shell unchanged.
    pub fn execute(&mut self, raw: &str) -> CommandResult {
        let Some(parsed) = parse_input(raw) else {
            return CommandResult::empty();
        };

        let result = Command::parse(&parsed.name, &parsed.args).and_then(|cmd| {
            tracing::debug!(command = cmd.name(), args = parsed.args.len(), "dispatch");
            execute_command(cmd, &mut self.state, &mut self.fs)
        });

        result.unwrap_or_else(|err| {
            tracing::debug!(%err, "command failed");
            CommandResult::output(err.to_string())
        })
    }

    /// Execute one raw command line, returning the single-string form.
    ///
    /// A `clear` request comes back as
    /// [`CLEAR_SENTINEL`](crate::config::CLEAR_SENTINEL).
    pub fn execute_command(&mut self, raw: &str) -> String {
        self.execute(raw).into_text()
    }

    /// Absolute working directory, e.g. `/home/lindroid-user`.
    pub fn current_path(&self) -> String {
        display_path(&self.state.working_directory)
    }

    pub fn working_directory(&self) -> &[String] {
        &self.state.working_directory
    }

    pub fn environment(&self) -> &Environment {
        &self.state.environment
    }

    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    /// Prompt string: `{USER}@{hostname}:{path}$ `.
    pub fn prompt(&self) -> String {
        format!(
            "{}@{}:{}$ ",
            self.state.environment.get("USER").unwrap_or_default(),
            crate::config::HOSTNAME,
            self.current_path()
        )
    }
}

impl Default for ShellEmulator {
    fn default() -> Self {
        Self::new()
    }
}
