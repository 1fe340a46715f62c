//! Shell configuration.
//!
//! Centralizes all configuration constants used by the emulator.
//! Text assets are loaded at compile time using `include_str!`.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Help text for `help` command.
pub const HELP_TEXT: &str = include_str!("../assets/text/help.txt");

/// Content of `~/readme.txt` in the default layout.
pub const README_TEXT: &str = include_str!("../assets/text/readme.txt");

// =============================================================================
// Identity
// =============================================================================

/// Default user name, also the name of the home directory.
pub const DEFAULT_USER: &str = "lindroid-user";

/// Host name shown in the prompt and in `uname -a`.
pub const HOSTNAME: &str = "lindroid";

/// Parent directory of all home directories.
pub const HOME_ROOT: &str = "home";

// =============================================================================
// Environment Variables
// =============================================================================

/// Variables seeded into every new shell.
///
/// `HOME` is derived from [`DEFAULT_USER`] and must stay in sync with it.
pub const DEFAULT_ENV_VARS: &[(&str, &str)] = &[
    ("USER", DEFAULT_USER),
    ("HOME", "/home/lindroid-user"),
    ("PATH", "/usr/local/bin:/usr/bin:/bin"),
    ("SHELL", "/bin/bash"),
];

// =============================================================================
// Command Output
// =============================================================================

/// Reserved output telling the caller to clear its transcript.
///
/// Wrapped in NUL characters, which the tokenizer strips from input, so no
/// other command output can equal it.
pub const CLEAR_SENTINEL: &str = "\u{0}__CLEAR__\u{0}";

/// Output of the `history` command. Recall itself lives in the caller.
pub const HISTORY_PLACEHOLDER: &str =
    "Use the up and down arrow keys to browse previously entered commands.";

/// `uname` output fields.
pub mod uname {
    pub const KERNEL_NAME: &str = "Linux";
    pub const KERNEL_RELEASE: &str = "6.1.0-lindroid";
    pub const KERNEL_VERSION: &str = "#1 SMP PREEMPT";
    pub const MACHINE: &str = "aarch64";
    pub const OPERATING_SYSTEM: &str = "GNU/Linux";
}

/// Format string for the `date` command (chrono strftime syntax).
pub const DATE_FORMAT: &str = "%a %b %e %H:%M:%S %Y";
