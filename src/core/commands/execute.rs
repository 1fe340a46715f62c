//! Command execution logic.
//!
//! Contains the `execute_command` function that runs parsed commands
//! against the virtual filesystem and shell state.
//!
//! Every handler validates before it mutates: an `Err` return guarantees
//! that neither the tree nor the state was touched.

use std::collections::HashMap;

use chrono::Local;

use crate::config::{DATE_FORMAT, HELP_TEXT, HISTORY_PLACEHOLDER, HOSTNAME, uname};
use crate::core::error::{PathError, ShellError};
use crate::core::path::{self, display_path};
use crate::core::{ShellState, VirtualFs, env};
use crate::models::FsEntry;

use super::{Command, CommandResult, PathArg};

/// Execute a parsed command.
///
/// # Arguments
///
/// * `cmd` - The parsed command to execute
/// * `state` - Working directory and environment (may be updated)
/// * `fs` - Virtual filesystem (may be updated)
pub fn execute_command(
    cmd: Command,
    state: &mut ShellState,
    fs: &mut VirtualFs,
) -> Result<CommandResult, ShellError> {
    match cmd {
        Command::Help => Ok(CommandResult::output(HELP_TEXT.trim_end())),
        Command::Clear => Ok(CommandResult::Clear),
        Command::Echo(text) => Ok(CommandResult::output(text)),
        Command::Date => Ok(CommandResult::output(
            Local::now().format(DATE_FORMAT).to_string(),
        )),
        Command::Whoami => Ok(CommandResult::output(
            state.environment.get("USER").unwrap_or_default(),
        )),
        Command::Pwd => Ok(CommandResult::output(display_path(
            &state.working_directory,
        ))),
        Command::Ls(_) => execute_ls(state, fs),
        Command::Cd(target) => execute_cd(target, state, fs),
        Command::Cat(file) => execute_cat(&file, state, fs),
        Command::Mkdir(name) => execute_mkdir(&name, state, fs),
        Command::Touch(name) => execute_touch(&name, state, fs),
        Command::Rm(name) => execute_rm(&name, state, fs),
        Command::Mv { src, dest } => execute_mv(&src, &dest, state, fs),
        Command::Uname { all } => Ok(CommandResult::output(execute_uname(all))),
        Command::Env => Ok(CommandResult::output(state.environment.format_env())),
        Command::Export(arg) => execute_export(arg, state),
        Command::Unset(key) => {
            state.environment.unset(&key);
            Ok(CommandResult::empty())
        }
        Command::History => Ok(CommandResult::output(HISTORY_PLACEHOLDER)),
    }
}

/// Execute `ls` on the working directory.
fn execute_ls(state: &ShellState, fs: &VirtualFs) -> Result<CommandResult, ShellError> {
    let entries = fs
        .list_dir(&state.working_directory)
        .ok_or_else(|| ShellError::CannotAccess {
            command: "ls",
            path: display_path(&state.working_directory),
        })?;

    let names: Vec<_> = entries.into_iter().map(|e| e.name).collect();
    Ok(CommandResult::output(names.join(" ")))
}

/// Execute `cd` command.
fn execute_cd(
    target: Option<PathArg>,
    state: &mut ShellState,
    fs: &VirtualFs,
) -> Result<CommandResult, ShellError> {
    let new_path = match target {
        None => {
            let home = path::home_path();
            if !fs.is_directory(&home) {
                return Err(ShellError::NoSuchDirectory(display_path(&home)));
            }
            home
        }
        Some(arg) => path::locate_directory(fs, &state.working_directory, arg.as_str())
            .map_err(|err| match err {
                PathError::NotFound => ShellError::NoSuchDirectory(arg.to_string()),
                PathError::NotADirectory => ShellError::NotADirectory(arg.to_string()),
            })?,
    };

    tracing::debug!(path = %display_path(&new_path), "changed directory");
    state.working_directory = new_path;
    Ok(CommandResult::empty())
}

/// Execute `cat` command.
fn execute_cat(
    file: &PathArg,
    state: &ShellState,
    fs: &VirtualFs,
) -> Result<CommandResult, ShellError> {
    match path::locate(fs, &state.working_directory, file.as_str()) {
        Ok((_, FsEntry::File { content })) => Ok(CommandResult::output(content.clone())),
        Ok((_, FsEntry::Directory { .. })) | Err(_) => {
            Err(ShellError::not_found("cat", file.as_str()))
        }
    }
}

/// Execute `mkdir` command.
fn execute_mkdir(
    name: &PathArg,
    state: &ShellState,
    fs: &mut VirtualFs,
) -> Result<CommandResult, ShellError> {
    let name = entry_name("mkdir", name)?;
    let dir = working_dir_mut("mkdir", state, fs)?;

    if dir.contains_key(name) {
        return Err(ShellError::already_exists("mkdir", name));
    }
    dir.insert(name.to_string(), FsEntry::directory());
    Ok(CommandResult::empty())
}

/// Execute `touch` command. Existing entries are left untouched.
fn execute_touch(
    name: &PathArg,
    state: &ShellState,
    fs: &mut VirtualFs,
) -> Result<CommandResult, ShellError> {
    let name = entry_name("touch", name)?;
    working_dir_mut("touch", state, fs)?
        .entry(name.to_string())
        .or_insert_with(FsEntry::empty_file);
    Ok(CommandResult::empty())
}

/// Execute `rm` command. Directories go with their whole subtree.
fn execute_rm(
    name: &PathArg,
    state: &ShellState,
    fs: &mut VirtualFs,
) -> Result<CommandResult, ShellError> {
    working_dir_mut("rm", state, fs)?
        .remove(name.as_str())
        .ok_or_else(|| ShellError::not_found("rm", name.as_str()))?;
    Ok(CommandResult::empty())
}

/// Execute `mv` command.
///
/// Both names are checked before the entry is moved, so a failed rename
/// leaves exactly the source name in place.
fn execute_mv(
    src: &PathArg,
    dest: &PathArg,
    state: &ShellState,
    fs: &mut VirtualFs,
) -> Result<CommandResult, ShellError> {
    let dest = entry_name("mv", dest)?;
    let dir = working_dir_mut("mv", state, fs)?;

    if !dir.contains_key(src.as_str()) {
        return Err(ShellError::not_found("mv", src.as_str()));
    }
    if dir.contains_key(dest) {
        return Err(ShellError::already_exists("mv", dest));
    }

    if let Some(entry) = dir.remove(src.as_str()) {
        dir.insert(dest.to_string(), entry);
    }
    Ok(CommandResult::empty())
}

/// Execute `uname`.
fn execute_uname(all: bool) -> String {
    if !all {
        return uname::KERNEL_NAME.to_string();
    }

    [
        uname::KERNEL_NAME,
        HOSTNAME,
        uname::KERNEL_RELEASE,
        uname::KERNEL_VERSION,
        uname::MACHINE,
        uname::OPERATING_SYSTEM,
    ]
    .join(" ")
}

/// Execute `export` command.
fn execute_export(
    arg: Option<String>,
    state: &mut ShellState,
) -> Result<CommandResult, ShellError> {
    match arg {
        None => Ok(CommandResult::output(state.environment.format_export())),
        Some(assignment) => {
            let (key, value) = env::parse_assignment(&assignment)?;
            state.environment.set(key, value);
            Ok(CommandResult::empty())
        }
    }
}

/// Validate a name for a new entry in the working directory.
fn entry_name<'a>(command: &'static str, name: &'a PathArg) -> Result<&'a str, ShellError> {
    match name.as_str() {
        "." | ".." => Err(ShellError::invalid_name(command, name.as_str())),
        n if n.contains('/') => Err(ShellError::invalid_name(command, n)),
        n => Ok(n),
    }
}

/// Child mapping of the working directory.
fn working_dir_mut<'a>(
    command: &'static str,
    state: &ShellState,
    fs: &'a mut VirtualFs,
) -> Result<&'a mut HashMap<String, FsEntry>, ShellError> {
    fs.directory_mut(&state.working_directory)
        .ok_or_else(|| ShellError::CannotAccess {
            command,
            path: display_path(&state.working_directory),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::env::Environment;

    fn setup() -> (ShellState, VirtualFs) {
        (ShellState::default(), VirtualFs::default_layout())
    }

    fn run(cmd: Command, state: &mut ShellState, fs: &mut VirtualFs) -> Result<String, ShellError> {
        execute_command(cmd, state, fs).map(CommandResult::into_text)
    }

    #[test]
    fn test_ls_home() {
        let (mut state, mut fs) = setup();
        assert_eq!(
            run(Command::Ls(None), &mut state, &mut fs).unwrap(),
            "Documents Downloads Pictures readme.txt"
        );
    }

    #[test]
    fn test_ls_ignores_path_argument() {
        let (mut state, mut fs) = setup();
        let listed = run(Command::Ls(Some("/etc".into())), &mut state, &mut fs).unwrap();
        assert!(listed.contains("readme.txt"));
    }

    #[test]
    fn test_ls_empty_directory() {
        let (mut state, mut fs) = setup();
        state.working_directory = vec!["tmp".to_string()];
        assert_eq!(run(Command::Ls(None), &mut state, &mut fs).unwrap(), "");
    }

    #[test]
    fn test_cd_errors_leave_state() {
        let (mut state, mut fs) = setup();
        let before = state.working_directory.clone();

        let err = run(Command::Cd(Some("readme.txt".into())), &mut state, &mut fs).unwrap_err();
        assert_eq!(err, ShellError::NotADirectory("readme.txt".to_string()));
        let err = run(Command::Cd(Some("ghost".into())), &mut state, &mut fs).unwrap_err();
        assert_eq!(err, ShellError::NoSuchDirectory("ghost".to_string()));

        assert_eq!(state.working_directory, before);
    }

    #[test]
    fn test_cd_home_without_home_directory() {
        let mut state = ShellState {
            working_directory: vec![],
            environment: Environment::default(),
        };
        let mut fs = VirtualFs::empty();
        let err = run(Command::Cd(None), &mut state, &mut fs).unwrap_err();
        assert_eq!(
            err,
            ShellError::NoSuchDirectory("/home/lindroid-user".to_string())
        );
        assert!(state.working_directory.is_empty());
    }

    #[test]
    fn test_cat_directory_is_not_a_file() {
        let (mut state, mut fs) = setup();
        let err = run(Command::Cat("Documents".into()), &mut state, &mut fs).unwrap_err();
        assert_eq!(err, ShellError::not_found("cat", "Documents"));
    }

    #[test]
    fn test_cat_absolute_path() {
        let (mut state, mut fs) = setup();
        assert_eq!(
            run(Command::Cat("/etc/hostname".into()), &mut state, &mut fs).unwrap(),
            "lindroid\n"
        );
    }

    #[test]
    fn test_mkdir_collision_does_not_mutate() {
        let (mut state, mut fs) = setup();
        let before = fs.clone();
        let err = run(Command::Mkdir("readme.txt".into()), &mut state, &mut fs).unwrap_err();
        assert_eq!(err, ShellError::already_exists("mkdir", "readme.txt"));
        assert_eq!(fs, before);
    }

    #[test]
    fn test_invalid_names_rejected() {
        let (mut state, mut fs) = setup();
        let before = fs.clone();
        for name in [".", "..", "a/b"] {
            assert!(run(Command::Mkdir(name.into()), &mut state, &mut fs).is_err());
            assert!(run(Command::Touch(name.into()), &mut state, &mut fs).is_err());
        }
        assert_eq!(fs, before);
    }

    #[test]
    fn test_touch_keeps_existing_content() {
        let (mut state, mut fs) = setup();
        run(Command::Touch("readme.txt".into()), &mut state, &mut fs).unwrap();
        let content = run(Command::Cat("readme.txt".into()), &mut state, &mut fs).unwrap();
        assert!(content.contains("Welcome to Lindroid"));
    }

    #[test]
    fn test_touch_existing_directory_untouched() {
        let (mut state, mut fs) = setup();
        run(Command::Touch("Documents".into()), &mut state, &mut fs).unwrap();
        assert!(fs.is_directory(&["home", "lindroid-user", "Documents"]));
    }

    #[test]
    fn test_rm_removes_subtree() {
        let (mut state, mut fs) = setup();
        state.working_directory = vec!["home".to_string()];
        run(Command::Rm("lindroid-user".into()), &mut state, &mut fs).unwrap();
        assert!(fs.resolve(&["home", "lindroid-user", "readme.txt"]).is_none());

        let err = run(Command::Rm("lindroid-user".into()), &mut state, &mut fs).unwrap_err();
        assert_eq!(err, ShellError::not_found("rm", "lindroid-user"));
    }

    #[test]
    fn test_mv_renames() {
        let (mut state, mut fs) = setup();
        run(
            Command::Mv {
                src: "readme.txt".into(),
                dest: "notes.txt".into(),
            },
            &mut state,
            &mut fs,
        )
        .unwrap();

        let content = run(Command::Cat("notes.txt".into()), &mut state, &mut fs).unwrap();
        assert!(content.contains("Welcome to Lindroid"));
        assert!(fs.resolve(&["home", "lindroid-user", "readme.txt"]).is_none());
    }

    #[test]
    fn test_mv_collision_keeps_both() {
        let (mut state, mut fs) = setup();
        let before = fs.clone();
        let err = run(
            Command::Mv {
                src: "readme.txt".into(),
                dest: "Documents".into(),
            },
            &mut state,
            &mut fs,
        )
        .unwrap_err();
        assert_eq!(err, ShellError::already_exists("mv", "Documents"));
        assert_eq!(fs, before);
    }

    #[test]
    fn test_mv_missing_source() {
        let (mut state, mut fs) = setup();
        let err = run(
            Command::Mv {
                src: "ghost".into(),
                dest: "spirit".into(),
            },
            &mut state,
            &mut fs,
        )
        .unwrap_err();
        assert_eq!(err, ShellError::not_found("mv", "ghost"));
    }

    #[test]
    fn test_uname() {
        assert_eq!(execute_uname(false), "Linux");
        assert_eq!(
            execute_uname(true),
            "Linux lindroid 6.1.0-lindroid #1 SMP PREEMPT aarch64 GNU/Linux"
        );
    }

    #[test]
    fn test_export_and_unset() {
        let (mut state, mut fs) = setup();
        run(
            Command::Export(Some("EDITOR='nano'".to_string())),
            &mut state,
            &mut fs,
        )
        .unwrap();
        assert_eq!(state.environment.get("EDITOR"), Some("nano"));

        run(Command::Unset("EDITOR".to_string()), &mut state, &mut fs).unwrap();
        assert_eq!(state.environment.get("EDITOR"), None);
    }

    #[test]
    fn test_export_invalid_does_not_mutate() {
        let (mut state, mut fs) = setup();
        let before = state.environment.clone();
        let err = run(
            Command::Export(Some("NOVALUE".to_string())),
            &mut state,
            &mut fs,
        )
        .unwrap_err();
        assert!(err.to_string().contains("invalid syntax"));
        assert_eq!(state.environment, before);
    }

    #[test]
    fn test_date_is_not_empty() {
        let (mut state, mut fs) = setup();
        assert!(!run(Command::Date, &mut state, &mut fs).unwrap().is_empty());
    }
}
