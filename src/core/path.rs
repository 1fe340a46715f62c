//! Path resolution against the working directory.
//!
//! A path argument is turned into an absolute segment sequence and then
//! looked up in the tree:
//!
//! - `..` pops one segment (a no-op at the root)
//! - `/` is the root
//! - `/a/b` is absolute; empty segments are discarded
//! - anything else is a single child name of the working directory
//!
//! Relative paths with more than one segment (`a/b`) are not split: the
//! whole argument is taken as one child name and will normally not exist.

use crate::config::{DEFAULT_USER, HOME_ROOT};
use crate::core::VirtualFs;
use crate::core::error::PathError;
use crate::models::FsEntry;

/// Home directory of the default user.
pub fn home_path() -> Vec<String> {
    vec![HOME_ROOT.to_string(), DEFAULT_USER.to_string()]
}

/// Split an absolute path into segments, dropping empty ones.
pub fn split_absolute(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Render segments as an absolute path (`/` at the root).
pub fn display_path<S: AsRef<str>>(segments: &[S]) -> String {
    if segments.is_empty() {
        return "/".to_string();
    }

    segments.iter().fold(String::new(), |mut out, s| {
        out.push('/');
        out.push_str(s.as_ref());
        out
    })
}

/// The parent of `cwd`. The root is its own parent.
pub fn parent_path(cwd: &[String]) -> Vec<String> {
    match cwd.split_last() {
        Some((_, parent)) => parent.to_vec(),
        None => Vec::new(),
    }
}

/// Resolve a path argument to absolute segments without touching the tree.
pub fn resolve_target(cwd: &[String], arg: &str) -> Vec<String> {
    match arg {
        ".." => parent_path(cwd),
        "/" => Vec::new(),
        _ if arg.starts_with('/') => split_absolute(arg),
        _ => {
            let mut target = cwd.to_vec();
            target.push(arg.to_string());
            target
        }
    }
}

/// Resolve `arg` and look it up.
///
/// Returns the absolute segments together with the node.
pub fn locate<'a>(
    fs: &'a VirtualFs,
    cwd: &[String],
    arg: &str,
) -> Result<(Vec<String>, &'a FsEntry), PathError> {
    let target = resolve_target(cwd, arg);
    let entry = fs.lookup(&target).inspect_err(|err| {
        tracing::trace!(path = %display_path(&target), %err, "path did not resolve");
    })?;
    Ok((target, entry))
}

/// Resolve `arg` to a directory.
///
/// A target that exists but is a file yields [`PathError::NotADirectory`].
pub fn locate_directory(
    fs: &VirtualFs,
    cwd: &[String],
    arg: &str,
) -> Result<Vec<String>, PathError> {
    match locate(fs, cwd, arg)? {
        (target, FsEntry::Directory { .. }) => Ok(target),
        (_, FsEntry::File { .. }) => Err(PathError::NotADirectory),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segs(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_display_path() {
        assert_eq!(display_path::<String>(&[]), "/");
        assert_eq!(display_path(&["home"]), "/home");
        assert_eq!(display_path(&home_path()), "/home/lindroid-user");
    }

    #[test]
    fn test_split_absolute() {
        assert_eq!(split_absolute("/usr//bin/"), segs(&["usr", "bin"]));
        assert_eq!(split_absolute("/"), Vec::<String>::new());
    }

    #[test]
    fn test_parent_path() {
        assert_eq!(parent_path(&segs(&["home", "lindroid-user"])), segs(&["home"]));
        assert_eq!(parent_path(&segs(&["home"])), Vec::<String>::new());
        assert_eq!(parent_path(&[]), Vec::<String>::new());
    }

    #[test]
    fn test_resolve_target() {
        let cwd = home_path();

        assert_eq!(resolve_target(&cwd, ".."), segs(&["home"]));
        assert_eq!(resolve_target(&cwd, "/"), Vec::<String>::new());
        assert_eq!(resolve_target(&cwd, "/etc"), segs(&["etc"]));
        assert_eq!(
            resolve_target(&cwd, "Documents"),
            segs(&["home", "lindroid-user", "Documents"])
        );
    }

    #[test]
    fn test_relative_multi_segment_is_one_name() {
        let cwd = segs(&["home"]);
        assert_eq!(
            resolve_target(&cwd, "lindroid-user/Documents"),
            segs(&["home", "lindroid-user/Documents"])
        );

        let fs = VirtualFs::default_layout();
        assert_eq!(
            locate_directory(&fs, &cwd, "lindroid-user/Documents"),
            Err(PathError::NotFound)
        );
    }

    #[test]
    fn test_locate_directory() {
        let fs = VirtualFs::default_layout();
        let cwd = home_path();

        assert_eq!(
            locate_directory(&fs, &cwd, "Documents"),
            Ok(segs(&["home", "lindroid-user", "Documents"]))
        );
        assert_eq!(
            locate_directory(&fs, &cwd, "readme.txt"),
            Err(PathError::NotADirectory)
        );
        assert_eq!(
            locate_directory(&fs, &cwd, "/etc/hostname/x"),
            Err(PathError::NotADirectory)
        );
        assert_eq!(locate_directory(&fs, &cwd, "nope"), Err(PathError::NotFound));
        assert_eq!(locate_directory(&fs, &[], ".."), Ok(vec![]));
    }
}
