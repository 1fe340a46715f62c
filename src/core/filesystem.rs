use std::collections::HashMap;

use crate::config::{DEFAULT_USER, HOME_ROOT, HOSTNAME, README_TEXT};
use crate::core::error::PathError;
use crate::models::{DirEntry, FsEntry};

/// In-memory filesystem tree owned by a single shell.
///
/// Paths are segment sequences from the root; the root itself is an unnamed
/// directory and is addressed by the empty sequence.
///
/// # Mutation
///
/// The tree has no mutation API of its own. Callers obtain a directory's child
/// mapping with [`VirtualFs::directory_mut`] and insert or remove entries on
/// it directly, which keeps every structural change local to one mapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VirtualFs {
    /// Root directory entry containing all files
    root: FsEntry,
}

impl VirtualFs {
    /// Build the default seed layout.
    ///
    /// ```text
    /// /bin
    /// /etc/hostname
    /// /etc/os-release
    /// /home/lindroid-user/{Documents,Downloads,Pictures}/
    /// /home/lindroid-user/readme.txt
    /// /tmp
    /// /usr/bin
    /// /var/log
    /// ```
    pub fn default_layout() -> Self {
        let home = FsEntry::directory_with([
            ("Documents", FsEntry::directory()),
            ("Downloads", FsEntry::directory()),
            ("Pictures", FsEntry::directory()),
            ("readme.txt", FsEntry::file(README_TEXT)),
        ]);

        let etc = FsEntry::directory_with([
            ("hostname", FsEntry::file(format!("{}\n", HOSTNAME))),
            (
                "os-release",
                FsEntry::file("NAME=\"Lindroid\"\nID=lindroid\nPRETTY_NAME=\"Lindroid Linux\"\n"),
            ),
        ]);

        let root = FsEntry::directory_with([
            ("bin", FsEntry::directory()),
            ("etc", etc),
            (HOME_ROOT, FsEntry::directory_with([(DEFAULT_USER, home)])),
            ("tmp", FsEntry::directory()),
            (
                "usr",
                FsEntry::directory_with([("bin", FsEntry::directory())]),
            ),
            (
                "var",
                FsEntry::directory_with([("log", FsEntry::directory())]),
            ),
        ]);

        Self { root }
    }

    /// Create a filesystem with nothing but an empty root.
    pub fn empty() -> Self {
        Self {
            root: FsEntry::directory(),
        }
    }

    /// Create a filesystem from the root's children.
    pub fn from_children(children: HashMap<String, FsEntry>) -> Self {
        Self {
            root: FsEntry::Directory { children },
        }
    }

    /// Get an entry by path, explaining a miss.
    ///
    /// - `[]` returns the root directory
    /// - `["home"]` returns the home directory
    /// - A missing segment yields [`PathError::NotFound`]
    /// - A file in a non-final position yields [`PathError::NotADirectory`]
    pub fn lookup<S: AsRef<str>>(&self, path: &[S]) -> Result<&FsEntry, PathError> {
        let mut current = &self.root;

        for part in path {
            let children = current.children().ok_or(PathError::NotADirectory)?;
            current = children.get(part.as_ref()).ok_or(PathError::NotFound)?;
        }

        Ok(current)
    }

    /// Get an entry by path. Absence is a normal outcome, not a fault.
    pub fn resolve<S: AsRef<str>>(&self, path: &[S]) -> Option<&FsEntry> {
        self.lookup(path).ok()
    }

    /// Mutable child mapping of the directory at `path`.
    ///
    /// Returns `None` if the path does not resolve or names a file.
    pub fn directory_mut<S: AsRef<str>>(
        &mut self,
        path: &[S],
    ) -> Option<&mut HashMap<String, FsEntry>> {
        let mut current = &mut self.root;

        for part in path {
            current = current.children_mut()?.get_mut(part.as_ref())?;
        }

        current.children_mut()
    }

    /// List directory contents.
    ///
    /// # Returns
    /// Sorted list of entries (directories first, then files, each
    /// alphabetical), or `None` if `path` is not a directory.
    pub fn list_dir<S: AsRef<str>>(&self, path: &[S]) -> Option<Vec<DirEntry>> {
        let children = self.resolve(path)?.children()?;

        let mut items: Vec<_> = children
            .iter()
            .map(|(name, entry)| DirEntry {
                name: name.clone(),
                is_dir: entry.is_directory(),
            })
            .collect();
        items.sort_by(DirEntry::listing_order);
        Some(items)
    }

    /// Check if a path is a directory.
    pub fn is_directory<S: AsRef<str>>(&self, path: &[S]) -> bool {
        matches!(self.resolve(path), Some(FsEntry::Directory { .. }))
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::default_layout()
    }
}
