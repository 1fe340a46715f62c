use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Represents an entry in the virtual filesystem.
///
/// A file never has children and a directory never has content; the two
/// shapes are separate variants so they cannot be mixed up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FsEntry {
    Directory { children: HashMap<String, FsEntry> },
    File { content: String },
}

impl FsEntry {
    /// Create an empty directory.
    pub fn directory() -> Self {
        FsEntry::Directory {
            children: HashMap::new(),
        }
    }

    /// Create a directory populated with the given children.
    pub fn directory_with<I, S>(children: I) -> Self
    where
        I: IntoIterator<Item = (S, FsEntry)>,
        S: Into<String>,
    {
        FsEntry::Directory {
            children: children
                .into_iter()
                .map(|(name, entry)| (name.into(), entry))
                .collect(),
        }
    }

    /// Create an empty file.
    pub fn empty_file() -> Self {
        FsEntry::File {
            content: String::new(),
        }
    }

    /// Create a file with content.
    pub fn file(content: impl Into<String>) -> Self {
        FsEntry::File {
            content: content.into(),
        }
    }

    /// Check if this entry is a directory.
    pub fn is_directory(&self) -> bool {
        matches!(self, FsEntry::Directory { .. })
    }

    /// File content (files only).
    pub fn content(&self) -> Option<&str> {
        match self {
            FsEntry::File { content } => Some(content),
            FsEntry::Directory { .. } => None,
        }
    }

    /// Child mapping (directories only).
    pub fn children(&self) -> Option<&HashMap<String, FsEntry>> {
        match self {
            FsEntry::Directory { children } => Some(children),
            FsEntry::File { .. } => None,
        }
    }

    /// Mutable child mapping (directories only).
    pub fn children_mut(&mut self) -> Option<&mut HashMap<String, FsEntry>> {
        match self {
            FsEntry::Directory { children } => Some(children),
            FsEntry::File { .. } => None,
        }
    }
}

/// Directory entry returned by `list_dir`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

impl DirEntry {
    /// Listing order: directories first, then files, each group by name.
    pub fn listing_order(a: &DirEntry, b: &DirEntry) -> Ordering {
        match (a.is_dir, b.is_dir) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => a.name.cmp(&b.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, is_dir: bool) -> DirEntry {
        DirEntry {
            name: name.to_string(),
            is_dir,
        }
    }

    #[test]
    fn test_variant_accessors() {
        let dir = FsEntry::directory();
        assert!(dir.is_directory());
        assert!(dir.content().is_none());
        assert!(dir.children().is_some_and(|c| c.is_empty()));

        let file = FsEntry::file("hello");
        assert!(!file.is_directory());
        assert_eq!(file.content(), Some("hello"));
        assert!(file.children().is_none());
    }

    #[test]
    fn test_empty_file_has_empty_content() {
        assert_eq!(FsEntry::empty_file().content(), Some(""));
    }

    #[test]
    fn test_listing_order() {
        let mut entries = vec![
            entry("zeta.txt", false),
            entry("beta", true),
            entry("alpha.txt", false),
            entry("Alpha", true),
        ];
        entries.sort_by(DirEntry::listing_order);
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "beta", "alpha.txt", "zeta.txt"]);
    }

    #[test]
    fn test_serde_shape() {
        let file = FsEntry::file("x");
        let json = serde_json::to_value(&file).unwrap();
        assert_eq!(json["kind"], "file");
        assert_eq!(json["content"], "x");

        let back: FsEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, file);
    }
}
