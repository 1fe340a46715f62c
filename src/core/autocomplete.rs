//! Tab completion for command names and entry names.
//!
//! Only the last word of the input is completed. As the first word it is a
//! command name; after `cd`, `ls` or `mkdir` it is a directory, and after
//! `cat`, `rm`, `touch` or `mv` any entry. Entries come from the working
//! directory or from an absolute directory prefix (`/usr/b`). A relative
//! prefix containing `/` never completes, since the shell cannot resolve it.

use crate::core::path::split_absolute;
use crate::core::{Command, VirtualFs};

/// Result of an autocomplete attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum AutocompleteResult {
    /// The completed input line.
    Single(String),
    /// Input extended to the common prefix, and every candidate.
    Multiple(String, Vec<String>),
    None,
}

struct Candidate {
    name: String,
    is_dir: bool,
}

impl Candidate {
    fn display(&self) -> String {
        if self.is_dir {
            format!("{}/", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// The word being completed and what it could become.
struct Completion<'a> {
    /// Input before the last word, including the separating whitespace.
    head: &'a str,
    /// Absolute directory part of the last word (`/usr/`), or empty.
    dir_prefix: &'a str,
    /// Entry or command name typed so far.
    partial: &'a str,
    candidates: Vec<Candidate>,
}

impl<'a> Completion<'a> {
    fn new(input: &'a str, cwd: &[String], fs: &VirtualFs) -> Option<Self> {
        let input = input.trim_start();
        if input.is_empty() {
            return None;
        }

        let Some((idx, sep)) = input.char_indices().rev().find(|(_, c)| c.is_whitespace())
        else {
            let candidates = Command::names()
                .iter()
                .map(|name| Candidate {
                    name: name.to_string(),
                    is_dir: false,
                })
                .collect();
            return Some(Self {
                head: "",
                dir_prefix: "",
                partial: input,
                candidates,
            });
        };

        let (head, word) = input.split_at(idx + sep.len_utf8());
        let dirs_only = match head.split_whitespace().next()?.to_lowercase().as_str() {
            "cd" | "ls" | "mkdir" => true,
            "cat" | "rm" | "touch" | "mv" => false,
            _ => return None,
        };

        let (dir_prefix, partial, dir) = match word.rfind('/') {
            None => ("", word, cwd.to_vec()),
            Some(i) if word.starts_with('/') => {
                (&word[..=i], &word[i + 1..], split_absolute(&word[..i]))
            }
            Some(_) => return None,
        };

        let candidates = fs
            .list_dir(&dir)?
            .into_iter()
            .filter(|entry| entry.is_dir || !dirs_only)
            .map(|entry| Candidate {
                name: entry.name,
                is_dir: entry.is_dir,
            })
            .collect();

        Some(Self {
            head,
            dir_prefix,
            partial,
            candidates,
        })
    }

    /// Candidates extending the partial word, case-insensitively.
    fn matches(&self) -> Vec<&Candidate> {
        let partial = self.partial.to_lowercase();
        self.candidates
            .iter()
            .filter(|c| c.name.to_lowercase().starts_with(&partial))
            .collect()
    }
}

/// Complete the input on Tab.
pub fn autocomplete(input: &str, cwd: &[String], fs: &VirtualFs) -> AutocompleteResult {
    let Some(completion) = Completion::new(input, cwd, fs) else {
        return AutocompleteResult::None;
    };

    match completion.matches().as_slice() {
        [] => AutocompleteResult::None,
        [only] => AutocompleteResult::Single(format!(
            "{}{}{}{}",
            completion.head,
            completion.dir_prefix,
            only.name,
            if only.is_dir { "/" } else { " " }
        )),
        many => {
            let names: Vec<&str> = many.iter().map(|c| c.name.as_str()).collect();
            AutocompleteResult::Multiple(
                format!(
                    "{}{}{}",
                    completion.head,
                    completion.dir_prefix,
                    common_prefix(&names)
                ),
                many.iter().map(|c| c.display()).collect(),
            )
        }
    }
}

/// Ghost text: the rest of the first candidate that extends the input.
pub fn get_hint(input: &str, cwd: &[String], fs: &VirtualFs) -> Option<String> {
    let completion = Completion::new(input, cwd, fs)?;
    let partial = completion.partial.to_lowercase();

    completion
        .matches()
        .into_iter()
        .filter(|c| c.name.to_lowercase() != partial)
        .find_map(|c| c.display().get(completion.partial.len()..).map(str::to_string))
}

/// Longest case-insensitive common prefix, spelled as in the first string.
fn common_prefix(strings: &[&str]) -> String {
    let Some((first, rest)) = strings.split_first() else {
        return String::new();
    };

    let len = rest.iter().fold(first.chars().count(), |len, s| {
        first
            .chars()
            .zip(s.chars())
            .take(len)
            .take_while(|(a, b)| a.to_lowercase().eq(b.to_lowercase()))
            .count()
    });

    first.chars().take(len).collect()
}
