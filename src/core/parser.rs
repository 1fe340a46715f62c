//! Command line tokenizer.
//!
//! Input is split on runs of whitespace into a command name and arguments.
//! There is no quoting, expansion or piping: `echo "a   b"` yields the
//! arguments `"a` and `b"`.
//!
//! NUL characters are dropped from every word so that no argument can
//! reproduce the NUL-wrapped clear sentinel. Everything else is kept verbatim.

/// A single tokenized command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<String>,
}

/// Tokenize one raw command line.
///
/// Returns `None` for blank input.
pub fn parse_input(input: &str) -> Option<ParsedCommand> {
    let words: Vec<String> = input
        .split_whitespace()
        .map(|w| w.replace('\0', ""))
        .filter(|w| !w.is_empty())
        .collect();

    words_to_command(words)
}

fn words_to_command(words: Vec<String>) -> Option<ParsedCommand> {
    let mut words = words.into_iter();
    let name = words.next()?;
    Some(ParsedCommand {
        name,
        args: words.collect(),
    })
}
