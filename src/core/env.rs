//! Environment variable management.
//!
//! Variables live in the shell instance, seeded from
//! [`DEFAULT_ENV_VARS`](crate::config::DEFAULT_ENV_VARS), and are changed
//! with `export`/`unset`.

use std::collections::BTreeMap;

use crate::config::DEFAULT_ENV_VARS;
use crate::core::error::EnvironmentError;

/// Check if a variable name is valid.
///
/// Valid names must:
/// - Not be empty
/// - Start with a letter or underscore
/// - Contain only alphanumeric characters and underscores
pub fn is_valid_var_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    if !first.is_ascii_alphabetic() && first != '_' {
        return false;
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Parse a `KEY=VALUE` assignment.
///
/// Splits at the first `=` and trims both sides. One matching pair of `"` or
/// `'` around the value is removed; the value must still be non-empty after
/// that.
pub fn parse_assignment(assignment: &str) -> Result<(String, String), EnvironmentError> {
    let (key, value) = assignment
        .split_once('=')
        .ok_or(EnvironmentError::InvalidSyntax)?;
    let key = key.trim();
    let value = unquote(value.trim());

    if key.is_empty() || value.is_empty() {
        return Err(EnvironmentError::InvalidSyntax);
    }
    if !is_valid_var_name(key) {
        return Err(EnvironmentError::InvalidVariableName(key.to_string()));
    }

    Ok((key.to_string(), value.to_string()))
}

/// Strip a single surrounding pair of matching quotes.
fn unquote(value: &str) -> &str {
    ['"', '\'']
        .iter()
        .find_map(|&q| value.strip_prefix(q).and_then(|v| v.strip_suffix(q)))
        .unwrap_or(value)
}

/// Variable store, iterated in key order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    /// Environment with no variables at all.
    pub fn empty() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Set or overwrite a variable.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Remove a variable, returning its previous value.
    pub fn unset(&mut self, key: &str) -> Option<String> {
        self.vars.remove(key)
    }

    /// All variables as (key, value) pairs, sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// `KEY=VALUE` lines for `env`.
    pub fn format_env(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `declare -x` lines for `export` with no argument.
    pub fn format_export(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("declare -x {}=\"{}\"", k, v))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Environment {
    /// Environment seeded with `USER`, `HOME`, `PATH` and `SHELL`.
    fn default() -> Self {
        let mut env = Self::empty();
        for (key, value) in DEFAULT_ENV_VARS {
            env.set(*key, *value);
        }
        env
    }
}
