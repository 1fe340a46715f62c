//! Caller-owned session transcript.
//!
//! The shell keeps no history of its own. A caller that wants to restore a
//! session records every submitted command here and later replays the list
//! through a fresh [`ShellEmulator`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::ShellEmulator;

/// One submitted command and what it printed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub command: String,
    pub output: String,
    pub timestamp: DateTime<Utc>,
}

/// Ordered list of submitted commands.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub entries: Vec<HistoryEntry>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command and its output, stamped with the current time.
    pub fn record(&mut self, command: impl Into<String>, output: impl Into<String>) {
        self.entries.push(HistoryEntry {
            command: command.into(),
            output: output.into(),
            timestamp: Utc::now(),
        });
    }

    /// Submitted commands, oldest first.
    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.command.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rebuild the shell state this session ended in.
    pub fn replay(&self) -> ShellEmulator {
        ShellEmulator::replay(self.commands())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_order() {
        let mut session = Session::new();
        session.record("pwd", "/home/lindroid-user");
        session.record("cd /", "");

        assert_eq!(session.len(), 2);
        let commands: Vec<_> = session.commands().collect();
        assert_eq!(commands, vec!["pwd", "cd /"]);
        assert!(session.entries[0].timestamp <= session.entries[1].timestamp);
    }

    #[test]
    fn test_replay_restores_working_directory() {
        let mut shell = ShellEmulator::new();
        let mut session = Session::new();
        for cmd in ["mkdir projects", "cd projects", "export EDITOR=vim"] {
            let output = shell.execute_command(cmd);
            session.record(cmd, output);
        }

        let restored = session.replay();
        assert_eq!(restored.current_path(), shell.current_path());
        assert_eq!(restored.environment().get("EDITOR"), Some("vim"));
    }

    #[test]
    fn test_json_round_trip() {
        let mut session = Session::new();
        session.record("echo hi", "hi");

        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }

    #[test]
    fn test_empty_session_replays_to_default() {
        let shell = Session::new().replay();
        assert_eq!(shell.current_path(), "/home/lindroid-user");
    }
}
