//! Append-only record of what a session did.
//!
//! Every tool that succeeds appends one [`ActionRecord`]. Failures are
//! never recorded. The log lives in memory until the session exits, when
//! it is written to disk as a single JSON array in one write.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One executed command, shaped by the command that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum ActionRecord {
    Ls { output: Vec<String> },
    Cd { path: String },
    Whoami { output: String },
    Tac { filename: String, output: Vec<String> },
}

impl ActionRecord {
    /// The command name as it appears in the log.
    pub fn command(&self) -> &'static str {
        match self {
            ActionRecord::Ls { .. } => "ls",
            ActionRecord::Cd { .. } => "cd",
            ActionRecord::Whoami { .. } => "whoami",
            ActionRecord::Tac { .. } => "tac",
        }
    }
}

/// Errors while persisting the log.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("cannot serialize action log: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("cannot write action log to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Ordered, append-only action log.
#[derive(Debug, Clone, Default)]
pub struct ActionLog {
    records: Vec<ActionRecord>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn record(&mut self, record: ActionRecord) {
        tracing::debug!(command = record.command(), seq = self.records.len(), "action recorded");
        self.records.push(record);
    }

    pub fn records(&self) -> &[ActionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serialize the whole log as a JSON array.
    pub fn to_json(&self) -> Result<String, LogError> {
        Ok(serde_json::to_string(&self.records)?)
    }

    /// Write the log to `path`, replacing any previous content.
    #[tracing::instrument(level = "info", skip(self, path), fields(path = %path.display(), records = self.records.len()), err)]
    pub fn flush(&self, path: &Path) -> Result<(), LogError> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|source| LogError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_shapes() {
        let mut log = ActionLog::new();
        log.record(ActionRecord::Ls {
            output: vec!["file1.txt".into(), "dir1".into()],
        });
        log.record(ActionRecord::Cd { path: "dir1".into() });
        log.record(ActionRecord::Whoami {
            output: "testuser".into(),
        });
        log.record(ActionRecord::Tac {
            filename: "file1.txt".into(),
            output: vec!["Hello, World!".into()],
        });

        assert_eq!(
            log.to_json().unwrap(),
            concat!(
                r#"[{"command":"ls","output":["file1.txt","dir1"]},"#,
                r#"{"command":"cd","path":"dir1"},"#,
                r#"{"command":"whoami","output":"testuser"},"#,
                r#"{"command":"tac","filename":"file1.txt","output":["Hello, World!"]}]"#,
            )
        );
    }

    #[test]
    fn test_empty_log_is_empty_array() {
        assert_eq!(ActionLog::new().to_json().unwrap(), "[]");
    }

    #[test]
    fn test_flush_round_trips_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.json");

        let mut log = ActionLog::new();
        log.record(ActionRecord::Cd { path: "/".into() });
        log.record(ActionRecord::Ls { output: vec![] });
        log.flush(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<ActionRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, log.records());
    }

    #[test]
    fn test_flush_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("log.json");

        let err = ActionLog::new().flush(&path).unwrap_err();
        assert!(matches!(err, LogError::Write { .. }));
    }

    #[test]
    fn test_command_names() {
        assert_eq!(ActionRecord::Cd { path: "/".into() }.command(), "cd");
        assert_eq!(ActionRecord::Ls { output: vec![] }.command(), "ls");
    }
}
