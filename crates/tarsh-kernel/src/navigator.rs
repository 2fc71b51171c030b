//! Current-directory state and `cd` resolution.
//!
//! Targets are matched as literal VFS keys. `cd dir1/sub` works when the
//! archive contains `dir1/sub`; `cd sub` from inside `dir1` does not, since
//! nothing is joined onto the current directory.

use thiserror::Error;

use crate::vfs::SnapshotFs;

/// The root directory.
pub const ROOT: &str = "/";

/// Parent-directory target.
pub const PARENT: &str = "..";

/// Reasons a directory change is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("Находитесь в корневой директории, нельзя подняться выше.")]
    AboveRoot,

    #[error("cd: no such file or directory: {0}")]
    NotFound(String),
}

/// Owns the session's current directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    cwd: String,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Start at the root.
    pub fn new() -> Self {
        Self {
            cwd: ROOT.to_string(),
        }
    }

    /// Start at an arbitrary directory.
    pub fn at(cwd: impl Into<String>) -> Self {
        Self { cwd: cwd.into() }
    }

    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    pub fn is_root(&self) -> bool {
        self.cwd == ROOT
    }

    /// Change directory.
    ///
    /// Returns the path to record for the move. The state is untouched on
    /// error.
    pub fn change(&mut self, target: &str, vfs: &SnapshotFs) -> Result<String, NavError> {
        match target {
            "" | ROOT => {
                self.cwd = ROOT.to_string();
                Ok(self.cwd.clone())
            }
            PARENT => {
                if self.is_root() {
                    return Err(NavError::AboveRoot);
                }
                let trimmed = self.cwd.trim_end_matches('/');
                let parent = trimmed.rfind('/').map_or("", |i| &trimmed[..i]);
                self.cwd = if parent.is_empty() {
                    ROOT.to_string()
                } else {
                    parent.to_string()
                };
                Ok(self.cwd.clone())
            }
            _ if vfs.contains(target) => {
                self.cwd = target.to_string();
                Ok(self.cwd.clone())
            }
            _ => Err(NavError::NotFound(target.to_string())),
        }
    }
}
