//! Execution context for tools.

use std::sync::Arc;

use crate::action_log::{ActionLog, ActionRecord};
use crate::identity::IdentityProvider;
use crate::navigator::Navigator;
use crate::vfs::SnapshotFs;

/// Everything a tool may read or change during a session.
#[derive(Debug)]
pub struct ExecContext {
    /// The snapshot, shared read-only.
    pub vfs: Arc<SnapshotFs>,
    /// Current directory.
    pub nav: Navigator,
    /// Actions recorded so far.
    pub log: ActionLog,
    /// Source of the user name for `whoami`.
    pub identity: Arc<dyn IdentityProvider>,
}

impl ExecContext {
    /// Create a context at the root with an empty log.
    pub fn new(vfs: Arc<SnapshotFs>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            vfs,
            nav: Navigator::new(),
            log: ActionLog::new(),
            identity,
        }
    }

    /// Current working directory.
    pub fn cwd(&self) -> &str {
        self.nav.cwd()
    }

    /// Append to the action log.
    pub fn record(&mut self, record: ActionRecord) {
        self.log.record(record);
    }
}
