//! The Kernel — one tarsh session.
//!
//! The Kernel owns and coordinates the session's components:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                        Kernel                        │
//! │  ┌──────────────┐  ┌──────────────────────────────┐  │
//! │  │ ToolRegistry │  │ ExecContext                  │  │
//! │  │ (ls, cd,     │  │  SnapshotFs (Arc, read-only) │  │
//! │  │  whoami,tac) │  │  Navigator · ActionLog       │  │
//! │  └──────────────┘  │  IdentityProvider            │  │
//! │                    └──────────────────────────────┘  │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! A line is split on whitespace; the first token names the tool and the
//! rest are its arguments. `exit` is not a tool: it ends the session and
//! the caller is expected to call [`Kernel::shutdown`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::action_log::ActionRecord;
use crate::archive::load_archive;
use crate::identity::{HostIdentity, IdentityProvider};
use crate::result::ExecResult;
use crate::tools::{register_builtins, ExecContext, ToolArgs, ToolRegistry};
use crate::vfs::SnapshotFs;

/// The word that ends a session.
pub const EXIT: &str = "exit";

/// Configuration for kernel initialization.
#[derive(Debug, Clone)]
pub struct KernelConfig {
    /// Name of this kernel (for diagnostics).
    pub name: String,
    /// Tar archive the VFS is loaded from.
    pub archive: PathBuf,
    /// Where the action log is written at exit.
    pub log_path: PathBuf,
    /// Source of the user name for `whoami`.
    pub identity: Arc<dyn IdentityProvider>,
}

impl KernelConfig {
    /// Configuration for an archive and log destination, using the host's
    /// identity.
    pub fn new(archive: impl Into<PathBuf>, log_path: impl Into<PathBuf>) -> Self {
        Self {
            name: "default".to_string(),
            archive: archive.into(),
            log_path: log_path.into(),
            identity: Arc::new(HostIdentity),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_identity(mut self, identity: impl IdentityProvider + 'static) -> Self {
        self.identity = Arc::new(identity);
        self
    }
}

/// What the kernel did with one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Blank line.
    Empty,
    /// A tool ran.
    Ran { command: String, result: ExecResult },
    /// Unknown command, or a known one with too few arguments.
    NotFound(String),
    /// The session should end.
    Exit,
}

impl Dispatch {
    /// Text to show the user, if any.
    pub fn display(&self) -> Option<String> {
        match self {
            Dispatch::Empty | Dispatch::Exit => None,
            Dispatch::Ran { result, .. } => result.display(),
            Dispatch::NotFound(name) => Some(format!("{name}: command not found")),
        }
    }
}

/// One session over an archive snapshot.
#[derive(Debug)]
pub struct Kernel {
    name: String,
    log_path: PathBuf,
    tools: ToolRegistry,
    ctx: ExecContext,
    flushed: bool,
}

impl Kernel {
    /// Load the archive and start a session at `/`.
    pub fn new(config: KernelConfig) -> Result<Self> {
        let vfs = load_archive(&config.archive)
            .with_context(|| format!("Failed to load archive {}", config.archive.display()))?;
        Ok(Self::with_snapshot(config, vfs))
    }

    /// Start a session over an already built snapshot. `config.archive` is
    /// not read.
    pub fn with_snapshot(config: KernelConfig, vfs: SnapshotFs) -> Self {
        let mut tools = ToolRegistry::new();
        register_builtins(&mut tools);

        tracing::info!(kernel = %config.name, entries = vfs.len(), "session started");

        Self {
            name: config.name,
            log_path: config.log_path,
            tools,
            ctx: ExecContext::new(Arc::new(vfs), config.identity),
            flushed: false,
        }
    }

    pub fn cwd(&self) -> &str {
        self.ctx.cwd()
    }

    /// Actions recorded so far, in order.
    pub fn actions(&self) -> &[ActionRecord] {
        self.ctx.log.records()
    }

    /// The prompt shown before each line.
    pub fn prompt(&self) -> String {
        format!("{} $ ", self.cwd())
    }

    /// Tokenize and run one line.
    #[tracing::instrument(level = "debug", skip(self), fields(kernel = %self.name, cwd = %self.ctx.cwd()))]
    pub fn execute(&mut self, line: &str) -> Dispatch {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, rest)) = tokens.split_first() else {
            return Dispatch::Empty;
        };

        if command == EXIT {
            return Dispatch::Exit;
        }

        let Some(tool) = self.tools.get(command) else {
            tracing::debug!(command, "unknown command");
            return Dispatch::NotFound(command.to_string());
        };

        let min_args = tool.schema().min_args();
        if rest.len() < min_args {
            tracing::debug!(command, min_args, given = rest.len(), "missing arguments");
            return Dispatch::NotFound(command.to_string());
        }

        let result = tool.execute(ToolArgs::from_iter(rest.iter().copied()), &mut self.ctx);
        tracing::debug!(command, code = result.code, "command finished");

        Dispatch::Ran {
            command: command.to_string(),
            result,
        }
    }

    /// Write the action log to its destination.
    ///
    /// Only the first call writes; later calls return the same path.
    pub fn shutdown(&mut self) -> Result<&Path> {
        if !self.flushed {
            self.ctx
                .log
                .flush(&self.log_path)
                .with_context(|| format!("Failed to save action log to {}", self.log_path.display()))?;
            self.flushed = true;
            tracing::info!(kernel = %self.name, records = self.ctx.log.len(), "session ended");
        }
        Ok(&self.log_path)
    }
}
