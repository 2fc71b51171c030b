//! tarsh-kernel: the core of tarsh, a read-only shell over a tar snapshot.
//!
//! This crate provides:
//!
//! - **Archive**: Loads a tar archive into an in-memory snapshot
//! - **VFS**: The flat, read-only snapshot and its directory listing
//! - **Navigator**: Current directory and `cd` resolution
//! - **Tools**: Tool trait, registry, and the `ls`, `cd`, `whoami`, `tac` builtins
//! - **Action log**: Append-only record of successful commands, saved as JSON at exit
//! - **Kernel**: Tokenizes input lines and dispatches them to tools

pub mod action_log;
pub mod archive;
pub mod identity;
pub mod kernel;
pub mod navigator;
pub mod result;
pub mod tools;
pub mod vfs;

pub use action_log::{ActionLog, ActionRecord, LogError};
pub use archive::{load_archive, load_from_reader, ArchiveError};
pub use identity::{HostIdentity, IdentityError, IdentityProvider, StaticIdentity};
pub use kernel::{Dispatch, Kernel, KernelConfig, EXIT};
pub use navigator::{NavError, Navigator};
pub use result::ExecResult;
