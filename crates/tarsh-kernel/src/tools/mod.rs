//! Tool system for tarsh.
//!
//! Every command except `exit` is a tool implementing the [`Tool`] trait
//! and registered by name.
//!
//! # Architecture
//!
//! ```text
//! ToolRegistry
//! └── Builtins (ls, cd, whoami, tac)
//!
//! ExecContext
//! ├── SnapshotFs   (shared, read-only)
//! ├── Navigator    (current directory)
//! ├── ActionLog    (append-only)
//! └── IdentityProvider
//! ```

mod builtin;
mod context;
mod registry;
mod traits;

pub use builtin::{register_builtins, TAC_DIRECTORY_REFUSED};
pub use context::ExecContext;
pub use registry::ToolRegistry;
pub use traits::{ParamSchema, Tool, ToolArgs, ToolSchema};

/// Schemas of the built-in tools, sorted by name.
pub fn builtin_schemas() -> Vec<ToolSchema> {
    let mut registry = ToolRegistry::new();
    register_builtins(&mut registry);
    registry.schemas()
}
