//! Built-in tools for tarsh.

mod cd;
mod ls;
mod tac;
mod whoami;

use super::ToolRegistry;

pub use tac::TAC_DIRECTORY_REFUSED;

/// Register all built-in tools with the registry.
pub fn register_builtins(registry: &mut ToolRegistry) {
    registry.register(cd::Cd);
    registry.register(ls::Ls);
    registry.register(tac::Tac);
    registry.register(whoami::Whoami);
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use crate::identity::StaticIdentity;
    use crate::tools::ExecContext;
    use crate::vfs::{Entry, SnapshotFs};

    /// The fixture used across builtin tests.
    pub fn make_ctx() -> ExecContext {
        let vfs = SnapshotFs::from_iter([
            ("file1.txt", Entry::file("Hello, World!\n")),
            ("dir1", Entry::Directory),
            ("dir1/file2.txt", Entry::file("Content of file2.txt\n")),
            ("lines.txt", Entry::file("A\nB\nC\n")),
        ]);
        ExecContext::new(Arc::new(vfs), Arc::new(StaticIdentity::new("testuser")))
    }
}
