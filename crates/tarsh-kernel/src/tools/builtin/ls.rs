//! ls — List the current directory.

use crate::action_log::ActionRecord;
use crate::result::ExecResult;
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};
use crate::vfs::NO_FILES;

/// Ls tool: list direct children of the current directory.
pub struct Ls;

impl Tool for Ls {
    fn name(&self) -> &str {
        "ls"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("ls", "List the current directory")
    }

    fn execute(&self, _args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let names = ctx.vfs.list(ctx.cwd());
        let out = if names.is_empty() {
            NO_FILES.to_string()
        } else {
            names.join("\n")
        };
        ctx.record(ActionRecord::Ls { output: names });
        ExecResult::success(out)
    }
}
