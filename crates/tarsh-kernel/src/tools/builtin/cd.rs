//! cd — Change working directory.

use crate::action_log::ActionRecord;
use crate::result::ExecResult;
use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

/// Cd tool: change current working directory.
pub struct Cd;

impl Tool for Cd {
    fn name(&self) -> &str {
        "cd"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("cd", "Change current working directory").param(ParamSchema::required(
            "path",
            "Archive path of the directory, / for root, or .. for the parent",
        ))
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let target = args.get(0).unwrap_or("");

        match ctx.nav.change(target, &ctx.vfs) {
            Ok(path) => {
                ctx.record(ActionRecord::Cd { path });
                ExecResult::success("")
            }
            Err(e) => ExecResult::failure(1, e.to_string()),
        }
    }
}
