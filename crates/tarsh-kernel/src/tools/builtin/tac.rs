//! tac — Print files with their lines in reverse order.
//!
//! Each name is handled on its own: a missing file or a directory prints a
//! message and processing moves on to the next name. Only files that were
//! printed are recorded. Messages and file bodies stay in argument order,
//! so everything goes to `out`; the exit code is 1 if any name failed.

use crate::action_log::ActionRecord;
use crate::result::ExecResult;
use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};
use crate::vfs::Entry;

/// Printed when `tac` is pointed at a directory.
pub const TAC_DIRECTORY_REFUSED: &str = "Нельзя так делать: нельзя использовать tac для директории.";

/// Tac tool: reverse the lines of one or more files.
pub struct Tac;

impl Tool for Tac {
    fn name(&self) -> &str {
        "tac"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("tac", "Print files with lines in reverse order")
            .param(ParamSchema::required("paths", "Archive paths of the files"))
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let mut blocks = Vec::with_capacity(args.len());
        let mut failed = false;

        for name in args.iter() {
            match ctx.vfs.get(name) {
                None => {
                    failed = true;
                    blocks.push(format!("tac: {name}: No such file"));
                }
                Some(Entry::Directory) => {
                    failed = true;
                    blocks.push(TAC_DIRECTORY_REFUSED.to_string());
                }
                Some(Entry::File { content }) => {
                    let reversed: Vec<String> = split_lines(content).into_iter().rev().map(str::to_string).collect();
                    blocks.push(format!("\n--- {name} ---\n"));
                    blocks.push(reversed.join("\n"));
                    ctx.log.record(ActionRecord::Tac {
                        filename: name.to_string(),
                        output: reversed,
                    });
                }
            }
        }

        ExecResult::from_output(i64::from(failed), blocks.join("\n"), "")
    }
}

/// Split text into lines on every line-boundary character.
///
/// `\r\n` counts as a single break, and a trailing break does not produce
/// an empty final line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' && chars.next_if(|&(_, next)| next == '\n').is_some() {
            start += 1;
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}
