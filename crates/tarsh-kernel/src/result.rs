//! ExecResult — the structured result of every tool execution.

/// The result of executing one command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExecResult {
    /// Exit code. 0 means success.
    pub code: i64,
    /// Text shown to the user.
    pub out: String,
    /// Error text shown to the user.
    pub err: String,
}

impl ExecResult {
    /// Create a successful result with output.
    pub fn success(out: impl Into<String>) -> Self {
        Self {
            code: 0,
            out: out.into(),
            err: String::new(),
        }
    }

    /// Create a failed result with an error message.
    pub fn failure(code: i64, err: impl Into<String>) -> Self {
        Self {
            code,
            out: String::new(),
            err: err.into(),
        }
    }

    /// Create a result from raw output streams.
    pub fn from_output(code: i64, out: impl Into<String>, err: impl Into<String>) -> Self {
        Self {
            code,
            out: out.into(),
            err: err.into(),
        }
    }

    /// True if the command succeeded (exit code 0).
    pub fn ok(&self) -> bool {
        self.code == 0
    }

    /// Everything the user should see, or `None` when the command was silent.
    pub fn display(&self) -> Option<String> {
        match (self.out.is_empty(), self.err.is_empty()) {
            (true, true) => None,
            (false, true) => Some(self.out.clone()),
            (true, false) => Some(self.err.clone()),
            (false, false) => Some(format!("{}\n{}", self.out, self.err)),
        }
    }
}
