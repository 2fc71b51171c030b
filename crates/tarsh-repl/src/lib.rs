//! tarsh REPL — interactive front end for a tarsh session.
//!
//! The REPL prompts with the current directory, hands each line to the
//! kernel, and prints what comes back. On `exit` (or end of input) it saves
//! the action log, prints `Exiting...`, and returns.

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use tarsh_kernel::{Dispatch, Kernel, KernelConfig, EXIT};

/// Printed once the log has been saved.
pub const EXIT_MESSAGE: &str = "Exiting...";

/// Result of processing one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Keep reading, printing the output if there is any.
    Continue(Option<String>),
    /// The log has been saved; print the message and stop.
    Exit(String),
}

/// REPL state.
pub struct Repl {
    kernel: Kernel,
}

impl Repl {
    /// Load the archive and create a REPL over it.
    pub fn new(config: KernelConfig) -> Result<Self> {
        let kernel = Kernel::new(config).context("Failed to create kernel")?;
        Ok(Self::with_kernel(kernel))
    }

    /// Create a REPL over an existing kernel.
    pub fn with_kernel(kernel: Kernel) -> Self {
        Self { kernel }
    }

    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    pub fn prompt(&self) -> String {
        self.kernel.prompt()
    }

    /// Process a single line of input.
    ///
    /// Errors only when the action log cannot be saved on exit.
    pub fn process_line(&mut self, line: &str) -> Result<LineOutcome> {
        match self.kernel.execute(line) {
            Dispatch::Exit => {
                self.kernel.shutdown()?;
                Ok(LineOutcome::Exit(EXIT_MESSAGE.to_string()))
            }
            other => Ok(LineOutcome::Continue(other.display())),
        }
    }
}

/// Run the REPL until `exit` or end of input.
pub fn run(config: KernelConfig) -> Result<()> {
    let mut repl = Repl::new(config)?;

    let mut rl: Editor<(), DefaultHistory> =
        Editor::new().context("Failed to create editor")?;

    loop {
        let prompt = repl.prompt();

        let outcome = match rl.readline(&prompt) {
            Ok(line) => {
                if !line.trim().is_empty()
                    && let Err(e) = rl.add_history_entry(line.as_str())
                {
                    tracing::warn!("Failed to add history entry: {}", e);
                }
                repl.process_line(&line)?
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                // End of input still saves the log.
                repl.process_line(EXIT)?
            }
            Err(err) => return Err(err).context("Failed to read input"),
        };

        match outcome {
            LineOutcome::Continue(Some(output)) => println!("{}", output),
            LineOutcome::Continue(None) => {}
            LineOutcome::Exit(message) => {
                println!("{}", message);
                return Ok(());
            }
        }
    }
}
