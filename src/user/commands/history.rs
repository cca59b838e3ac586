//! History command - show previously submitted lines.

use core::fmt::Write;

use crate::ShellResult;
use crate::user::{Command, CommandContext, ShellIo};

/// History command instance.
pub static HISTORY_CMD: HistoryCommand = HistoryCommand;

/// History command implementation.
pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn name(&self) -> &'static str {
        "history"
    }

    fn description(&self) -> &'static str {
        "Show command history"
    }

    fn usage(&self) -> &'static str {
        "Usage: history\n\
         \n\
         Lists stored commands, oldest first. Use the Up/Down arrow keys\n\
         at the prompt to recall them."
    }

    fn execute(&self, _ctx: &CommandContext, io: &mut ShellIo) -> ShellResult<()> {
        if io.history.is_empty() {
            let _ = writeln!(io.out, "No command history.");
            return Ok(());
        }
        for (i, line) in io.history.entries().enumerate() {
            let _ = writeln!(io.out, "  {:3}  {}", i + 1, line);
        }
        Ok(())
    }
}
