//! Clear command - reset the terminal display.

use core::fmt::Write;

use crate::ShellResult;
use crate::user::{Command, CommandContext, ShellIo};

/// Erase the whole screen, then home the cursor.
const CLEAR_SEQUENCE: &str = "\x1b[2J\x1b[1;1H";

/// Clear command instance.
pub static CLEAR: ClearCommand = ClearCommand;

/// Clear command implementation.
pub struct ClearCommand;

impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn description(&self) -> &'static str {
        "Clear the terminal screen"
    }

    fn usage(&self) -> &'static str {
        "Usage: clear\n\
         \n\
         Clears the display and moves the cursor to the top-left corner."
    }

    fn execute(&self, _ctx: &CommandContext, io: &mut ShellIo) -> ShellResult<()> {
        let _ = write!(io.out, "{CLEAR_SEQUENCE}");
        Ok(())
    }
}
