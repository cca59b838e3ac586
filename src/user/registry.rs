//! Command registry - static command registration and lookup.

use core::fmt::Write;

use crate::ShellResult;
use crate::user::command::{Command, CommandContext, ShellIo};
use crate::user::commands;

/// Static array of all registered commands.
///
/// Name uniqueness is an invariant of this table, not checked at runtime;
/// lookup walks it in order and the first match wins.
static COMMANDS: &[&dyn Command] = &[
    &commands::HELP,
    &commands::CLEAR,
    &commands::SETCOLOR,
    &commands::SHOWINFO,
    &commands::HISTORY_CMD,
];

/// Find a command by name or alias (exact, case-sensitive).
pub fn find_command(name: &str) -> Option<&'static dyn Command> {
    for cmd in COMMANDS {
        if cmd.name() == name {
            return Some(*cmd);
        }
        for alias in cmd.aliases() {
            if *alias == name {
                return Some(*cmd);
            }
        }
    }
    None
}

/// Get all registered commands, in table order.
pub fn all_commands() -> &'static [&'static dyn Command] {
    COMMANDS
}

/// Primary command names in table order, for completion.
pub fn command_names() -> impl Iterator<Item = &'static str> {
    COMMANDS.iter().map(|c| c.name())
}

/// Execute a submitted line.
///
/// Blank lines are a no-op. An unknown command is reported to the sink
/// and the read loop continues; only a handler failure surfaces as an
/// error, and that too is a reported condition, never fatal.
pub fn dispatch(line: &str, io: &mut ShellIo) -> ShellResult<()> {
    let Some(ctx) = CommandContext::parse(line) else {
        return Ok(());
    };

    match find_command(ctx.command) {
        Some(cmd) => cmd.execute(&ctx, io),
        None => {
            let _ = writeln!(io.out, "Unknown command: {}", ctx.command);
            let _ = writeln!(io.out, "Type 'help' to see available commands.");
            Ok(())
        }
    }
}
