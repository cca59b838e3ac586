//! Help command - displays available commands and their usage.

use core::fmt::Write;

use crate::ShellResult;
use crate::user::registry;
use crate::user::{Command, CommandContext, ShellIo};

/// Help command instance.
pub static HELP: HelpCommand = HelpCommand;

/// Help command implementation.
pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["?"]
    }

    fn description(&self) -> &'static str {
        "Show available commands or help for a specific command"
    }

    fn usage(&self) -> &'static str {
        "Usage: help [command]\n\
         \n\
         Without arguments: lists all available commands.\n\
         With a command name: shows detailed help for that command."
    }

    fn execute(&self, ctx: &CommandContext, io: &mut ShellIo) -> ShellResult<()> {
        if let Some(name) = ctx.args.get(0) {
            show_command_help(name, io)
        } else {
            show_all_commands(io)
        }
    }
}

fn show_command_help(name: &str, io: &mut ShellIo) -> ShellResult<()> {
    // A lookup of its own: an unknown topic is reported for the topic,
    // not for the whole registry.
    if let Some(cmd) = registry::find_command(name) {
        let _ = writeln!(io.out, "{} - {}", cmd.name(), cmd.description());

        let aliases = cmd.aliases();
        if !aliases.is_empty() {
            let _ = write!(io.out, "Aliases:");
            for alias in aliases {
                let _ = write!(io.out, " {alias}");
            }
            let _ = writeln!(io.out);
        }

        let _ = writeln!(io.out, "{}", cmd.usage());
        Ok(())
    } else {
        let _ = writeln!(io.out, "help: no such command: {name}");
        anyhow::bail!("help topic not found: {}", name)
    }
}

fn show_all_commands(io: &mut ShellIo) -> ShellResult<()> {
    let _ = writeln!(io.out, "Available commands:");
    for cmd in registry::all_commands() {
        let _ = writeln!(io.out, "  {:10} - {}", cmd.name(), cmd.description());
    }
    let _ = writeln!(io.out, "Type 'help <command>' for detailed usage.");
    Ok(())
}
