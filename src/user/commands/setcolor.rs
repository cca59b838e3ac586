//! Setcolor command - terminal text and background colors.

use core::fmt::Write;

use crate::ShellResult;
use crate::user::{Command, CommandContext, ShellIo};

/// One named color with its foreground and background escape sequences.
pub struct ColorEntry {
    pub name: &'static str,
    pub fg: &'static str,
    pub bg: &'static str,
}

/// Fixed color table. Names are unique and matched case-sensitively; the
/// sequences are forwarded to the terminal verbatim.
pub static COLORS: &[ColorEntry] = &[
    ColorEntry { name: "black", fg: "\x1b[1;30m", bg: "\x1b[40m" },
    ColorEntry { name: "red", fg: "\x1b[1;31m", bg: "\x1b[41m" },
    ColorEntry { name: "green", fg: "\x1b[1;32m", bg: "\x1b[42m" },
    ColorEntry { name: "yellow", fg: "\x1b[1;33m", bg: "\x1b[43m" },
    ColorEntry { name: "blue", fg: "\x1b[1;34m", bg: "\x1b[44m" },
    ColorEntry { name: "purple", fg: "\x1b[1;35m", bg: "\x1b[45m" },
    ColorEntry { name: "cyan", fg: "\x1b[1;36m", bg: "\x1b[46m" },
    ColorEntry { name: "white", fg: "\x1b[1;37m", bg: "\x1b[47m" },
];

/// Find a color table entry by exact name.
pub fn find_color(name: &str) -> Option<&'static ColorEntry> {
    COLORS.iter().find(|c| c.name == name)
}

enum Channel {
    Text,
    Background,
}

/// Setcolor command instance.
pub static SETCOLOR: SetColorCommand = SetColorCommand;

/// Setcolor command implementation.
pub struct SetColorCommand;

impl Command for SetColorCommand {
    fn name(&self) -> &'static str {
        "setcolor"
    }

    fn description(&self) -> &'static str {
        "Set terminal text and background colors"
    }

    fn usage(&self) -> &'static str {
        "Usage: setcolor [-t <color>] [-b <color>]\n\
         \n\
         -t sets the text color, -b the background color.\n\
         Flags may repeat; each takes effect in the order given.\n\
         Colors: black, red, green, yellow, blue, purple, cyan, white."
    }

    fn execute(&self, ctx: &CommandContext, io: &mut ShellIo) -> ShellResult<()> {
        let mut tokens = ctx.args_raw.split_whitespace();
        while let Some(token) = tokens.next() {
            let channel = match token {
                "-t" => Channel::Text,
                "-b" => Channel::Background,
                // Unrecognized tokens are ignored.
                _ => continue,
            };

            let Some(name) = tokens.next() else {
                // Trailing flag without a color name.
                break;
            };

            match find_color(name) {
                Some(entry) => {
                    let seq = match channel {
                        Channel::Text => entry.fg,
                        Channel::Background => entry.bg,
                    };
                    let _ = write!(io.out, "{seq}");
                }
                // Report and keep parsing; a bad name must not stop the
                // other flag from taking effect.
                None => {
                    let _ = writeln!(io.out, "Invalid color: {name} (see 'help setcolor')");
                }
            }
        }
        Ok(())
    }
}
