//! TTY line editor and input state machine.
//!
//! The console reads one byte at a time from the transport, classifies
//! it, and mutates the edit buffer or triggers a side effect: echo,
//! erase, autocomplete, history recall, or dispatch of the finished line.
//!
//! Architecture decisions:
//! - The session state (edit buffer, history ring, prompt flag) is one
//!   owned aggregate passed by reference through the loop - no statics,
//!   so the whole state machine runs under host tests.
//! - History recall is bound to the ANSI arrow sequences (`ESC [ A` for
//!   older, `ESC [ B` for newer), decoded by a small escape-state
//!   machine.
//! - The transport byte read is the single blocking point; everything
//!   that follows one byte runs to completion before the next read.

use core::fmt::{self, Write};

use crate::config::PROMPT;
use crate::console::completion;
use crate::console::history::History;
use crate::console::line_buffer::LineBuffer;
use crate::drivers::mailbox::BoardQuery;
use crate::user::command::ShellIo;
use crate::user::registry;

/// Byte transport the console reads from and echoes to.
///
/// Owned by the UART driver on a board; tests substitute an in-memory
/// implementation. The console never interprets transport-level framing
/// or errors.
pub trait ByteTransport {
    /// Block until one input byte is available.
    fn read_byte(&mut self) -> u8;

    /// Send one byte, best effort.
    fn write_byte(&mut self, byte: u8);
}

/// fmt adapter over a byte transport.
pub struct TransportWriter<'a, T: ByteTransport + ?Sized>(pub &'a mut T);

impl<T: ByteTransport + ?Sized> Write for TransportWriter<'_, T> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for &byte in s.as_bytes() {
            self.0.write_byte(byte);
        }
        Ok(())
    }
}

/// ANSI escape sequence state machine.
#[derive(Clone, Copy, PartialEq)]
enum EscapeState {
    Normal,
    Escape,  // Got ESC
    Bracket, // Got ESC [
}

/// Console session: edit buffer, history ring and prompt state.
pub struct Tty {
    line: LineBuffer,
    history: History,
    escape_state: EscapeState,
    needs_prompt: bool,
}

impl Tty {
    /// Create a new session, one prompt pending.
    pub const fn new() -> Self {
        Self {
            line: LineBuffer::new(),
            history: History::new(),
            escape_state: EscapeState::Normal,
            needs_prompt: true,
        }
    }

    /// Print the greeting banner. The first prompt follows separately via
    /// [`Tty::prompt_if_needed`].
    pub fn greet(&self, out: &mut dyn Write) {
        let _ = writeln!(out, "rshell {} - serial console", env!("CARGO_PKG_VERSION"));
        let _ = writeln!(out, "Type 'help' for commands.");
    }

    /// Emit the prompt if a new line is about to start. The prompt is only
    /// written on the transition to a new line, never mid-edit.
    pub fn prompt_if_needed(&mut self, out: &mut dyn Write) {
        if self.needs_prompt {
            self.needs_prompt = false;
            let _ = write!(out, "{PROMPT}");
        }
    }

    /// Current edit buffer content.
    pub fn line(&self) -> &str {
        self.line.as_str()
    }

    /// Read view of the history ring.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Feed one input byte through the state machine.
    pub fn handle_byte(&mut self, byte: u8, out: &mut dyn Write, board: &mut dyn BoardQuery) {
        match self.escape_state {
            EscapeState::Normal => self.handle_normal(byte, out, board),
            EscapeState::Escape => {
                self.escape_state = if byte == b'[' {
                    EscapeState::Bracket
                } else {
                    EscapeState::Normal
                };
            }
            EscapeState::Bracket => {
                self.escape_state = EscapeState::Normal;
                match byte {
                    b'A' => self.recall_older(out), // Up arrow
                    b'B' => self.recall_newer(out), // Down arrow
                    _ => {}
                }
            }
        }
    }

    fn handle_normal(&mut self, byte: u8, out: &mut dyn Write, board: &mut dyn BoardQuery) {
        match byte {
            // Enter
            b'\r' | b'\n' => self.submit(out, board),

            // Backspace / delete
            0x08 | 0x7F => {
                if self.line.backspace() {
                    // Move back, blank the cell, move back again.
                    let _ = write!(out, "\x08 \x08");
                }
                self.history.reset_browse();
            }

            // Tab
            b'\t' => self.autocomplete(out),

            // Escape
            0x1B => self.escape_state = EscapeState::Escape,

            // Everything else is line content. A full buffer drops the
            // byte without echo; that is backpressure, not an error.
            _ => {
                if self.line.push(byte) {
                    let _ = write!(out, "{}", byte as char);
                }
                self.history.reset_browse();
            }
        }
    }

    fn submit(&mut self, out: &mut dyn Write, board: &mut dyn BoardQuery) {
        let _ = writeln!(out);

        // The exact buffer content goes into the ring, empty lines
        // included, before the dispatcher sees it.
        self.history.record(self.line.as_str());

        let result = registry::dispatch(
            self.line.as_str(),
            &mut ShellIo {
                out,
                board,
                history: &self.history,
            },
        );
        if let Err(e) = result {
            warn!("command failed: {e:#}");
        }

        self.line.clear();
        self.needs_prompt = true;
    }

    fn autocomplete(&mut self, out: &mut dyn Write) {
        let old_len = self.line.len();
        if let Some(name) = completion::first_match(self.line.as_str(), registry::command_names()) {
            redraw_line(&mut self.line, old_len, name, out);
        }
    }

    fn recall_older(&mut self, out: &mut dyn Write) {
        let old_len = self.line.len();
        if let Some(prev) = self.history.recall_older() {
            redraw_line(&mut self.line, old_len, prev, out);
        }
    }

    fn recall_newer(&mut self, out: &mut dyn Write) {
        if !self.history.is_browsing() {
            // Already at the newest position; bounds are a no-op.
            return;
        }
        let old_len = self.line.len();
        match self.history.recall_newer() {
            Some(next) => redraw_line(&mut self.line, old_len, next, out),
            // Stepped past the newest entry: back to an empty line.
            None => redraw_line(&mut self.line, old_len, "", out),
        }
    }
}

/// Erase the displayed line and repaint it with new content. A full
/// repaint, not an incremental echo: the previous content may have been
/// longer or shorter.
fn redraw_line(line: &mut LineBuffer, old_len: usize, text: &str, out: &mut dyn Write) {
    for _ in 0..old_len {
        let _ = write!(out, "\x08");
    }
    for _ in 0..old_len {
        let _ = write!(out, " ");
    }
    for _ in 0..old_len {
        let _ = write!(out, "\x08");
    }
    line.set(text);
    let _ = write!(out, "{}", line.as_str());
}

/// Outer console loop: banner, then fetch-classify-act forever.
///
/// The byte read is the sole blocking point. Once a byte is read its full
/// handling, handler dispatch and any board query included, runs to
/// completion before the next read.
pub fn run<T: ByteTransport>(transport: &mut T, board: &mut dyn BoardQuery) -> ! {
    let mut tty = Tty::new();
    tty.greet(&mut TransportWriter(&mut *transport));

    loop {
        tty.prompt_if_needed(&mut TransportWriter(&mut *transport));
        let byte = transport.read_byte();
        tty.handle_byte(byte, &mut TransportWriter(&mut *transport), board);
    }
}
