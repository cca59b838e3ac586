//! Serial command console for bare-metal ARM single-board computers.
//!
//! The crate provides the interactive console of a board image: a line
//! editor fed one byte at a time from the UART, a bounded command history
//! ring, prefix autocompletion, and a static command registry dispatching
//! submitted lines to handlers.
//!
//! Hardware is reached through two narrow seams so the whole line
//! discipline runs unmodified under host tests:
//! - [`console::tty::ByteTransport`] - the serial line (PL011 on a board)
//! - [`drivers::mailbox::BoardQuery`] - the firmware property channel

#![no_std]

#[macro_use]
extern crate log;

extern crate alloc;

#[macro_use]
pub mod console;

pub mod config;
pub mod drivers;
pub mod error;
pub mod hal;
pub mod user;

pub use error::ShellResult;
