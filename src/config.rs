//! Console configuration constants.
//!
//! Capacities here are policy, not mechanism: the line and history sizes
//! bound the fixed buffers in `console`, and the MMIO bases select the
//! board variant via cargo features.

/// Command line capacity in bytes, including the terminator slot.
/// The edit buffer holds at most `MAX_CMD_SIZE - 1` bytes of text.
pub const MAX_CMD_SIZE: usize = 100;

/// Number of slots in the command history ring.
pub const MAX_HISTORY: usize = 20;

/// Prompt emitted at the start of every new line.
pub const PROMPT: &str = "rshell> ";

/// Peripheral window base address.
#[cfg(feature = "rpi4")]
pub const MMIO_BASE: usize = 0xFE00_0000;
#[cfg(not(feature = "rpi4"))]
pub const MMIO_BASE: usize = 0x3F00_0000;

/// PL011 UART register block.
pub const PL011_UART_BASE: usize = MMIO_BASE + 0x0020_1000;

/// VideoCore mailbox register block.
pub const MBOX_BASE: usize = MMIO_BASE + 0x0000_B880;
