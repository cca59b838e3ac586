//! Console module - line discipline, print and logging facilities.

#[macro_use]
pub mod print;

pub mod completion;
pub mod history;
pub mod line_buffer;
pub mod logger;
pub mod tty;

pub use logger::init as init_logger;
pub use tty::{ByteTransport, Tty, run};
