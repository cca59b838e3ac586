//! UART drivers.

pub mod pl011;

pub use pl011::{Pl011Transport, getchar, init_early, putchar, puts};
