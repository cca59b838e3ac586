//! Hardware abstraction primitives.

pub mod spin;

pub use spin::Mutex;
