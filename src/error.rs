//! Unified error type for the console.
//!
//! This module uses anyhow for flexible error handling in a no_std
//! environment. All subsystems use ShellResult<T>, an alias for
//! anyhow::Result<T>.
//!
//! Creating errors:
//! ```ignore
//! anyhow::bail!("invalid clock id: {}", id);
//! ```
//!
//! Adding context:
//! ```ignore
//! board.query(tag, &[]).context("mailbox query failed")?;
//! ```
//!
//! Every error in this crate is a reported condition, never fatal: the
//! read-classify-act loop continues after any handler failure.

/// Result type alias using anyhow::Error.
pub type ShellResult<T> = anyhow::Result<T>;
