//! A handful of unrelated toy operations behind a small CLI.
//!
//! The crate keeps the same split as any other tool in this workspace:
//!
//! - **[`core`]**: Pure, deterministic operations (arithmetic, reversal, the
//!   numeric loop, random draws from a caller-supplied generator). No I/O.
//! - **[`io`]**: Side-effecting helpers (config file, best-effort file probe).
//!
//! [`report`] runs the fixed sequence and renders it for the `toybox` binary.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod report;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
