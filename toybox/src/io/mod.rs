//! I/O helpers for toybox commands.

pub mod config;
pub mod probe;
