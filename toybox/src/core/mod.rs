//! Deterministic, pure operations.
//!
//! Core modules must be free of I/O side effects. Randomness is injected by
//! the caller so every function here is reproducible in tests.

pub mod arith;
pub mod calc;
pub mod random;
pub mod reverse;
