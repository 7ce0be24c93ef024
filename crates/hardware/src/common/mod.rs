//! Common types and constants shared across the machine.
//!
//! 1. **Constants:** Memory size, register count, stack pointer convention.
//! 2. **Error Handling:** Runtime faults and accessor range errors.

/// Machine dimensions and conventions.
pub mod constants;

/// Fault and access error definitions.
pub mod error;

pub use constants::{MEMORY_SIZE, REGISTER_COUNT, SP, STACK_TOP};
pub use error::{AccessError, Fault, Location};
