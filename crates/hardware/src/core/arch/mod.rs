//! LS-8 architectural state.
//!
//! 1. **GPRs:** The eight byte registers, including the stack pointer.
//! 2. **Flags:** The E/G/L comparison flags.

/// Comparison flags and their update policy.
pub mod flags;

/// General-Purpose Register file implementation.
pub mod gpr;

pub use flags::Flags;
pub use gpr::Gpr;
