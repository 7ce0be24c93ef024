//! Execution units.

/// Arithmetic Logic Unit for byte operations.
pub mod alu;
