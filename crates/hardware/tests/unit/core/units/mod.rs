//! Functional unit tests.

/// Arithmetic logic unit.
pub mod alu;
