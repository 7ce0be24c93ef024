//! CPU core component tests.



/// Arithmetic logic unit.
pub mod units;
