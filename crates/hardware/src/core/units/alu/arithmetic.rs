//! ALU arithmetic operations.
//!
//! Registers are 8 bits wide; results wrap modulo 256.

/// `a + b`, wrapping.
#[inline]
pub const fn add(a: u8, b: u8) -> u8 {
    a.wrapping_add(b)
}

/// `a * b`, wrapping.
#[inline]
pub const fn mul(a: u8, b: u8) -> u8 {
    a.wrapping_mul(b)
}
