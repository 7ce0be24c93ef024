//! ALU comparison.

use std::cmp::Ordering;

/// Compares two unsigned register values.
#[inline]
pub fn compare(a: u8, b: u8) -> Ordering {
    a.cmp(&b)
}
