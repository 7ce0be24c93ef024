//! Comparison flags.
//!
//! `CMP` is the only writer and `JEQ`/`JNE` the only readers. The three flags
//! are independent booleans; whether a compare clears the non-matching ones is
//! decided by [`FlagPolicy`].

use std::cmp::Ordering;

use crate::config::FlagPolicy;

/// Bit of the Equal flag in the packed `FL` byte.
pub const FL_EQUAL: u8 = 0b0000_0001;
/// Bit of the Greater flag in the packed `FL` byte.
pub const FL_GREATER: u8 = 0b0000_0010;
/// Bit of the Less flag in the packed `FL` byte.
pub const FL_LESS: u8 = 0b0000_0100;

/// The E, G and L flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    /// Operands compared equal.
    pub equal: bool,
    /// First operand was greater.
    pub greater: bool,
    /// First operand was less.
    pub less: bool,
}

impl Flags {
    /// Records the outcome of a comparison of `a` against `b`.
    pub const fn apply(&mut self, ordering: Ordering, policy: FlagPolicy) {
        if matches!(policy, FlagPolicy::Reset) {
            *self = Self {
                equal: false,
                greater: false,
                less: false,
            };
        }
        match ordering {
            Ordering::Equal => self.equal = true,
            Ordering::Greater => self.greater = true,
            Ordering::Less => self.less = true,
        }
    }

    /// Packs the flags as `00000LGE`.
    pub const fn bits(self) -> u8 {
        let mut fl = 0;
        if self.equal {
            fl |= FL_EQUAL;
        }
        if self.greater {
            fl |= FL_GREATER;
        }
        if self.less {
            fl |= FL_LESS;
        }
        fl
    }
}
