//! LS-8 General-Purpose Register File.
//!
//! This module implements the eight byte-wide registers `R0`-`R7`. It performs
//! the following:
//! 1. **Storage:** Maintains 8 unsigned byte registers.
//! 2. **Bounds Checking:** Rejects register indices outside `0..8` with an
//!    [`AccessError`] instead of panicking.
//! 3. **Stack Pointer:** Initializes `R7` to the empty-stack top.

use crate::common::{AccessError, Location, REGISTER_COUNT, SP, STACK_TOP};

/// General-Purpose Register file.
///
/// `R7` is the stack pointer by convention only; it can be read and written
/// like any other register.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gpr {
    regs: [u8; REGISTER_COUNT],
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new()
    }
}

impl Gpr {
    /// Creates a register file with every register zero except SP, which
    /// holds [`STACK_TOP`].
    pub const fn new() -> Self {
        let mut regs = [0; REGISTER_COUNT];
        regs[SP] = STACK_TOP;
        Self { regs }
    }

    /// Reads a register.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] if `idx` is not in `0..8`.
    #[inline]
    pub fn read(&self, idx: usize) -> Result<u8, AccessError> {
        self.regs.get(idx).copied().ok_or(AccessError {
            location: Location::Register,
            index: idx,
        })
    }

    /// Writes a register.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] if `idx` is not in `0..8`.
    #[inline]
    pub fn write(&mut self, idx: usize, val: u8) -> Result<(), AccessError> {
        let slot = self.regs.get_mut(idx).ok_or(AccessError {
            location: Location::Register,
            index: idx,
        })?;
        *slot = val;
        Ok(())
    }

    /// Current stack pointer (`R7`).
    #[inline]
    pub const fn sp(&self) -> u8 {
        self.regs[SP]
    }

    /// Sets the stack pointer (`R7`).
    #[inline]
    pub const fn set_sp(&mut self, val: u8) {
        self.regs[SP] = val;
    }

    /// All register values, `R0` first.
    pub const fn as_array(&self) -> &[u8; REGISTER_COUNT] {
        &self.regs
    }
}
