//! Main Memory and Memory Access Helpers.
//!
//! This module provides the 256-byte flat memory shared by code and data, and
//! the CPU-side accessors used by instruction handlers. It performs the following:
//! 1. **Storage:** A fixed array of byte cells, zero-initialized.
//! 2. **Bounds Checking:** Addresses outside `0..256` raise an [`AccessError`].
//! 3. **Program Loading:** Copies a program image to address 0.
//! 4. **Fetch Window:** Reads the opcode and two candidate operand bytes at PC.

use super::Cpu;
use crate::common::{AccessError, Fault, Location, MEMORY_SIZE};
use crate::isa::FetchWindow;

/// Flat byte-addressed main memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    cells: [u8; MEMORY_SIZE],
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    /// Creates zeroed memory.
    pub const fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Reads the byte at `addr`.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] if `addr` is 256 or above.
    #[inline]
    pub fn read(&self, addr: usize) -> Result<u8, AccessError> {
        self.cells.get(addr).copied().ok_or(AccessError {
            location: Location::Memory,
            index: addr,
        })
    }

    /// Writes `val` to `addr`.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] if `addr` is 256 or above.
    #[inline]
    pub fn write(&mut self, addr: usize, val: u8) -> Result<(), AccessError> {
        let cell = self.cells.get_mut(addr).ok_or(AccessError {
            location: Location::Memory,
            index: addr,
        })?;
        *cell = val;
        Ok(())
    }

    /// Copies `program` into memory starting at address 0.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] naming the first address that does not fit;
    /// memory is left untouched in that case.
    pub fn load(&mut self, program: &[u8]) -> Result<(), AccessError> {
        if program.len() > MEMORY_SIZE {
            return Err(AccessError {
                location: Location::Memory,
                index: MEMORY_SIZE,
            });
        }
        self.cells[..program.len()].copy_from_slice(program);
        Ok(())
    }

    /// The whole memory as a slice.
    pub const fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}

impl Cpu {
    /// Reads a byte of memory on behalf of the instruction at `self.pc`.
    ///
    /// # Errors
    ///
    /// [`Fault::OutOfRange`] for addresses outside memory.
    pub fn ram_read(&self, addr: usize) -> Result<u8, Fault> {
        self.memory.read(addr).map_err(|e| e.at(self.pc))
    }

    /// Writes a byte of memory on behalf of the instruction at `self.pc`.
    ///
    /// # Errors
    ///
    /// [`Fault::OutOfRange`] for addresses outside memory.
    pub fn ram_write(&mut self, addr: usize, val: u8) -> Result<(), Fault> {
        let pc = self.pc;
        self.memory.write(addr, val).map_err(|e| e.at(pc))
    }

    /// Reads the opcode at PC and the two bytes after it.
    ///
    /// The operand candidates are read whether or not the opcode uses them;
    /// those past the end of memory come back as `None`.
    ///
    /// # Errors
    ///
    /// [`Fault::OutOfRange`] if PC itself is outside memory.
    pub fn fetch_window(&self) -> Result<FetchWindow, Fault> {
        let opcode = self.ram_read(self.pc)?;
        Ok(FetchWindow {
            opcode,
            operand_a: self.memory.read(self.pc + 1).ok(),
            operand_b: self.memory.read(self.pc + 2).ok(),
        })
    }
}
