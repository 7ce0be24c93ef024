//! Global Machine Constants.
//!
//! This module defines the fixed dimensions of the LS-8 machine. It includes:
//! 1. **Memory Constants:** Size of the flat, shared code/data memory.
//! 2. **Register Constants:** Register count and the stack pointer convention.
//! 3. **Stack Constants:** The empty-stack top address.

/// Number of addressable memory cells (addresses `0x00`-`0xFF`).
pub const MEMORY_SIZE: usize = 256;

/// Number of general-purpose registers (`R0`-`R7`).
pub const REGISTER_COUNT: usize = 8;

/// Register index reserved for the stack pointer by convention.
///
/// Nothing prevents ordinary instructions from targeting it.
pub const SP: usize = 7;

/// Initial value of the stack pointer.
///
/// Addresses `0xF4`-`0xFF` form the empty-stack region; the stack grows downward
/// from here.
pub const STACK_TOP: u8 = 0xF4;

/// Widest instruction in bytes (opcode plus two operand bytes).
pub const MAX_INSTRUCTION_WIDTH: usize = 3;
