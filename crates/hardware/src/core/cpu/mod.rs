//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which owns the entire machine
//! state. It coordinates the following:
//! 1. **State Management:** Registers, program counter, flags and memory.
//! 2. **Execution:** The fetch-decode-execute loop (see [`execution`]).
//! 3. **Memory:** Bounds-checked memory access (see [`memory`]).
//! 4. **Stack:** Push/pop discipline over memory through `R7` (see [`stack`]).

/// Instruction execution and the dispatch loop.
pub mod execution;

/// Main memory and memory access helpers.
pub mod memory;

/// Stack push/pop helpers.
pub mod stack;

use crate::common::{AccessError, Fault};
use crate::config::{FlagPolicy, MachineConfig};
use crate::core::arch::{Flags, Gpr};

pub use execution::{Retired, StepOutcome};
pub use memory::Memory;

/// The LS-8 machine.
///
/// Construct with [`Cpu::new`], place a program with [`Cpu::load_program`],
/// then drive it with [`Cpu::step`] or [`Cpu::run`].
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General-purpose registers; `R7` is the stack pointer.
    pub regs: Gpr,
    /// Program Counter.
    pub pc: usize,
    /// Comparison flags.
    pub flags: Flags,
    /// Main memory (code and data).
    pub memory: Memory,
    /// Flag update rule for `CMP`.
    pub flag_policy: FlagPolicy,
    /// Check pushes and pops against the stack bounds.
    pub stack_checks: bool,
    /// Explicit stack floor; the program length is used when `None`.
    pub stack_limit: Option<u8>,
    /// Length of the loaded program image.
    pub program_len: usize,
    /// Set once `HLT` has executed.
    pub halted: bool,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new(&MachineConfig::default())
    }
}

impl Cpu {
    /// Creates a machine in its power-on state: zeroed memory and registers,
    /// SP at the stack top, PC at 0, flags clear.
    pub fn new(config: &MachineConfig) -> Self {
        Self {
            regs: Gpr::new(),
            pc: 0,
            flags: Flags::default(),
            memory: Memory::new(),
            flag_policy: config.flag_policy,
            stack_checks: config.stack_checks,
            stack_limit: config.stack_limit,
            program_len: 0,
            halted: false,
        }
    }

    /// Copies a program image into memory at address 0.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] if the image is larger than memory.
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), AccessError> {
        self.memory.load(program)?;
        self.program_len = program.len();
        tracing::debug!(bytes = program.len(), "program loaded");
        Ok(())
    }

    /// Reads a register on behalf of the instruction at PC.
    ///
    /// # Errors
    ///
    /// [`Fault::OutOfRange`] if `idx` is not a register.
    pub fn read_reg(&self, idx: u8) -> Result<u8, Fault> {
        self.regs.read(usize::from(idx)).map_err(|e| e.at(self.pc))
    }

    /// Writes a register on behalf of the instruction at PC.
    ///
    /// # Errors
    ///
    /// [`Fault::OutOfRange`] if `idx` is not a register.
    pub fn write_reg(&mut self, idx: u8, val: u8) -> Result<(), Fault> {
        let pc = self.pc;
        self.regs.write(usize::from(idx), val).map_err(|e| e.at(pc))
    }
}
