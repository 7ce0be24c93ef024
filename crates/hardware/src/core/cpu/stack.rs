//! Stack discipline.
//!
//! The stack lives in main memory and grows downward from [`STACK_TOP`], with
//! `R7` as the stack pointer. A push decrements SP and then stores; a pop loads
//! and then increments SP. SP arithmetic wraps modulo 256.
//!
//! Bounds are only checked when `stack_checks` is enabled. The floor is the
//! configured `stack_limit`, or the loaded program's length when unset.

use super::Cpu;
use crate::common::{Fault, STACK_TOP};

impl Cpu {
    /// Lowest address the stack may occupy under `stack_checks`.
    pub fn stack_floor(&self) -> usize {
        self.stack_limit.map_or(self.program_len, usize::from)
    }

    /// Pushes `val`.
    ///
    /// # Errors
    ///
    /// [`Fault::StackOverflow`] if stack checks are enabled and the push would
    /// move SP below the floor.
    pub fn push_byte(&mut self, val: u8) -> Result<(), Fault> {
        let addr = self.grow_stack()?;
        self.ram_write(addr, val)
    }

    /// Pops the byte at SP.
    ///
    /// # Errors
    ///
    /// [`Fault::StackUnderflow`] if stack checks are enabled and the stack is
    /// empty.
    pub fn pop_byte(&mut self) -> Result<u8, Fault> {
        let val = self.stack_top()?;
        self.shrink_stack();
        Ok(val)
    }

    /// Decrements SP and returns the address of the new top slot.
    pub(crate) fn grow_stack(&mut self) -> Result<usize, Fault> {
        let sp = self.regs.sp();
        if self.stack_checks && usize::from(sp) <= self.stack_floor() {
            return Err(Fault::StackOverflow { pc: self.pc, sp });
        }
        let sp = sp.wrapping_sub(1);
        self.regs.set_sp(sp);
        Ok(usize::from(sp))
    }

    /// Reads the byte at SP without moving it.
    pub(crate) fn stack_top(&self) -> Result<u8, Fault> {
        let sp = self.regs.sp();
        if self.stack_checks && sp >= STACK_TOP {
            return Err(Fault::StackUnderflow { pc: self.pc, sp });
        }
        self.ram_read(usize::from(sp))
    }

    /// Increments SP.
    pub(crate) const fn shrink_stack(&mut self) {
        self.regs.set_sp(self.regs.sp().wrapping_add(1));
    }
}
