//! Run statistics collection and reporting.
//!
//! This module tracks what a run did. It provides:
//! 1. **Throughput:** Instructions retired and host time.
//! 2. **Instruction mix:** Counts by category (ALU, load, stack, branch, call, output).
//! 3. **Branches:** Conditional jumps taken and not taken.
//! 4. **Stack:** Deepest stack reached.

use std::io::{self, Write};
use std::time::Instant;

use crate::common::STACK_TOP;
use crate::core::cpu::{Retired, StepOutcome};
use crate::isa::Opcode;

/// Statistics for a single run.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Number of instructions executed, `HLT` included.
    pub instructions_retired: u64,

    /// `ADD`, `MUL` and `CMP`.
    pub inst_alu: u64,
    /// `LDI`.
    pub inst_load: u64,
    /// `PUSH` and `POP`.
    pub inst_stack: u64,
    /// `JMP`, `JEQ` and `JNE`.
    pub inst_branch: u64,
    /// `CALL` and `RET`.
    pub inst_call: u64,
    /// `PRN`.
    pub inst_output: u64,
    /// `HLT`.
    pub inst_system: u64,

    /// Conditional jumps that redirected PC.
    pub branches_taken: u64,
    /// Conditional jumps that fell through.
    pub branches_not_taken: u64,

    /// Lowest stack pointer value observed.
    pub min_sp: u8,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_stack: 0,
            inst_branch: 0,
            inst_call: 0,
            inst_output: 0,
            inst_system: 0,
            branches_taken: 0,
            branches_not_taken: 0,
            min_sp: STACK_TOP,
        }
    }
}

impl SimStats {
    /// Accounts for one executed instruction.
    ///
    /// `sp` is the stack pointer after the instruction ran.
    pub fn record(&mut self, retired: &Retired, sp: u8) {
        self.instructions_retired += 1;
        let op = retired.instruction.opcode();
        match op {
            Opcode::Add | Opcode::Mul | Opcode::Cmp => self.inst_alu += 1,
            Opcode::Ldi => self.inst_load += 1,
            Opcode::Push | Opcode::Pop => self.inst_stack += 1,
            Opcode::Jmp | Opcode::Jeq | Opcode::Jne => self.inst_branch += 1,
            Opcode::Call | Opcode::Ret => self.inst_call += 1,
            Opcode::Prn => self.inst_output += 1,
            Opcode::Hlt => self.inst_system += 1,
        }
        if matches!(op, Opcode::Jeq | Opcode::Jne) {
            if retired.outcome == StepOutcome::Redirected {
                self.branches_taken += 1;
            } else {
                self.branches_not_taken += 1;
            }
        }
        self.min_sp = self.min_sp.min(sp);
    }

    /// Deepest stack reached, in bytes below [`STACK_TOP`].
    pub const fn peak_stack_depth(&self) -> u8 {
        STACK_TOP.saturating_sub(self.min_sp)
    }

    /// Writes a plain-text report to `out`.
    ///
    /// # Errors
    ///
    /// Propagates write failures.
    #[allow(clippy::cast_precision_loss)]
    pub fn write_report<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let total = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / total) * 100.0;

        writeln!(out, "==========================================================")?;
        writeln!(out, "LS-8 RUN STATISTICS")?;
        writeln!(out, "==========================================================")?;
        writeln!(out, "host_seconds             {seconds:.4} s")?;
        writeln!(out, "sim_insts                {}", self.instructions_retired)?;
        writeln!(out, "----------------------------------------------------------")?;
        writeln!(out, "INSTRUCTION MIX")?;
        for (name, count) in [
            ("op.alu", self.inst_alu),
            ("op.load", self.inst_load),
            ("op.stack", self.inst_stack),
            ("op.branch", self.inst_branch),
            ("op.call", self.inst_call),
            ("op.output", self.inst_output),
            ("op.system", self.inst_system),
        ] {
            writeln!(out, "  {name:<22} {count} ({:.2}%)", pct(count))?;
        }
        writeln!(out, "----------------------------------------------------------")?;
        writeln!(out, "BRANCHES")?;
        writeln!(out, "  branch.taken           {}", self.branches_taken)?;
        writeln!(out, "  branch.not_taken       {}", self.branches_not_taken)?;
        writeln!(out, "----------------------------------------------------------")?;
        writeln!(out, "STACK")?;
        writeln!(out, "  stack.peak_depth       {}", self.peak_stack_depth())?;
        writeln!(out, "==========================================================")?;
        Ok(())
    }

    /// Prints the report to stderr, keeping stdout for program output.
    pub fn print(&self) {
        let _ = self.write_report(&mut io::stderr().lock());
    }
}
