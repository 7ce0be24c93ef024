//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle. It performs the following:
//! 1. **Fetch:** Reads the opcode and two candidate operand bytes at PC.
//! 2. **Decode:** Maps the window to an [`Instruction`], failing on unknown opcodes.
//! 3. **Execute:** Runs the handler and advances or redirects PC.
//! 4. **Observability:** Trace lines and state dumps for debugging.
//!
//! `HLT` ends the loop by returning [`StepOutcome::Halted`]; the host process is
//! never terminated from here.

use std::io::{self, Write};

use super::Cpu;
use crate::common::{Fault, Location};
use crate::core::units::alu::{Alu, AluOutput};
use crate::isa::{DecodeError, Instruction, Opcode, decode};

/// How an executed instruction left the program counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// PC advanced past the instruction.
    Advanced,
    /// PC was set by a jump, call or return.
    Redirected,
    /// `HLT` executed; the run is over.
    Halted,
}

/// Record of one executed instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Retired {
    /// Address the instruction was fetched from.
    pub pc: usize,
    /// The decoded instruction.
    pub instruction: Instruction,
    /// Effect on the program counter.
    pub outcome: StepOutcome,
}

impl Cpu {
    /// Fetches and decodes the instruction at PC without executing it.
    ///
    /// # Errors
    ///
    /// [`Fault::UnsupportedInstruction`] for an unknown opcode and
    /// [`Fault::OutOfRange`] if PC or a needed operand lies outside memory.
    pub fn fetch(&self) -> Result<Instruction, Fault> {
        let pc = self.pc;
        let window = self.fetch_window()?;
        decode(window).map_err(|e| match e {
            DecodeError::UnknownOpcode(opcode) => Fault::UnsupportedInstruction { pc, opcode },
            DecodeError::TruncatedOperand { offset, .. } => Fault::OutOfRange {
                pc,
                location: Location::Memory,
                index: pc + offset,
            },
        })
    }

    /// Executes exactly one instruction.
    ///
    /// `PRN` output is written to `out`. A halted machine executes nothing
    /// and reports [`StepOutcome::Halted`] again.
    ///
    /// # Errors
    ///
    /// Any [`Fault`]. Machine state is not rolled back; the run must stop.
    pub fn step<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<Retired, Fault> {
        let pc = self.pc;
        if self.halted {
            return Ok(Retired {
                pc,
                instruction: Instruction::Hlt,
                outcome: StepOutcome::Halted,
            });
        }
        let instruction = self.fetch()?;
        tracing::trace!(pc, %instruction, "execute");

        let outcome = self.execute(instruction, out)?;
        if outcome == StepOutcome::Halted {
            self.halted = true;
        }
        Ok(Retired {
            pc,
            instruction,
            outcome,
        })
    }

    /// Runs until `HLT`, returning the number of instructions executed.
    ///
    /// Returns 0 if the machine has already halted. No step ceiling is
    /// applied; see [`crate::sim::Simulator`] for a bounded run.
    ///
    /// # Errors
    ///
    /// The first [`Fault`] raised.
    pub fn run<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<u64, Fault> {
        if self.halted {
            return Ok(0);
        }
        let mut steps = 0;
        loop {
            let retired = self.step(out)?;
            steps += 1;
            if retired.outcome == StepOutcome::Halted {
                return Ok(steps);
            }
        }
    }

    fn execute<W: Write + ?Sized>(
        &mut self,
        inst: Instruction,
        out: &mut W,
    ) -> Result<StepOutcome, Fault> {
        match inst {
            Instruction::Hlt => {
                self.pc += inst.width();
                return Ok(StepOutcome::Halted);
            }
            Instruction::Ldi { reg, imm } => self.write_reg(reg, imm)?,
            Instruction::Prn { reg } => {
                let val = self.read_reg(reg)?;
                writeln!(out, "{val}")?;
            }
            Instruction::Add { a, b } | Instruction::Mul { a, b } | Instruction::Cmp { a, b } => {
                self.alu(inst.opcode(), a, b)?;
            }
            Instruction::Push { reg } => {
                let addr = self.grow_stack()?;
                let val = self.read_reg(reg)?;
                self.ram_write(addr, val)?;
            }
            Instruction::Pop { reg } => {
                let val = self.stack_top()?;
                self.write_reg(reg, val)?;
                self.shrink_stack();
            }
            Instruction::Call { reg } => {
                let ret = self.pc + inst.width();
                let ret = u8::try_from(ret).map_err(|_| Fault::OutOfRange {
                    pc: self.pc,
                    location: Location::Memory,
                    index: ret,
                })?;
                self.push_byte(ret)?;
                let target = self.read_reg(reg)?;
                return Ok(self.jump(target));
            }
            Instruction::Ret => {
                let target = self.pop_byte()?;
                return Ok(self.jump(target));
            }
            Instruction::Jmp { reg } => {
                let target = self.read_reg(reg)?;
                return Ok(self.jump(target));
            }
            Instruction::Jeq { reg } => {
                let target = self.read_reg(reg)?;
                if self.flags.equal {
                    return Ok(self.jump(target));
                }
            }
            Instruction::Jne { reg } => {
                let target = self.read_reg(reg)?;
                if !self.flags.equal {
                    return Ok(self.jump(target));
                }
            }
        }
        self.pc += inst.width();
        Ok(StepOutcome::Advanced)
    }

    /// Runs an ALU operation on registers `a` and `b`.
    ///
    /// Arithmetic results are written back to `a`; comparisons update the
    /// flags under the configured policy. A non-ALU opcode is rejected before
    /// any register is read.
    ///
    /// # Errors
    ///
    /// [`Fault::UnsupportedAluOperation`] if `op` has no ALU case, and
    /// [`Fault::OutOfRange`] for bad register indices.
    pub fn alu(&mut self, op: Opcode, a: u8, b: u8) -> Result<(), Fault> {
        if !op.is_alu() {
            return Err(Fault::UnsupportedAluOperation { pc: self.pc, op });
        }
        let lhs = self.read_reg(a)?;
        let rhs = self.read_reg(b)?;
        let output = Alu::execute(op, lhs, rhs).map_err(|e| Fault::UnsupportedAluOperation {
            pc: self.pc,
            op: e.0,
        })?;
        match output {
            AluOutput::Value(val) => self.write_reg(a, val)?,
            AluOutput::Compare(ordering) => self.flags.apply(ordering, self.flag_policy),
        }
        Ok(())
    }

    const fn jump(&mut self, target: u8) -> StepOutcome {
        self.pc = target as usize;
        StepOutcome::Redirected
    }

    /// Formats the machine state as a single trace line.
    ///
    /// Layout: `TRACE: PC | OP A B | FL | R0 .. R7`, two-digit upper-case hex.
    /// Bytes past the end of memory print as `--`.
    pub fn trace_line(&self) -> String {
        let byte = |addr: usize| {
            self.memory
                .read(addr)
                .map_or_else(|_| "--".to_string(), |b| format!("{b:02X}"))
        };
        let mut line = format!(
            "TRACE: {:02X} | {} {} {} | {:02X} |",
            self.pc,
            byte(self.pc),
            byte(self.pc + 1),
            byte(self.pc + 2),
            self.flags.bits()
        );
        for reg in self.regs.as_array() {
            line.push_str(&format!(" {reg:02X}"));
        }
        line
    }

    /// Writes PC, flags and all registers to `out`.
    ///
    /// # Errors
    ///
    /// Propagates write failures.
    pub fn dump_state<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "PC = {:#04x}  FL = {:#010b}", self.pc, self.flags.bits())?;
        for (row, regs) in self.regs.as_array().chunks(4).enumerate() {
            let cells: Vec<String> = regs
                .iter()
                .enumerate()
                .map(|(i, r)| format!("R{}={r:#04x}", row * 4 + i))
                .collect();
            writeln!(out, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
