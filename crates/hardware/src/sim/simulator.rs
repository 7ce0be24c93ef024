//! Simulator: owns the machine and the run policy layered on top of it.
//!
//! The CPU knows only how to execute instructions. The simulator adds what a
//! harness needs around that loop: the optional step ceiling, per-instruction
//! tracing and statistics.

use std::io::{self, Write};

use crate::common::Fault;
use crate::config::Config;
use crate::core::Cpu;
use crate::core::cpu::StepOutcome;
use crate::sim::LoadError;
use crate::stats::SimStats;

/// Top-level simulator: machine state, run policy and statistics.
///
/// `T` is the sink trace lines are written to; it defaults to stderr.
#[derive(Debug)]
pub struct Simulator<T: Write = io::Stderr> {
    /// Machine state.
    pub cpu: Cpu,
    /// Statistics for the current run.
    pub stats: SimStats,
    max_steps: Option<u64>,
    trace: Option<T>,
}

impl Simulator {
    /// Creates a simulator from `config`.
    ///
    /// When `general.trace_instructions` is set, trace lines go to stderr.
    pub fn new(config: &Config) -> Self {
        let trace = config.general.trace_instructions.then(io::stderr);
        Self::build(config, trace)
    }
}

impl<T: Write> Simulator<T> {
    /// Creates a simulator that writes trace lines to `sink`, whatever the
    /// config's `trace_instructions` says.
    pub fn with_trace_sink(config: &Config, sink: T) -> Self {
        Self::build(config, Some(sink))
    }

    fn build(config: &Config, trace: Option<T>) -> Self {
        Self {
            cpu: Cpu::new(&config.machine),
            stats: SimStats::default(),
            max_steps: config.general.max_steps,
            trace,
        }
    }

    /// The trace sink, if tracing is enabled.
    pub const fn trace_sink(&self) -> Option<&T> {
        self.trace.as_ref()
    }

    /// Places a program image in memory at address 0.
    ///
    /// # Errors
    ///
    /// [`LoadError::ProgramTooLarge`] if the image exceeds memory.
    pub fn load(&mut self, program: &[u8]) -> Result<(), LoadError> {
        self.cpu
            .load_program(program)
            .map_err(|_| LoadError::ProgramTooLarge { len: program.len() })
    }

    /// Executes one instruction under the run policy.
    ///
    /// Once the machine has halted this returns [`StepOutcome::Halted`]
    /// without tracing or counting a step.
    ///
    /// # Errors
    ///
    /// [`Fault::StepLimitExceeded`] once the ceiling is reached, any fault
    /// raised by the instruction, or [`Fault::Output`] if tracing fails.
    pub fn tick<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<StepOutcome, Fault> {
        if self.cpu.halted {
            return Ok(StepOutcome::Halted);
        }
        if let Some(limit) = self.max_steps {
            if self.stats.instructions_retired >= limit {
                return Err(Fault::StepLimitExceeded {
                    limit,
                    pc: self.cpu.pc,
                });
            }
        }

        if let Some(sink) = self.trace.as_mut() {
            writeln!(sink, "{}", self.cpu.trace_line())?;
        }

        let retired = self.cpu.step(out)?;
        self.stats.record(&retired, self.cpu.regs.sp());
        Ok(retired.outcome)
    }

    /// Runs until `HLT` and returns the number of instructions this call
    /// executed; 0 if the machine had already halted.
    ///
    /// # Errors
    ///
    /// The first [`Fault`] raised. Statistics up to the fault are kept.
    pub fn run<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<u64, Fault> {
        let start = self.stats.instructions_retired;
        loop {
            match self.tick(out) {
                Ok(StepOutcome::Halted) => break,
                Ok(_) => {}
                Err(fault) => {
                    tracing::warn!(%fault, steps = self.stats.instructions_retired, "run aborted");
                    return Err(fault);
                }
            }
        }
        out.flush()?;
        tracing::debug!(
            steps = self.stats.instructions_retired,
            pc = self.cpu.pc,
            "halted"
        );
        Ok(self.stats.instructions_retired - start)
    }
}
