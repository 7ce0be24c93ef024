//! Machine fault definitions.
//!
//! This module defines every way a run can stop other than by executing `HLT`.
//! It provides:
//! 1. **Fault Representation:** Decode, ALU, range, stack and harness failures.
//! 2. **Access Errors:** Context-free range errors raised by memory and register
//!    accessors, promoted to faults once the faulting PC is known.
//!
//! Every fault is terminal: the machine does not resume after one.

use std::fmt;
use std::io;

use thiserror::Error;

use crate::isa::Opcode;

/// Storage that an out-of-range access was aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    /// The 256-byte main memory.
    Memory,
    /// The 8-entry register file.
    Register,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => f.write_str("memory address"),
            Self::Register => f.write_str("register index"),
        }
    }
}

/// Range error raised by a memory or register accessor.
///
/// Accessors do not know which instruction they serve, so they report only the
/// location and index. [`AccessError::at`] attaches the PC.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("{location} {index} out of range")]
pub struct AccessError {
    /// Storage being accessed.
    pub location: Location,
    /// Offending address or register index.
    pub index: usize,
}

impl AccessError {
    /// Converts the access error into a [`Fault::OutOfRange`] at `pc`.
    pub const fn at(self, pc: usize) -> Fault {
        Fault::OutOfRange {
            pc,
            location: self.location,
            index: self.index,
        }
    }
}

/// A fatal condition that stops the machine.
#[derive(Debug, Error)]
pub enum Fault {
    /// The fetched byte is not a known opcode.
    #[error("UnsupportedInstruction: opcode {opcode:#010b} ({opcode:#04x}) at pc {pc:#04x}")]
    UnsupportedInstruction {
        /// Address of the offending byte.
        pc: usize,
        /// The byte that failed to decode.
        opcode: u8,
    },

    /// An opcode with no ALU case reached the ALU.
    ///
    /// This is a dispatch bug, never a property of the program being run.
    #[error("UnsupportedAluOperation: {op} ({:#010b}) at pc {pc:#04x}", .op.code())]
    UnsupportedAluOperation {
        /// Address of the instruction.
        pc: usize,
        /// Opcode that was routed to the ALU.
        op: Opcode,
    },

    /// A register index or memory address fell outside the machine.
    #[error("OutOfRange: {location} {index} at pc {pc:#04x}")]
    OutOfRange {
        /// Address of the instruction performing the access.
        pc: usize,
        /// Storage being accessed.
        location: Location,
        /// Offending address or register index.
        index: usize,
    },

    /// A push would grow the stack below its floor.
    #[error("StackOverflow: push with sp {sp:#04x} at pc {pc:#04x}")]
    StackOverflow {
        /// Address of the pushing instruction.
        pc: usize,
        /// Stack pointer before the push.
        sp: u8,
    },

    /// A pop was attempted on an empty stack.
    #[error("StackUnderflow: pop with sp {sp:#04x} at pc {pc:#04x}")]
    StackUnderflow {
        /// Address of the popping instruction.
        pc: usize,
        /// Stack pointer before the pop.
        sp: u8,
    },

    /// The run exceeded the configured step ceiling.
    #[error("StepLimitExceeded: no HLT after {limit} steps (pc {pc:#04x})")]
    StepLimitExceeded {
        /// Configured ceiling.
        limit: u64,
        /// PC of the instruction that would have run next.
        pc: usize,
    },

    /// Writing `PRN` output failed.
    #[error("failed to write program output: {0}")]
    Output(#[from] io::Error),
}

impl Fault {
    /// Returns the PC the fault is attributed to, if it has one.
    pub const fn pc(&self) -> Option<usize> {
        match self {
            Self::UnsupportedInstruction { pc, .. }
            | Self::UnsupportedAluOperation { pc, .. }
            | Self::OutOfRange { pc, .. }
            | Self::StackOverflow { pc, .. }
            | Self::StackUnderflow { pc, .. }
            | Self::StepLimitExceeded { pc, .. } => Some(*pc),
            Self::Output(_) => None,
        }
    }
}
