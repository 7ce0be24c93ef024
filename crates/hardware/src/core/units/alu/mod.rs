//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU. It is a pure function of two register
//! values and an operation tag; the CPU writes the result back or applies it to
//! the flags.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Mul
//! - [`compare`]:    Cmp

/// Wrapping byte arithmetic.
pub mod arithmetic;

/// Unsigned comparison.
pub mod compare;

use std::cmp::Ordering;

use thiserror::Error;

use crate::isa::Opcode;

/// Result of an ALU operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOutput {
    /// Value to write back to the first operand register.
    Value(u8),
    /// Comparison outcome to apply to the flags.
    Compare(Ordering),
}

/// An opcode with no ALU case was routed to the ALU.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("no ALU operation for {0}")]
pub struct UnsupportedAluOperation(pub Opcode);

/// Arithmetic Logic Unit for byte operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The operation tag.
    /// * `a`  - First operand (value of register A).
    /// * `b`  - Second operand (value of register B).
    ///
    /// # Errors
    ///
    /// [`UnsupportedAluOperation`] if `op` is not an ALU operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use ls8_core::core::units::alu::{Alu, AluOutput};
    /// use ls8_core::isa::Opcode;
    ///
    /// assert_eq!(Alu::execute(Opcode::Add, 250, 10), Ok(AluOutput::Value(4)));
    /// assert_eq!(Alu::execute(Opcode::Mul, 200, 2), Ok(AluOutput::Value(144)));
    /// assert_eq!(Alu::execute(Opcode::Cmp, 5, 5), Ok(AluOutput::Compare(Ordering::Equal)));
    /// assert!(Alu::execute(Opcode::Jmp, 1, 2).is_err());
    /// ```
    pub fn execute(op: Opcode, a: u8, b: u8) -> Result<AluOutput, UnsupportedAluOperation> {
        match op {
            Opcode::Add => Ok(AluOutput::Value(arithmetic::add(a, b))),
            Opcode::Mul => Ok(AluOutput::Value(arithmetic::mul(a, b))),
            Opcode::Cmp => Ok(AluOutput::Compare(compare::compare(a, b))),
            _ => Err(UnsupportedAluOperation(op)),
        }
    }
}
