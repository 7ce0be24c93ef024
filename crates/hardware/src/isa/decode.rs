//! Instruction decoding.
//!
//! The fetch stage always reads a fixed three-byte window: the opcode and two
//! candidate operand bytes. Candidates beyond the end of memory are `None`.
//! Decoding consumes only as many candidates as the opcode needs, so a short
//! instruction at the very end of memory still decodes.

use thiserror::Error;

use super::instruction::{Instruction, Opcode};

/// The three bytes read at the program counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchWindow {
    /// Opcode byte at `pc`.
    pub opcode: u8,
    /// Candidate operand at `pc + 1`.
    pub operand_a: Option<u8>,
    /// Candidate operand at `pc + 2`.
    pub operand_b: Option<u8>,
}

impl FetchWindow {
    /// Builds a window from a byte slice starting at the opcode.
    ///
    /// Returns `None` if the slice is empty.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let (&opcode, rest) = bytes.split_first()?;
        Some(Self {
            opcode,
            operand_a: rest.first().copied(),
            operand_b: rest.get(1).copied(),
        })
    }
}

/// Reasons a fetch window fails to decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The opcode byte matches no known operation.
    #[error("unknown opcode {0:#010b}")]
    UnknownOpcode(u8),

    /// An operand the opcode needs lies past the end of memory.
    #[error("{op} needs an operand at offset {offset} past the end of memory")]
    TruncatedOperand {
        /// Operation being decoded.
        op: Opcode,
        /// Offset of the missing byte from the opcode (1 or 2).
        offset: usize,
    },
}

/// Decodes a fetch window into an [`Instruction`].
///
/// # Errors
///
/// [`DecodeError::UnknownOpcode`] for an unrecognized opcode byte, and
/// [`DecodeError::TruncatedOperand`] when a needed operand is absent.
pub fn decode(window: FetchWindow) -> Result<Instruction, DecodeError> {
    let op = Opcode::try_from(window.opcode).map_err(DecodeError::UnknownOpcode)?;

    let a = || {
        window
            .operand_a
            .ok_or(DecodeError::TruncatedOperand { op, offset: 1 })
    };
    let b = || {
        window
            .operand_b
            .ok_or(DecodeError::TruncatedOperand { op, offset: 2 })
    };

    let inst = match op {
        Opcode::Hlt => Instruction::Hlt,
        Opcode::Ret => Instruction::Ret,
        Opcode::Ldi => Instruction::Ldi { reg: a()?, imm: b()? },
        Opcode::Add => Instruction::Add { a: a()?, b: b()? },
        Opcode::Mul => Instruction::Mul { a: a()?, b: b()? },
        Opcode::Cmp => Instruction::Cmp { a: a()?, b: b()? },
        Opcode::Prn => Instruction::Prn { reg: a()? },
        Opcode::Push => Instruction::Push { reg: a()? },
        Opcode::Pop => Instruction::Pop { reg: a()? },
        Opcode::Call => Instruction::Call { reg: a()? },
        Opcode::Jmp => Instruction::Jmp { reg: a()? },
        Opcode::Jeq => Instruction::Jeq { reg: a()? },
        Opcode::Jne => Instruction::Jne { reg: a()? },
    };
    Ok(inst)
}
