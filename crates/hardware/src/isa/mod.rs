//! LS-8 Instruction Set.
//!
//! Contains the opcode table, the decoded instruction representation, the
//! decoder used by the fetch stage and a disassembler.
//!
//! Every instruction is an opcode byte followed by zero, one or two operand
//! bytes. An operand is either a register index or an immediate value.

/// Instruction decoding from the fixed-width fetch window.
pub mod decode;

/// Instruction disassembler for tracing and diagnostics.
pub mod disasm;

/// `Opcode` and `Instruction` types.
pub mod instruction;

/// Opcode byte constants.
pub mod opcodes;

pub use decode::{DecodeError, FetchWindow, decode};
pub use instruction::{Instruction, Opcode};
