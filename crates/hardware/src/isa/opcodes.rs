//! LS-8 opcode byte values.
//!
//! Each constant is the full first byte of an instruction. Opcodes are matched
//! as flat byte values; no bit fields are decoded from them.

/// Halt the machine.
pub const HLT: u8 = 0b0000_0001;

/// Load immediate: `LDI reg, imm`.
pub const LDI: u8 = 0b1000_0010;

/// Print register as decimal: `PRN reg`.
pub const PRN: u8 = 0b0100_0111;

/// Add: `ADD regA, regB`.
pub const ADD: u8 = 0b1010_0000;

/// Multiply: `MUL regA, regB`.
pub const MUL: u8 = 0b1010_0010;

/// Compare and set flags: `CMP regA, regB`.
pub const CMP: u8 = 0b1010_0111;

/// Push register onto the stack: `PUSH reg`.
pub const PUSH: u8 = 0b0100_0101;

/// Pop the stack into a register: `POP reg`.
pub const POP: u8 = 0b0100_0110;

/// Call the subroutine whose address is held in a register: `CALL reg`.
pub const CALL: u8 = 0b0101_0000;

/// Return from subroutine.
pub const RET: u8 = 0b0001_0001;

/// Unconditional jump to the address held in a register: `JMP reg`.
pub const JMP: u8 = 0b0101_0100;

/// Jump if the Equal flag is set: `JEQ reg`.
pub const JEQ: u8 = 0b0101_0101;

/// Jump if the Equal flag is clear: `JNE reg`.
pub const JNE: u8 = 0b0101_0110;
