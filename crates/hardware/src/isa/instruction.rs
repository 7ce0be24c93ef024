//! Opcode and instruction types.
//!
//! [`Opcode`] names an operation independent of its operands; [`Instruction`]
//! is a fully decoded instruction carrying the operand bytes it consumes.

use std::fmt;

use super::opcodes;

/// Every operation the machine implements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// Halt.
    Hlt = opcodes::HLT,
    /// Load immediate.
    Ldi = opcodes::LDI,
    /// Print register.
    Prn = opcodes::PRN,
    /// Add registers.
    Add = opcodes::ADD,
    /// Multiply registers.
    Mul = opcodes::MUL,
    /// Compare registers.
    Cmp = opcodes::CMP,
    /// Push register.
    Push = opcodes::PUSH,
    /// Pop into register.
    Pop = opcodes::POP,
    /// Call subroutine.
    Call = opcodes::CALL,
    /// Return from subroutine.
    Ret = opcodes::RET,
    /// Jump.
    Jmp = opcodes::JMP,
    /// Jump if equal.
    Jeq = opcodes::JEQ,
    /// Jump if not equal.
    Jne = opcodes::JNE,
}

impl Opcode {
    /// All opcodes, in opcode-table order.
    pub const ALL: [Self; 13] = [
        Self::Hlt,
        Self::Ldi,
        Self::Prn,
        Self::Add,
        Self::Mul,
        Self::Cmp,
        Self::Push,
        Self::Pop,
        Self::Call,
        Self::Ret,
        Self::Jmp,
        Self::Jeq,
        Self::Jne,
    ];

    /// Returns the encoded opcode byte.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decodes an opcode byte, returning `None` for unknown values.
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            opcodes::HLT => Some(Self::Hlt),
            opcodes::LDI => Some(Self::Ldi),
            opcodes::PRN => Some(Self::Prn),
            opcodes::ADD => Some(Self::Add),
            opcodes::MUL => Some(Self::Mul),
            opcodes::CMP => Some(Self::Cmp),
            opcodes::PUSH => Some(Self::Push),
            opcodes::POP => Some(Self::Pop),
            opcodes::CALL => Some(Self::Call),
            opcodes::RET => Some(Self::Ret),
            opcodes::JMP => Some(Self::Jmp),
            opcodes::JEQ => Some(Self::Jeq),
            opcodes::JNE => Some(Self::Jne),
            _ => None,
        }
    }

    /// Number of operand bytes the instruction consumes (0, 1 or 2).
    pub const fn operand_count(self) -> usize {
        match self {
            Self::Hlt | Self::Ret => 0,
            Self::Prn
            | Self::Push
            | Self::Pop
            | Self::Call
            | Self::Jmp
            | Self::Jeq
            | Self::Jne => 1,
            Self::Ldi | Self::Add | Self::Mul | Self::Cmp => 2,
        }
    }

    /// Encoded width in bytes, opcode included.
    #[inline]
    pub const fn width(self) -> usize {
        1 + self.operand_count()
    }

    /// Returns `true` for operations carried out by the ALU.
    pub const fn is_alu(self) -> bool {
        matches!(self, Self::Add | Self::Mul | Self::Cmp)
    }

    /// Assembly mnemonic, upper case.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Hlt => "HLT",
            Self::Ldi => "LDI",
            Self::Prn => "PRN",
            Self::Add => "ADD",
            Self::Mul => "MUL",
            Self::Cmp => "CMP",
            Self::Push => "PUSH",
            Self::Pop => "POP",
            Self::Call => "CALL",
            Self::Ret => "RET",
            Self::Jmp => "JMP",
            Self::Jeq => "JEQ",
            Self::Jne => "JNE",
        }
    }
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    /// Fails with the offending byte when it is not a known opcode.
    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::from_byte(byte).ok_or(byte)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// A decoded instruction with its operand bytes.
///
/// Register operands are kept as raw bytes; they are range-checked when the
/// register file is accessed, not at decode time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `HLT`
    Hlt,
    /// `LDI reg, imm`
    Ldi {
        /// Destination register.
        reg: u8,
        /// Value to load.
        imm: u8,
    },
    /// `PRN reg`
    Prn {
        /// Register to print.
        reg: u8,
    },
    /// `ADD a, b`
    Add {
        /// Destination and first source.
        a: u8,
        /// Second source.
        b: u8,
    },
    /// `MUL a, b`
    Mul {
        /// Destination and first source.
        a: u8,
        /// Second source.
        b: u8,
    },
    /// `CMP a, b`
    Cmp {
        /// Left-hand register.
        a: u8,
        /// Right-hand register.
        b: u8,
    },
    /// `PUSH reg`
    Push {
        /// Register whose value is pushed.
        reg: u8,
    },
    /// `POP reg`
    Pop {
        /// Register receiving the popped value.
        reg: u8,
    },
    /// `CALL reg`
    Call {
        /// Register holding the subroutine address.
        reg: u8,
    },
    /// `RET`
    Ret,
    /// `JMP reg`
    Jmp {
        /// Register holding the target address.
        reg: u8,
    },
    /// `JEQ reg`
    Jeq {
        /// Register holding the target address.
        reg: u8,
    },
    /// `JNE reg`
    Jne {
        /// Register holding the target address.
        reg: u8,
    },
}

impl Instruction {
    /// The operation this instruction performs.
    pub const fn opcode(&self) -> Opcode {
        match self {
            Self::Hlt => Opcode::Hlt,
            Self::Ldi { .. } => Opcode::Ldi,
            Self::Prn { .. } => Opcode::Prn,
            Self::Add { .. } => Opcode::Add,
            Self::Mul { .. } => Opcode::Mul,
            Self::Cmp { .. } => Opcode::Cmp,
            Self::Push { .. } => Opcode::Push,
            Self::Pop { .. } => Opcode::Pop,
            Self::Call { .. } => Opcode::Call,
            Self::Ret => Opcode::Ret,
            Self::Jmp { .. } => Opcode::Jmp,
            Self::Jeq { .. } => Opcode::Jeq,
            Self::Jne { .. } => Opcode::Jne,
        }
    }

    /// Encoded width in bytes.
    #[inline]
    pub const fn width(&self) -> usize {
        self.opcode().width()
    }

    /// Re-encodes the instruction into its byte form.
    pub fn encode(&self) -> Vec<u8> {
        let op = self.opcode().code();
        match *self {
            Self::Hlt | Self::Ret => vec![op],
            Self::Ldi { reg, imm } => vec![op, reg, imm],
            Self::Add { a, b } | Self::Mul { a, b } | Self::Cmp { a, b } => vec![op, a, b],
            Self::Prn { reg }
            | Self::Push { reg }
            | Self::Pop { reg }
            | Self::Call { reg }
            | Self::Jmp { reg }
            | Self::Jeq { reg }
            | Self::Jne { reg } => vec![op, reg],
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = self.opcode();
        match *self {
            Self::Hlt | Self::Ret => write!(f, "{op}"),
            Self::Ldi { reg, imm } => write!(f, "{op} R{reg},{imm}"),
            Self::Add { a, b } | Self::Mul { a, b } | Self::Cmp { a, b } => {
                write!(f, "{op} R{a},R{b}")
            }
            Self::Prn { reg }
            | Self::Push { reg }
            | Self::Pop { reg }
            | Self::Call { reg }
            | Self::Jmp { reg }
            | Self::Jeq { reg }
            | Self::Jne { reg } => write!(f, "{op} R{reg}"),
        }
    }
}
