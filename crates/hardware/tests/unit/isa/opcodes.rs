//! # Opcode Table Tests

use ls8_core::isa::{Instruction, Opcode, opcodes};
use rstest::rstest;

#[rstest]
#[case(opcodes::HLT, Opcode::Hlt, 0)]
#[case(opcodes::LDI, Opcode::Ldi, 2)]
#[case(opcodes::PRN, Opcode::Prn, 1)]
#[case(opcodes::ADD, Opcode::Add, 2)]
#[case(opcodes::MUL, Opcode::Mul, 2)]
#[case(opcodes::CMP, Opcode::Cmp, 2)]
#[case(opcodes::PUSH, Opcode::Push, 1)]
#[case(opcodes::POP, Opcode::Pop, 1)]
#[case(opcodes::CALL, Opcode::Call, 1)]
#[case(opcodes::RET, Opcode::Ret, 0)]
#[case(opcodes::JMP, Opcode::Jmp, 1)]
#[case(opcodes::JEQ, Opcode::Jeq, 1)]
#[case(opcodes::JNE, Opcode::Jne, 1)]
fn test_opcode_table(#[case] byte: u8, #[case] op: Opcode, #[case] operands: usize) {
    assert_eq!(Opcode::from_byte(byte), Some(op));
    assert_eq!(op.code(), byte);
    assert_eq!(op.operand_count(), operands);
    assert_eq!(op.width(), operands + 1);
}

#[test]
fn test_opcode_bytes_are_distinct() {
    let mut bytes: Vec<u8> = Opcode::ALL.iter().map(|op| op.code()).collect();
    bytes.sort_unstable();
    bytes.dedup();
    assert_eq!(bytes.len(), Opcode::ALL.len());
}

#[test]
fn test_unknown_bytes_rejected() {
    let known = Opcode::ALL.map(Opcode::code);
    for byte in 0..=u8::MAX {
        let decoded = Opcode::try_from(byte);
        if known.contains(&byte) {
            assert!(decoded.is_ok());
        } else {
            assert_eq!(decoded, Err(byte));
        }
    }
}

#[test]
fn test_only_add_mul_cmp_use_the_alu() {
    let alu: Vec<Opcode> = Opcode::ALL.into_iter().filter(|op| op.is_alu()).collect();
    assert_eq!(alu, [Opcode::Add, Opcode::Mul, Opcode::Cmp]);
}

#[rstest]
#[case(Instruction::Hlt, "HLT")]
#[case(Instruction::Ldi { reg: 0, imm: 8 }, "LDI R0,8")]
#[case(Instruction::Mul { a: 1, b: 2 }, "MUL R1,R2")]
#[case(Instruction::Pop { reg: 3 }, "POP R3")]
#[case(Instruction::Ret, "RET")]
fn test_instruction_display(#[case] inst: Instruction, #[case] text: &str) {
    assert_eq!(inst.to_string(), text);
}

#[test]
fn test_encode_width_matches_opcode() {
    let insts = [
        Instruction::Hlt,
        Instruction::Ldi { reg: 1, imm: 2 },
        Instruction::Cmp { a: 0, b: 1 },
        Instruction::Jne { reg: 4 },
    ];
    for inst in insts {
        let bytes = inst.encode();
        assert_eq!(bytes.len(), inst.width());
        assert_eq!(bytes[0], inst.opcode().code());
    }
}
