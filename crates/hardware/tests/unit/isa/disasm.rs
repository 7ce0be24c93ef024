//! # Disassembler Tests

use ls8_core::isa::disasm::{disassemble, listing};
use ls8_core::isa::{Instruction, Opcode};
use pretty_assertions::assert_eq;

use crate::common::builder::assemble;

#[test]
fn test_disassemble_reports_width() {
    assert_eq!(
        disassemble(&[Opcode::Cmp.code(), 1, 2, 0xFF]),
        ("CMP R1,R2".to_string(), 3)
    );
    assert_eq!(
        disassemble(&[Opcode::Ret.code()]),
        ("RET".to_string(), 1)
    );
}

#[test]
fn test_disassemble_empty() {
    assert_eq!(disassemble(&[]), (String::new(), 0));
}

#[test]
fn test_unknown_and_truncated_render_as_bytes() {
    assert_eq!(disassemble(&[0xAB]), (".byte 0xab".to_string(), 1));
    assert_eq!(
        disassemble(&[Opcode::Ldi.code(), 0]),
        (".byte 0x82".to_string(), 1)
    );
}

#[test]
fn test_listing_of_call_program() {
    let bytes = assemble(&[
        Instruction::Ldi { reg: 1, imm: 8 },
        Instruction::Call { reg: 1 },
        Instruction::Hlt,
        Instruction::Push { reg: 0 },
        Instruction::Ret,
    ]);
    assert_eq!(
        listing(&bytes),
        [
            "00: LDI R1,8",
            "03: CALL R1",
            "05: HLT",
            "06: PUSH R0",
            "08: RET",
        ]
    );
}

#[test]
fn test_listing_continues_after_data_bytes() {
    assert_eq!(
        listing(&[0x00, Opcode::Hlt.code()]),
        ["00: .byte 0x00", "01: HLT"]
    );
}
