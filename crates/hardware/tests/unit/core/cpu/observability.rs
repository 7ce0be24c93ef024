//! # Trace and Dump Tests

use ls8_core::core::Cpu;
use ls8_core::isa::Instruction;

use crate::common::builder::assemble;

#[test]
fn test_trace_line_layout() {
    let mut cpu = Cpu::default();
    cpu.load_program(&assemble(&[Instruction::Ldi { reg: 0, imm: 8 }]))
        .unwrap();
    assert_eq!(
        cpu.trace_line(),
        "TRACE: 00 | 82 00 08 | 00 | 00 00 00 00 00 00 00 F4"
    );
}

#[test]
fn test_trace_line_past_end_of_memory() {
    let mut cpu = Cpu::default();
    cpu.pc = 0xFF;
    cpu.flags.equal = true;
    assert_eq!(
        cpu.trace_line(),
        "TRACE: FF | 00 -- -- | 01 | 00 00 00 00 00 00 00 F4"
    );
}

#[test]
fn test_dump_state() {
    let mut cpu = Cpu::default();
    cpu.write_reg(0, 8).unwrap();
    cpu.flags.less = true;
    let mut out = Vec::<u8>::new();
    cpu.dump_state(&mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "PC = 0x00  FL = 0b00000100\n\
         R0=0x08 R1=0x00 R2=0x00 R3=0x00\n\
         R4=0x00 R5=0x00 R6=0x00 R7=0xf4\n"
    );
}
