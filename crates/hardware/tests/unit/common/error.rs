//! # Fault Tests
//!
//! Display text must name the error kind, the PC and the relevant bytes.

use std::io;

use ls8_core::common::{AccessError, Fault, Location};
use ls8_core::isa::Opcode;

#[test]
fn test_unsupported_instruction_display() {
    let fault = Fault::UnsupportedInstruction {
        pc: 0x12,
        opcode: 0xFF,
    };
    let text = fault.to_string();
    assert!(text.contains("UnsupportedInstruction"));
    assert!(text.contains("0x12"));
    assert!(text.contains("0b11111111"));
    assert!(text.contains("0xff"));
}

#[test]
fn test_unsupported_alu_operation_display() {
    let fault = Fault::UnsupportedAluOperation {
        pc: 3,
        op: Opcode::Jmp,
    };
    let text = fault.to_string();
    assert!(text.contains("UnsupportedAluOperation"));
    assert!(text.contains("JMP"));
    assert!(text.contains("0b01010100"));
}

#[test]
fn test_out_of_range_display() {
    let fault = Fault::OutOfRange {
        pc: 0,
        location: Location::Register,
        index: 9,
    };
    assert_eq!(
        fault.to_string(),
        "OutOfRange: register index 9 at pc 0x00"
    );
}

#[test]
fn test_access_error_at_attaches_pc() {
    let err = AccessError {
        location: Location::Memory,
        index: 256,
    };
    assert_eq!(err.to_string(), "memory address 256 out of range");
    match err.at(0x40) {
        Fault::OutOfRange {
            pc,
            location,
            index,
        } => {
            assert_eq!(pc, 0x40);
            assert_eq!(location, Location::Memory);
            assert_eq!(index, 256);
        }
        other => panic!("unexpected fault {other:?}"),
    }
}

#[test]
fn test_fault_pc() {
    assert_eq!(Fault::StackOverflow { pc: 7, sp: 0 }.pc(), Some(7));
    assert_eq!(Fault::StackUnderflow { pc: 8, sp: 0xF4 }.pc(), Some(8));
    assert_eq!(Fault::StepLimitExceeded { limit: 5, pc: 2 }.pc(), Some(2));
    assert_eq!(Fault::Output(io::Error::other("closed")).pc(), None);
}

#[test]
fn test_step_limit_display() {
    let text = Fault::StepLimitExceeded { limit: 100, pc: 4 }.to_string();
    assert!(text.contains("StepLimitExceeded"));
    assert!(text.contains("100"));
}
