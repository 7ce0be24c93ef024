//! # Decode Tests
//!
//! Exercises decoding of every opcode and the fixed-width window edge cases.

use ls8_core::isa::{DecodeError, FetchWindow, Instruction, Opcode, decode};
use proptest::prelude::*;

#[test]
fn test_from_slice() {
    assert_eq!(FetchWindow::from_slice(&[]), None);
    assert_eq!(
        FetchWindow::from_slice(&[1, 2, 3, 4]),
        Some(FetchWindow {
            opcode: 1,
            operand_a: Some(2),
            operand_b: Some(3),
        })
    );
}

#[test]
fn test_unused_candidates_are_ignored() {
    let window = FetchWindow {
        opcode: Opcode::Prn.code(),
        operand_a: Some(6),
        operand_b: Some(0xEE),
    };
    assert_eq!(decode(window), Ok(Instruction::Prn { reg: 6 }));
}

#[test]
fn test_truncated_first_operand() {
    let window = FetchWindow {
        opcode: Opcode::Jmp.code(),
        operand_a: None,
        operand_b: None,
    };
    assert_eq!(
        decode(window),
        Err(DecodeError::TruncatedOperand {
            op: Opcode::Jmp,
            offset: 1,
        })
    );
}

#[test]
fn test_decode_error_display() {
    assert_eq!(
        DecodeError::UnknownOpcode(0b1111_0000).to_string(),
        "unknown opcode 0b11110000"
    );
}

proptest! {
    #[test]
    fn prop_decode_inverts_encode(byte: u8, a: u8, b: u8) {
        let window = FetchWindow { opcode: byte, operand_a: Some(a), operand_b: Some(b) };
        match decode(window) {
            Ok(inst) => {
                let bytes = inst.encode();
                prop_assert_eq!(bytes[0], byte);
                prop_assert_eq!(&bytes[1..], &[a, b][..inst.width() - 1]);
            }
            Err(err) => {
                prop_assert_eq!(err, DecodeError::UnknownOpcode(byte));
                prop_assert!(Opcode::from_byte(byte).is_none());
            }
        }
    }
}
