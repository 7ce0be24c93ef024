//! # ALU Tests
//!
//! Byte arithmetic wraps modulo 256 and comparison is unsigned.

use std::cmp::Ordering;

use ls8_core::core::units::alu::{Alu, AluOutput, UnsupportedAluOperation};
use ls8_core::isa::Opcode;
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case(1, 2, 3)]
#[case(250, 10, 4)]
#[case(255, 1, 0)]
#[case(0, 0, 0)]
fn test_add(#[case] a: u8, #[case] b: u8, #[case] expected: u8) {
    assert_eq!(
        Alu::execute(Opcode::Add, a, b),
        Ok(AluOutput::Value(expected))
    );
}

#[rstest]
#[case(6, 7, 42)]
#[case(200, 2, 144)]
#[case(16, 16, 0)]
#[case(255, 255, 1)]
fn test_mul(#[case] a: u8, #[case] b: u8, #[case] expected: u8) {
    assert_eq!(
        Alu::execute(Opcode::Mul, a, b),
        Ok(AluOutput::Value(expected))
    );
}

#[rstest]
#[case(5, 5, Ordering::Equal)]
#[case(200, 3, Ordering::Greater)]
#[case(0, 255, Ordering::Less)]
fn test_cmp(#[case] a: u8, #[case] b: u8, #[case] expected: Ordering) {
    assert_eq!(
        Alu::execute(Opcode::Cmp, a, b),
        Ok(AluOutput::Compare(expected))
    );
}

#[test]
fn test_non_alu_opcodes_rejected() {
    for op in Opcode::ALL.into_iter().filter(|op| !op.is_alu()) {
        assert_eq!(Alu::execute(op, 1, 1), Err(UnsupportedAluOperation(op)));
    }
}

proptest! {
    #[test]
    fn prop_add_is_modular(a: u8, b: u8) {
        let expected = ((u16::from(a) + u16::from(b)) % 256) as u8;
        prop_assert_eq!(Alu::execute(Opcode::Add, a, b), Ok(AluOutput::Value(expected)));
    }

    #[test]
    fn prop_mul_is_modular(a: u8, b: u8) {
        let expected = ((u16::from(a) * u16::from(b)) % 256) as u8;
        prop_assert_eq!(Alu::execute(Opcode::Mul, a, b), Ok(AluOutput::Value(expected)));
    }
}
