//! # Stack Tests
//!
//! Push decrements then stores, pop loads then increments. Bounds are only
//! enforced when `stack_checks` is on.

use ls8_core::common::{Fault, STACK_TOP};
use ls8_core::config::MachineConfig;
use ls8_core::core::Cpu;

fn checked(stack_limit: Option<u8>) -> Cpu {
    Cpu::new(&MachineConfig {
        stack_checks: true,
        stack_limit,
        ..MachineConfig::default()
    })
}

#[test]
fn test_push_then_pop() {
    let mut cpu = Cpu::default();
    cpu.push_byte(0x11).unwrap();
    cpu.push_byte(0x22).unwrap();
    assert_eq!(cpu.regs.sp(), STACK_TOP - 2);
    assert_eq!(cpu.ram_read(0xF3).unwrap(), 0x11);
    assert_eq!(cpu.ram_read(0xF2).unwrap(), 0x22);

    assert_eq!(cpu.pop_byte().unwrap(), 0x22);
    assert_eq!(cpu.pop_byte().unwrap(), 0x11);
    assert_eq!(cpu.regs.sp(), STACK_TOP);
}

#[test]
fn test_unchecked_pop_on_empty_stack_reads_reserved_region() {
    let mut cpu = Cpu::default();
    cpu.ram_write(0xF4, 0x5A).unwrap();
    assert_eq!(cpu.pop_byte().unwrap(), 0x5A);
    assert_eq!(cpu.regs.sp(), 0xF5);
}

#[test]
fn test_unchecked_sp_wraps() {
    let mut cpu = Cpu::default();
    cpu.regs.set_sp(0);
    cpu.push_byte(0x77).unwrap();
    assert_eq!(cpu.regs.sp(), 0xFF);
    assert_eq!(cpu.ram_read(0xFF).unwrap(), 0x77);

    assert_eq!(cpu.pop_byte().unwrap(), 0x77);
    assert_eq!(cpu.regs.sp(), 0);
}

#[test]
fn test_checked_pop_on_empty_stack_underflows() {
    let mut cpu = checked(None);
    match cpu.pop_byte() {
        Err(Fault::StackUnderflow { sp, .. }) => assert_eq!(sp, STACK_TOP),
        other => panic!("expected StackUnderflow, got {other:?}"),
    }
    assert_eq!(cpu.regs.sp(), STACK_TOP);
}

#[test]
fn test_stack_floor_defaults_to_program_length() {
    let mut cpu = checked(None);
    cpu.load_program(&[0; 10]).unwrap();
    assert_eq!(cpu.stack_floor(), 10);

    let cpu = checked(Some(0x80));
    assert_eq!(cpu.stack_floor(), 0x80);
}

#[test]
fn test_checked_push_stops_at_floor() {
    let mut cpu = checked(Some(0xF0));
    for val in 0..4 {
        cpu.push_byte(val).unwrap();
    }
    assert_eq!(cpu.regs.sp(), 0xF0);
    match cpu.push_byte(9) {
        Err(Fault::StackOverflow { sp, .. }) => assert_eq!(sp, 0xF0),
        other => panic!("expected StackOverflow, got {other:?}"),
    }
    assert_eq!(cpu.regs.sp(), 0xF0);
}

#[test]
fn test_checked_push_cannot_clobber_program() {
    let mut cpu = checked(None);
    cpu.load_program(&[0xAA; 3]).unwrap();
    cpu.regs.set_sp(4);
    cpu.push_byte(1).unwrap();
    assert_eq!(cpu.regs.sp(), 3);
    assert!(matches!(cpu.push_byte(2), Err(Fault::StackOverflow { .. })));
    assert_eq!(cpu.ram_read(2).unwrap(), 0xAA);
}
