//! Instruction Disassembler for the LS-8.
//!
//! Converts raw program bytes into human-readable mnemonics for debug tracing,
//! fault diagnostics and test output.
//!
//! # Usage
//!
//! ```
//! use ls8_core::isa::disasm::{disassemble, listing};
//!
//! assert_eq!(disassemble(&[0b1000_0010, 0, 8]).0, "LDI R0,8");
//!
//! let lines = listing(&[0b1000_0010, 0, 8, 0b0100_0111, 0, 0b0000_0001]);
//! assert_eq!(lines, ["00: LDI R0,8", "03: PRN R0", "05: HLT"]);
//! ```

use super::decode::{FetchWindow, decode};

/// Disassembles the instruction at the start of `bytes`.
///
/// Returns the text and the number of bytes it covers. Bytes that do not
/// decode (unknown opcode, or an instruction cut off by the end of the slice)
/// render as `.byte 0xNN` and cover one byte. An empty slice yields
/// `("", 0)`.
pub fn disassemble(bytes: &[u8]) -> (String, usize) {
    let Some(window) = FetchWindow::from_slice(bytes) else {
        return (String::new(), 0);
    };
    match decode(window) {
        Ok(inst) => (inst.to_string(), inst.width()),
        Err(_) => (format!(".byte {:#04x}", window.opcode), 1),
    }
}

/// Produces an addressed listing of `bytes`, one line per instruction.
///
/// Addresses are two-digit upper-case hex offsets from the start of the slice.
pub fn listing(bytes: &[u8]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut addr = 0;
    while addr < bytes.len() {
        let (text, width) = disassemble(&bytes[addr..]);
        lines.push(format!("{addr:02X}: {text}"));
        addr += width;
    }
    lines
}
