//! LS-8 machine library.
//!
//! This crate implements the LS-8, an 8-bit teaching computer:
//! 1. **Core:** 256 bytes of memory, eight byte registers (`R7` is the stack
//!    pointer), E/G/L flags and a fetch-decode-execute loop.
//! 2. **ISA:** Opcode table, decoding from a fixed three-byte fetch window and
//!    disassembly.
//! 3. **Simulation:** Program image loader, run driver with step ceiling and
//!    tracing, and statistics.
//!
//! # Example
//!
//! ```
//! use ls8_core::{Config, Simulator};
//! use ls8_core::sim::loader::parse_program;
//!
//! let image = "10000010\n00000000\n00001000\n01000111\n00000000\n00000001\n";
//! let program = parse_program(image).unwrap();
//!
//! let mut sim = Simulator::new(&Config::default());
//! sim.load(&program).unwrap();
//!
//! let mut out = Vec::<u8>::new();
//! let steps = sim.run(&mut out).unwrap();
//! assert_eq!(steps, 3);
//! assert_eq!(out, b"8\n");
//! ```

/// Common types and constants (dimensions, faults).
pub mod common;
/// Run configuration (defaults, JSON loading).
pub mod config;
/// CPU core (state, execution loop, ALU).
pub mod core;
/// Instruction set (opcodes, decode, disassembly).
pub mod isa;
/// Program loader and run driver.
pub mod sim;
/// Run statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or parse from JSON.
pub use crate::config::Config;
/// Main machine type.
pub use crate::core::Cpu;
/// Run driver; construct with `Simulator::new`.
pub use crate::sim::Simulator;
