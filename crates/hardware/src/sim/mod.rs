//! Simulation driver and program loading.
//!
//! Provides the loader that turns a program image into bytes, and the
//! [`Simulator`] that runs a loaded machine with tracing, a step ceiling and
//! statistics.

/// Program image parsing and file loading.
pub mod loader;

/// Top-level run driver.
pub mod simulator;

pub use loader::LoadError;
pub use simulator::Simulator;
