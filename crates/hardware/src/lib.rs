//! MIPS five-stage pipeline timing simulator library.
//!
//! This crate models, cycle by cycle, an in-order MIPS pipeline with the following:
//! 1. **Core:** Fetch, decode, execute, memory and writeback stages with single-slot latches,
//!    a bypass network, and a misprediction recovery controller.
//! 2. **Units:** Tag-only instruction and data caches with LRU recency counters, a gshare
//!    pattern table with a branch-target buffer, and a fixed-latency HI/LO multiply/divide unit.
//! 3. **ISA:** Field extraction, opcode tables and a disassembler for the supported MIPS subset.
//! 4. **SoC:** The word-addressed memory seam and a region-mapped backing store.
//! 5. **Simulation:** Program loader, run/step driver, configuration and statistics.

/// Common types and constants (errors, register file, word geometry).
pub mod common;
/// Simulator configuration (defaults and JSON-deserialisable structures).
pub mod config;
/// CPU core (pipeline, architectural state, execution units).
pub mod core;
/// Instruction set (field extraction, opcode tables, ABI names, disassembly).
pub mod isa;
/// Program loader and the top-level simulation driver.
pub mod sim;
/// Memory seam and backing store.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds the register file, latches, caches, predictor and stats.
pub use crate::core::Cpu;
/// Driver that owns a `Cpu` and exposes run/step/go.
pub use crate::sim::Simulator;
/// Word-addressed memory interface consumed by the core.
pub use crate::soc::Memory;
