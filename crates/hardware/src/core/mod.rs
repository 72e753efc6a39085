//! Core processor implementation.
//!
//! This module contains the main CPU implementation including the instruction
//! pipeline, execution units and architectural register storage.

/// Architectural register storage.
pub mod arch;

/// CPU core implementation and execution orchestration.
pub mod cpu;

/// Instruction pipeline implementation (stages, latches, hazards, recovery).
pub mod pipeline;

/// Execution units (ALU, multiply/divide, LSU, branch predictor, caches).
pub mod units;

pub use self::cpu::Cpu;
