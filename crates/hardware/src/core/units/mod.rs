//! Execution units and functional components.
//!
//! This module contains the functional blocks the pipeline stages drive:
//! the integer ALU and multiply/divide unit, the branch prediction unit,
//! the load/store lane logic and the tag-only caches.

/// Arithmetic Logic Unit and multiply/divide unit.
pub mod alu;

/// Branch Resolution Unit: gshare direction predictor and BTB.
pub mod bru;

/// Tag-only L1 caches with LRU replacement and miss timing.
pub mod cache;

/// Load/Store Unit for sub-word lane selection.
pub mod lsu;
