//! Architectural Register File.
//!
//! This module provides the `RegisterFile` struct, a single owner for all
//! user-visible integer state. It provides:
//! 1. **Unified Storage:** The 32 GPRs plus the HI/LO multiply/divide result pair.
//! 2. **Abstraction:** One set of accessors used by writeback, execute and the driver.
//! 3. **Observability:** A text dump of every register for `rdump`-style output.

use std::fmt;

use crate::core::arch::gpr::Gpr;

/// General-purpose registers plus HI and LO.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    gpr: Gpr,
    /// High word of the last multiply, or the remainder of the last divide.
    pub hi: u32,
    /// Low word of the last multiply, or the quotient of the last divide.
    pub lo: u32,
}

impl RegisterFile {
    /// Creates a register file with every register, HI and LO cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register; `$0` always returns 0.
    pub fn read(&self, idx: usize) -> u32 {
        self.gpr.read(idx)
    }

    /// Writes a general-purpose register; writes to `$0` are discarded.
    pub fn write(&mut self, idx: usize, val: u32) {
        self.gpr.write(idx, val);
    }
}

impl fmt::Display for RegisterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.gpr)?;
        writeln!(f, "HI       = {:#010x}   LO       = {:#010x}", self.hi, self.lo)
    }
}
