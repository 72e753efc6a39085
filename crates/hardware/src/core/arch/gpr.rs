//! MIPS General-Purpose Register File.
//!
//! This module implements the 32-entry integer register file. It performs the following:
//! 1. **Storage:** Maintains registers `$0`-`$31` as 32-bit words.
//! 2. **Invariant Enforcement:** Register `$0` reads as zero and discards writes.
//! 3. **Debugging:** Formats the complete register state for dumps.

use std::fmt;

use crate::common::constants::{NUM_GPRS, ZERO_REG};
use crate::isa::abi;

/// General-Purpose Register file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; NUM_GPRS],
}

impl Gpr {
    /// Creates a register file with every register cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    ///
    /// # Returns
    ///
    /// The stored word. Register `$0` always returns 0.
    pub fn read(&self, idx: usize) -> u32 {
        if idx == ZERO_REG { 0 } else { self.regs[idx & (NUM_GPRS - 1)] }
    }

    /// Writes a general-purpose register. Writes to `$0` are discarded.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The word to store.
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != ZERO_REG {
            self.regs[idx & (NUM_GPRS - 1)] = val;
        }
    }
}

impl fmt::Display for Gpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..NUM_GPRS).step_by(2) {
            writeln!(
                f,
                "R{:<2} {:<5}= {:#010x}   R{:<2} {:<5}= {:#010x}",
                i,
                abi::name(i),
                self.read(i),
                i + 1,
                abi::name(i + 1),
                self.read(i + 1)
            )?;
        }
        Ok(())
    }
}
