//! Global simulator constants.
//!
//! This module defines values that are fixed by the MIPS encoding rather than by
//! configuration:
//! 1. **Instruction Constants:** Word size and alignment masks.
//! 2. **Register Constants:** Register count and the hard-wired zero register.
//! 3. **Counter Constants:** Saturation bounds for two-bit predictor counters.

/// Size of every instruction in bytes.
pub const INSTRUCTION_BYTES: u32 = 4;

/// Mask that clears the byte offset of an address, yielding the containing word.
pub const WORD_ALIGN_MASK: u32 = !0x3;

/// Number of general-purpose registers.
pub const NUM_GPRS: usize = 32;

/// Index of the hard-wired zero register.
pub const ZERO_REG: usize = 0;

/// Upper bound of a two-bit saturating counter.
pub const COUNTER_MAX: u8 = 3;

/// Counter value at and above which a branch is predicted taken.
pub const COUNTER_TAKEN_THRESHOLD: u8 = 2;
