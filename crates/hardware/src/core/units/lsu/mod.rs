//! Load/Store Unit (LSU).
//!
//! Memory is accessed a whole aligned word at a time. This module selects the
//! byte or halfword a load wants out of that word, and merges a narrow store
//! into it, using the low address bits as the little-endian lane.

use crate::isa::mips::opcodes as op;

/// Load/Store Unit (LSU) for sub-word memory operations.
#[derive(Debug)]
pub struct Lsu;

impl Lsu {
    /// Extracts the value a load writes to its destination register.
    ///
    /// # Arguments
    ///
    /// * `opcode` - One of LB, LBU, LH, LHU or LW.
    /// * `addr`   - Effective address; only bits 1-0 are used.
    /// * `word`   - The aligned word read from memory.
    ///
    /// # Returns
    ///
    /// The register value. LB and LH sign-extend; any other opcode returns `word`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::core::units::lsu::Lsu;
    /// use mipsim_core::isa::mips::opcodes::{OP_LB, OP_LHU};
    ///
    /// assert_eq!(Lsu::load_value(OP_LB, 0x1000_0003, 0x80FF_0000), 0xFFFF_FF80);
    /// assert_eq!(Lsu::load_value(OP_LHU, 0x1000_0002, 0x80FF_0000), 0x80FF);
    /// ```
    pub fn load_value(opcode: u32, addr: u32, word: u32) -> u32 {
        let byte = (word >> ((addr & 3) * 8)) & 0xFF;
        let half = (word >> ((addr & 2) * 8)) & 0xFFFF;
        match opcode {
            op::OP_LB => i32::from(byte as u8 as i8) as u32,
            op::OP_LBU => byte,
            op::OP_LH => i32::from(half as u16 as i16) as u32,
            op::OP_LHU => half,
            _ => word,
        }
    }

    /// Merges a store into the aligned word currently in memory.
    ///
    /// # Returns
    ///
    /// The word to write back. SW replaces the whole word.
    pub fn store_word(opcode: u32, addr: u32, old: u32, value: u32) -> u32 {
        match opcode {
            op::OP_SB => {
                let shift = (addr & 3) * 8;
                (old & !(0xFF << shift)) | ((value & 0xFF) << shift)
            }
            op::OP_SH => {
                let shift = (addr & 2) * 8;
                (old & !(0xFFFF << shift)) | ((value & 0xFFFF) << shift)
            }
            _ => value,
        }
    }

    /// Narrow stores need the old word before they can write.
    pub const fn needs_merge(opcode: u32) -> bool {
        matches!(opcode, op::OP_SB | op::OP_SH)
    }
}
