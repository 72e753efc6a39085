//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction for the three MIPS formats (R, I and J) from a
//! 32-bit instruction word.

/// Mask for the 6-bit opcode and function fields.
pub const OPCODE_MASK: u32 = 0x3F;
/// Mask for 5-bit register and shift-amount fields.
pub const REG_MASK: u32 = 0x1F;
/// Mask for the 16-bit immediate field.
pub const IMM16_MASK: u32 = 0xFFFF;
/// Mask for the 26-bit jump index field.
pub const TARGET_MASK: u32 = 0x03FF_FFFF;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Implemented for `u32` so decode can write `inst.rs()` directly on the raw word.
pub trait InstructionBits {
    /// Extracts the primary opcode (bits 31-26).
    fn opcode(&self) -> u32;

    /// Extracts the first source register (bits 25-21).
    fn rs(&self) -> usize;

    /// Extracts the second source, or I-type destination, register (bits 20-16).
    fn rt(&self) -> usize;

    /// Extracts the R-type destination register (bits 15-11).
    fn rd(&self) -> usize;

    /// Extracts the shift amount (bits 10-6).
    fn shamt(&self) -> u32;

    /// Extracts the SPECIAL function code (bits 5-0).
    fn funct(&self) -> u32;

    /// Extracts the raw 16-bit immediate, zero-extended.
    fn imm16(&self) -> u32;

    /// Extracts the 16-bit immediate, sign-extended to 32 bits.
    fn se_imm16(&self) -> u32;

    /// Extracts the 26-bit jump index already shifted left by two.
    ///
    /// The caller supplies the upper four bits from the PC of the jump.
    fn jump_target(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> 26) & OPCODE_MASK
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> 21) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> 16) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 11) & REG_MASK) as usize
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> 6) & REG_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn imm16(&self) -> u32 {
        self & IMM16_MASK
    }

    #[inline(always)]
    fn se_imm16(&self) -> u32 {
        i32::from(*self as u16 as i16) as u32
    }

    #[inline(always)]
    fn jump_target(&self) -> u32 {
        (self & TARGET_MASK) << 2
    }
}
