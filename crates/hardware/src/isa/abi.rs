//! MIPS O32 register names and well-known register indices.

/// Hard-wired zero.
pub const REG_ZERO: usize = 0;
/// First return value; holds the service number for SYSCALL.
pub const REG_V0: usize = 2;
/// Second return value; the second SYSCALL operand.
pub const REG_V1: usize = 3;
/// Stack pointer.
pub const REG_SP: usize = 29;
/// Return address written by JAL, BLTZAL and BGEZAL.
pub const REG_RA: usize = 31;

const NAMES: [&str; 32] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "t0", "t1", "t2", "t3", "t4", "t5", "t6",
    "t7", "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp", "sp",
    "fp", "ra",
];

/// Returns the ABI name for a register index, or `"??"` when out of range.
#[inline]
pub fn name(idx: usize) -> &'static str {
    NAMES.get(idx).copied().unwrap_or("??")
}
