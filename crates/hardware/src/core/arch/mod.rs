//! MIPS architectural state.
//!
//! Only the integer register file lives here; HI/LO and the program counter are
//! owned by the register file wrapper and the CPU respectively.

/// General-Purpose Register file implementation.
pub mod gpr;
