//! Instruction Set Architecture support.
//!
//! This module covers everything the pipeline needs to interpret a MIPS word:
//! 1. **Fields:** The `InstructionBits` trait extracting opcode, registers and immediates.
//! 2. **Tables:** Opcode, SPECIAL function and BRSPEC selector constants.
//! 3. **ABI:** Register names and the fixed registers used by SYSCALL and linking branches.
//! 4. **Disassembly:** Mnemonic rendering for traces and pipeline snapshots.

/// Register names and well-known register indices.
pub mod abi;

/// Text rendering of instruction words.
pub mod disasm;

/// Bit-field extraction for 32-bit instruction words.
pub mod instruction;

/// MIPS encoding tables.
pub mod mips;

pub use instruction::InstructionBits;
