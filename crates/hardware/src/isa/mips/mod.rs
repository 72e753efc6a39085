//! MIPS-I integer subset.
//!
//! Encoding tables for the instructions the pipeline models:
//! 1. **Opcodes:** Primary 6-bit opcodes in bits 31-26.
//! 2. **Funct:** SPECIAL (opcode 0) function codes in bits 5-0.
//! 3. **Regimm:** BRSPEC (opcode 1) branch selectors carried in the `rt` field.

/// SPECIAL function codes.
pub mod funct;
/// Primary opcode values.
pub mod opcodes;
/// BRSPEC branch selectors.
pub mod regimm;
