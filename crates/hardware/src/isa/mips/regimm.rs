//! BRSPEC selectors (the `rt` field when opcode is 1).

/// Branch if less than zero.
pub const BLTZ: u32 = 0x00;
/// Branch if greater than or equal to zero.
pub const BGEZ: u32 = 0x01;
/// Branch if less than zero, linking `$ra`.
pub const BLTZAL: u32 = 0x10;
/// Branch if greater than or equal to zero, linking `$ra`.
pub const BGEZAL: u32 = 0x11;
