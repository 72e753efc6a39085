//! Instruction Field Extraction Tests.

use crate::common::builder::instruction::*;
use mipsim_core::isa::abi::*;
use mipsim_core::isa::instruction::InstructionBits;
use mipsim_core::isa::mips::{funct, opcodes};
use proptest::prelude::*;

#[test]
fn r_type_fields() {
    let w = addu(REG_V0, 8, 9);
    assert_eq!(w.opcode(), opcodes::OP_SPECIAL);
    assert_eq!(w.funct(), funct::ADDU);
    assert_eq!((w.rs(), w.rt(), w.rd()), (8, 9, REG_V0));
}

#[test]
fn shift_amount() {
    assert_eq!(sll(8, 9, 17).shamt(), 17);
}

#[test]
fn negative_immediate_sign_extends() {
    let w = addiu(8, 8, -1);
    assert_eq!(w.imm16(), 0xFFFF);
    assert_eq!(w.se_imm16(), 0xFFFF_FFFF);
}

#[test]
fn jump_index_is_shifted() {
    assert_eq!(jal(0x0040_0010).jump_target(), 0x0040_0010);
}

proptest! {
    #[test]
    fn se_imm16_preserves_low_half(w in any::<u32>()) {
        prop_assert_eq!(w.se_imm16() & 0xFFFF, w.imm16());
        let upper = w.se_imm16() >> 16;
        prop_assert!(upper == 0 || upper == 0xFFFF);
    }
}
