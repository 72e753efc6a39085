//! Load/Store Lane Tests.

use mipsim_core::core::units::lsu::Lsu;
use mipsim_core::isa::mips::opcodes::*;
use rstest::rstest;

const WORD: u32 = 0x8899_AA7F;

#[rstest]
#[case(OP_LW, 0, WORD)]
#[case(OP_LBU, 0, 0x7F)]
#[case(OP_LB, 0, 0x7F)]
#[case(OP_LB, 1, 0xFFFF_FFAA)]
#[case(OP_LBU, 3, 0x88)]
#[case(OP_LH, 0, 0xFFFF_AA7F)]
#[case(OP_LHU, 2, 0x8899)]
#[case(OP_LH, 3, 0xFFFF_8899)]
fn load_lanes(#[case] opcode: u32, #[case] offset: u32, #[case] expected: u32) {
    assert_eq!(Lsu::load_value(opcode, 0x1000_0000 + offset, WORD), expected);
}

#[rstest]
#[case(OP_SB, 0, 0x1122_3344, 0x8899_AA44)]
#[case(OP_SB, 2, 0xFF, 0x88FF_AA7F)]
#[case(OP_SH, 0, 0xBEEF, 0x8899_BEEF)]
#[case(OP_SH, 2, 0x1_0001, 0x0001_AA7F)]
#[case(OP_SW, 1, 0xCAFE_F00D, 0xCAFE_F00D)]
fn store_merges(#[case] opcode: u32, #[case] offset: u32, #[case] value: u32, #[case] expected: u32) {
    assert_eq!(
        Lsu::store_word(opcode, 0x1000_0000 + offset, WORD, value),
        expected
    );
}

#[test]
fn only_narrow_stores_merge() {
    assert!(Lsu::needs_merge(OP_SB));
    assert!(Lsu::needs_merge(OP_SH));
    assert!(!Lsu::needs_merge(OP_SW));
}
