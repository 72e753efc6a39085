//! Branch Target Buffer Tests.

use mipsim_core::core::units::bru::btb::{Btb, BtbEntry};

#[test]
fn starts_empty() {
    let btb = Btb::new(1024);
    let e = btb.entry(btb.index(0x0040_0000));
    assert_eq!(e, BtbEntry::default());
}

#[test]
fn index_uses_word_address_bits() {
    let btb = Btb::new(1024);
    assert_eq!(btb.index(0x0040_0008), 2);
    assert_eq!(btb.index(0x0040_1008), 2, "4 KiB apart aliases");
    assert_eq!(btb.index(0x0040_0FFC), 1023);
}

#[test]
fn update_overwrites_slot() {
    let mut btb = Btb::new(16);
    let a = BtbEntry {
        tag: 0x0040_0000,
        target: 0x0040_0100,
        valid: true,
        conditional: true,
    };
    let b = BtbEntry {
        tag: 0x0040_0040,
        target: 0x0040_0200,
        valid: true,
        conditional: false,
    };
    btb.update(btb.index(a.tag), a);
    assert_eq!(btb.entry(0), a);
    btb.update(btb.index(b.tag), b);
    assert_eq!(btb.entry(0), b, "same slot, latest update wins");
}

#[test]
fn size_rounds_up_to_power_of_two() {
    let btb = Btb::new(12);
    assert_eq!(btb.index(15 << 2), 15);
    assert_eq!(btb.index(16 << 2), 0);
}
