//! Branch Unit Tests.
//!
//! Prediction as fetch sees it, before and after execute-time training.

use mipsim_core::config::Config;
use mipsim_core::core::units::bru::BranchUnit;

const PC: u32 = 0x0040_0008;
const TARGET: u32 = 0x0040_0100;

fn unit() -> BranchUnit {
    BranchUnit::new(&Config::default())
}

#[test]
fn cold_prediction_falls_through_with_btb_miss() {
    let p = unit().predict(PC);
    assert!(p.btb_miss);
    assert!(!p.taken);
    assert_eq!(p.next_pc, PC + 4);
    assert_eq!(p.btb_index, 2);
    assert_eq!(p.pht_index, 2);
}

#[test]
fn unconditional_jump_predicted_taken_once_recorded() {
    let mut bu = unit();
    let p = bu.predict(PC);
    bu.record_target(p.btb_index, PC, TARGET, false);

    let p = bu.predict(PC);
    assert!(!p.btb_miss);
    assert!(p.taken);
    assert_eq!(p.next_pc, TARGET);
}

#[test]
fn conditional_branch_needs_counter_at_two() {
    // No history, so the pattern slot for PC never moves.
    let mut config = Config::default();
    config.pipeline.history_bits = 0;
    let mut bu = BranchUnit::new(&config);

    let p = bu.predict(PC);
    bu.record_target(p.btb_index, PC, TARGET, true);
    assert!(!bu.predict(PC).taken, "counter still 0");

    bu.train_direction(p.pht_index, true);
    assert!(!bu.predict(PC).taken, "counter 1 is weakly not-taken");

    bu.train_direction(p.pht_index, true);
    let p = bu.predict(PC);
    assert!(p.taken);
    assert_eq!(p.next_pc, TARGET);
    assert_eq!(bu.pht().counter(p.pht_index), 2);
}

#[test]
fn training_shifts_global_history() {
    let mut bu = unit();
    let before = bu.predict(PC).pht_index;
    bu.train_direction(before, true);
    assert_eq!(bu.pht().history(), 1);
    assert_ne!(bu.predict(PC).pht_index, before);
}

#[test]
fn targets_outside_program_window_are_invalid() {
    let mut bu = unit();
    let p = bu.predict(PC);
    bu.record_target(p.btb_index, PC, 0x1000_0000, false);
    let e = bu.btb().entry(p.btb_index);
    assert!(!e.valid);
    // The tag still matches, so fetch follows it.
    let again = bu.predict(PC);
    assert!(!again.btb_miss);
    assert_eq!(again.next_pc, 0x1000_0000);
}

#[test]
fn valid_entry_hits_for_aliasing_pc() {
    let mut bu = unit();
    let p = bu.predict(PC);
    bu.record_target(p.btb_index, PC, TARGET, false);
    let alias = PC + 4096;
    let q = bu.predict(alias);
    assert_eq!(q.btb_index, p.btb_index);
    assert!(!q.btb_miss);
    assert!(q.taken);
}
