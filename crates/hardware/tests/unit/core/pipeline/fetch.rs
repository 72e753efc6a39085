//! Fetch Stage Tests.

use crate::common::builder::instruction::*;
use crate::common::harness::TestContext;
use mipsim_core::config::Config;
use mipsim_core::core::pipeline::latches::PipeOp;
use mipsim_core::core::pipeline::stages::fetch_stage;

const BASE: u32 = 0x0040_0000;

#[test]
fn warm_fetch_fills_decode_latch_and_advances_pc() {
    let mut ctx = TestContext::new()
        .load_program(&[addiu(8, 0, 1), nop()])
        .warm_icache();
    let cpu = ctx.cpu_mut();
    fetch_stage(cpu);

    let op = cpu.if_id.as_ref().expect("instruction fetched");
    assert_eq!(op.pc, BASE);
    assert_eq!(op.inst, addiu(8, 0, 1));
    assert!(op.btb_miss, "cold BTB");
    assert!(!op.predicted_taken);
    assert_eq!(op.predicted_target, BASE + 4);
    assert_eq!(cpu.pc, BASE + 4);
    assert_eq!(cpu.stats.fetched, 1);
    assert_eq!(cpu.stats.icache_hits, 1);
}

#[test]
fn cold_miss_blocks_for_full_latency() {
    let mut ctx = TestContext::new().load_program(&[nop()]);
    let cpu = ctx.cpu_mut();

    fetch_stage(cpu);
    assert!(cpu.if_id.is_none());
    assert!(cpu.fetch_miss.active);
    assert_eq!(cpu.fetch_miss.remaining, 50);
    assert_eq!(cpu.stats.icache_misses, 1);

    for _ in 1..50 {
        fetch_stage(cpu);
        assert!(cpu.if_id.is_none());
    }
    assert_eq!(cpu.stats.stalls_fetch, 50);
    assert!(cpu.l1_i_cache.contains(BASE), "block installed before release");

    fetch_stage(cpu);
    assert!(cpu.if_id.is_some());
    assert!(!cpu.fetch_miss.active);
    assert_eq!(cpu.stats.icache_misses, 1);
}

#[test]
fn full_decode_latch_holds_pc() {
    let mut ctx = TestContext::new().load_program(&[nop()]).warm_icache();
    let cpu = ctx.cpu_mut();
    cpu.if_id = Some(PipeOp::default());
    fetch_stage(cpu);
    assert_eq!(cpu.pc, BASE);
    assert_eq!(cpu.stats.fetched, 0);
    assert_eq!(cpu.stats.stalls_fetch, 0);
}

#[test]
fn miss_countdown_runs_while_decode_is_backed_up() {
    let mut ctx = TestContext::new().load_program(&[nop()]);
    let cpu = ctx.cpu_mut();
    cpu.if_id = Some(PipeOp::default());
    for _ in 0..10 {
        fetch_stage(cpu);
    }
    assert_eq!(cpu.fetch_miss.remaining, 41);
    assert_eq!(cpu.stats.stalls_fetch, 0);
}

#[test]
fn miss_starting_with_data_miss_waits_for_both() {
    let mut ctx = TestContext::new().load_program(&[nop()]);
    let cpu = ctx.cpu_mut();
    cpu.mem_miss.arm(50);
    fetch_stage(cpu);
    assert_eq!(cpu.fetch_miss.remaining, 100);
}

#[test]
fn uncoupled_miss_keeps_its_own_latency() {
    let mut config = Config::default();
    config.pipeline.miss_coupling = false;
    let mut ctx = TestContext::with_config(config).load_program(&[nop()]);
    let cpu = ctx.cpu_mut();
    cpu.mem_miss.arm(50);
    fetch_stage(cpu);
    assert_eq!(cpu.fetch_miss.remaining, 50);
}

#[test]
fn data_miss_already_in_progress_does_not_extend() {
    let mut ctx = TestContext::new().load_program(&[nop()]);
    let cpu = ctx.cpu_mut();
    cpu.mem_miss.arm(50);
    cpu.mem_miss.tick();
    fetch_stage(cpu);
    assert_eq!(cpu.fetch_miss.remaining, 50);
}

#[test]
fn trained_btb_redirects_fetch() {
    let mut ctx = TestContext::new().load_program(&[j(0x0040_0010)]).warm_icache();
    let cpu = ctx.cpu_mut();
    let slot = cpu.branch_unit.btb().index(BASE);
    cpu.branch_unit.record_target(slot, BASE, 0x0040_0010, false);

    fetch_stage(cpu);
    let op = cpu.if_id.as_ref().expect("instruction fetched");
    assert!(op.predicted_taken);
    assert!(!op.btb_miss);
    assert_eq!(op.predicted_target, 0x0040_0010);
    assert_eq!(cpu.pc, 0x0040_0010);
}
