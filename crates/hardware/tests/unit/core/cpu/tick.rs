//! Cycle Driver Tests.

use crate::common::builder::instruction::*;
use crate::common::harness::TestContext;
use mipsim_core::core::pipeline::latches::PipeOp;
use mipsim_core::core::pipeline::recovery::RecoveryRequest;
use mipsim_core::isa::abi::*;

#[test]
fn first_cycle_only_fetches() {
    let mut ctx = TestContext::new()
        .load_program(&[addiu(8, 0, 1), addiu(9, 0, 2)])
        .warm_icache();
    ctx.step(1);
    let cpu = ctx.cpu();
    assert!(cpu.if_id.is_some());
    assert!(cpu.id_ex.is_none() && cpu.ex_mem.is_none() && cpu.mem_wb.is_none());
    assert_eq!(cpu.stats.cycles, 1);
}

#[test]
fn instructions_advance_one_stage_per_cycle() {
    let mut ctx = TestContext::new()
        .load_program(&[addiu(8, 0, 1), addiu(9, 0, 2), addiu(10, 0, 3)])
        .warm_icache();
    ctx.step(3);
    let cpu = ctx.cpu();
    assert_eq!(cpu.ex_mem.as_ref().map(|op| op.pc), Some(0x0040_0000));
    assert_eq!(cpu.id_ex.as_ref().map(|op| op.pc), Some(0x0040_0004));
    assert_eq!(cpu.if_id.as_ref().map(|op| op.pc), Some(0x0040_0008));
}

#[test]
fn writeback_result_is_visible_next_cycle() {
    let mut ctx = TestContext::new()
        .load_program(&[addiu(8, 0, 7)])
        .warm_icache();
    ctx.step(4);
    assert_eq!(ctx.get_reg(8), 0);
    ctx.step(1);
    assert_eq!(ctx.get_reg(8), 7);
    assert_eq!(ctx.stats().retired, 1);
}

#[test]
fn halting_cycle_runs_no_other_stage() {
    let mut ctx = TestContext::new()
        .load_program(&[addiu(REG_V0, 0, 10), syscall(), addiu(8, 0, 1)])
        .warm_icache();
    let _ = ctx.run_until_halt();
    let cpu = ctx.cpu();
    assert!(!cpu.running);
    assert!(cpu.ex_mem.is_some(), "memory stage did not run on the halting cycle");
    assert_eq!(cpu.stats.retired, 2);
}

#[test]
fn recovery_is_applied_after_fetch() {
    let mut ctx = TestContext::new()
        .load_program(&[nop(), nop(), nop()])
        .warm_icache();
    let cpu = ctx.cpu_mut();
    cpu.recovery.request(RecoveryRequest {
        depth: 2,
        target: 0x0040_0100,
        preserve_fetch_miss: false,
    });
    cpu.tick();
    assert_eq!(cpu.pc, 0x0040_0100);
    assert!(cpu.if_id.is_none(), "the word fetched this cycle was squashed");
    assert_eq!(cpu.stats.squashed, 1);
    assert!(cpu.recovery.pending().is_none());
}

#[test]
fn snapshot_lists_every_latch() {
    let mut ctx = TestContext::new();
    let cpu = ctx.cpu_mut();
    cpu.id_ex = Some(PipeOp {
        pc: 0x0040_0004,
        inst: addiu(8, 0, 1),
        ..PipeOp::default()
    });
    let snapshot = cpu.pipeline_snapshot();
    let lines: Vec<_> = snapshot.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "DCODE: (null)");
    assert!(lines[1].starts_with("EXEC : 0x00400004: "));
    assert_eq!(lines[2], "MEM  : (null)");
    assert_eq!(lines[3], "WB   : (null)");
}

#[test]
fn drained_only_while_latches_are_empty() {
    let mut ctx = TestContext::new()
        .load_program(&[addiu(REG_V0, 0, 10), syscall()])
        .warm_icache();
    assert!(ctx.cpu().is_drained());
    ctx.step(1);
    assert!(!ctx.cpu().is_drained());
}
