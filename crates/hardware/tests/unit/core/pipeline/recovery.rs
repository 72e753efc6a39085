//! Recovery Controller Tests.

use crate::common::harness::TestContext;
use mipsim_core::core::pipeline::latches::PipeOp;
use mipsim_core::core::pipeline::recovery::{Recovery, RecoveryRequest};
use rstest::rstest;

fn req(depth: u8, target: u32) -> RecoveryRequest {
    RecoveryRequest {
        depth,
        target,
        preserve_fetch_miss: false,
    }
}

fn marker(pc: u32) -> Option<PipeOp> {
    Some(PipeOp {
        pc,
        ..PipeOp::default()
    })
}

#[test]
fn first_request_in_a_cycle_wins() {
    let mut r = Recovery::default();
    r.request(req(3, 0x100));
    r.request(req(5, 0x200));
    assert_eq!(r.pending(), Some(&req(3, 0x100)));
    assert_eq!(r.take(), Some(req(3, 0x100)));
    assert_eq!(r.pending(), None);
}

#[rstest]
#[case(2, [false, true, true, true])]
#[case(3, [false, false, true, true])]
#[case(4, [false, false, false, true])]
#[case(5, [false, false, false, false])]
fn depth_selects_squashed_latches(#[case] depth: u8, #[case] survivors: [bool; 4]) {
    let mut ctx = TestContext::new();
    let cpu = ctx.cpu_mut();
    cpu.if_id = marker(1);
    cpu.id_ex = marker(2);
    cpu.ex_mem = marker(3);
    cpu.mem_wb = marker(4);

    cpu.recovery.request(req(depth, 0x0040_0100));
    cpu.apply_recovery();

    let alive = [
        cpu.if_id.is_some(),
        cpu.id_ex.is_some(),
        cpu.ex_mem.is_some(),
        cpu.mem_wb.is_some(),
    ];
    assert_eq!(alive, survivors);
    assert_eq!(cpu.pc, 0x0040_0100);
    assert_eq!(cpu.stats.squashed, 1);
    assert!(cpu.recovery.pending().is_none());
}

#[test]
fn nothing_pending_is_a_no_op() {
    let mut ctx = TestContext::new();
    let cpu = ctx.cpu_mut();
    cpu.if_id = marker(1);
    cpu.apply_recovery();
    assert!(cpu.if_id.is_some());
    assert_eq!(cpu.stats.squashed, 0);
    assert_eq!(cpu.pc, 0x0040_0000);
}

#[test]
fn redirect_abandons_instruction_miss() {
    let mut ctx = TestContext::new();
    let cpu = ctx.cpu_mut();
    cpu.fetch_miss.arm(50);
    cpu.recovery.request(req(3, 0x0040_0100));
    cpu.apply_recovery();
    assert!(!cpu.fetch_miss.active);
    assert_eq!(cpu.fetch_miss.remaining, 0);
}

#[test]
fn redirect_to_current_pc_keeps_instruction_miss() {
    let mut ctx = TestContext::new();
    let cpu = ctx.cpu_mut();
    cpu.fetch_miss.arm(50);
    let pc = cpu.pc;
    cpu.recovery.request(req(3, pc));
    cpu.apply_recovery();
    assert!(cpu.fetch_miss.active);
    assert_eq!(cpu.fetch_miss.remaining, 50);
}

#[test]
fn preserve_flag_keeps_instruction_miss() {
    let mut ctx = TestContext::new();
    let cpu = ctx.cpu_mut();
    cpu.fetch_miss.arm(50);
    cpu.recovery.request(RecoveryRequest {
        depth: 3,
        target: 0x0040_0100,
        preserve_fetch_miss: true,
    });
    cpu.apply_recovery();
    assert!(cpu.fetch_miss.active);
    assert_eq!(cpu.pc, 0x0040_0100);
}
