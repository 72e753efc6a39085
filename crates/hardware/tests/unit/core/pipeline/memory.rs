//! Memory Stage Tests.

use crate::common::builder::instruction::*;
use crate::common::harness::TestContext;
use mipsim_core::core::pipeline::latches::PipeOp;
use mipsim_core::core::pipeline::stages::decode::decode;
use mipsim_core::core::pipeline::stages::mem_stage;

const DATA: u32 = 0x1000_0000;

fn mem_op(inst: u32, addr: u32, value: u32) -> PipeOp {
    let mut op = PipeOp {
        pc: 0x0040_0000,
        inst,
        ..PipeOp::default()
    };
    decode(&mut op);
    op.mem_addr = addr;
    op.mem_value = value;
    op
}

#[test]
fn non_memory_op_passes_through_without_probing() {
    let mut ctx = TestContext::new();
    let cpu = ctx.cpu_mut();
    cpu.ex_mem = Some(PipeOp {
        dst: Some(8),
        dst_value: 7,
        dst_ready: true,
        ..PipeOp::default()
    });
    mem_stage(cpu);
    assert_eq!(cpu.mem_wb.as_ref().map(|op| op.dst_value), Some(7));
    assert_eq!(cpu.stats.dcache_hits + cpu.stats.dcache_misses, 0);
}

#[test]
fn load_value_is_not_yet_forwardable() {
    let mut ctx = TestContext::new().poke(DATA, 0x1234_5678).warm_dcache(DATA);
    let cpu = ctx.cpu_mut();
    cpu.ex_mem = Some(mem_op(lw(8, 0, 0), DATA, 0));
    mem_stage(cpu);

    let op = cpu.mem_wb.as_ref().expect("load completed");
    assert_eq!(op.dst_value, 0x1234_5678);
    assert!(!op.dst_ready);
    assert_eq!(cpu.stats.dcache_hits, 1);
}

#[test]
fn byte_loads_extend_by_opcode() {
    let mut ctx = TestContext::new().poke(DATA, 0x0000_8000).warm_dcache(DATA);
    let cpu = ctx.cpu_mut();

    cpu.ex_mem = Some(mem_op(lb(8, 0, 1), DATA + 1, 0));
    mem_stage(cpu);
    assert_eq!(cpu.mem_wb.take().map(|op| op.dst_value), Some(0xFFFF_FF80));

    cpu.ex_mem = Some(mem_op(lbu(8, 0, 1), DATA + 1, 0));
    mem_stage(cpu);
    assert_eq!(cpu.mem_wb.take().map(|op| op.dst_value), Some(0x80));
}

#[test]
fn byte_store_merges_into_word() {
    let mut ctx = TestContext::new().poke(DATA, 0x1122_3344).warm_dcache(DATA);
    let cpu = ctx.cpu_mut();
    cpu.ex_mem = Some(mem_op(sb(8, 0, 2), DATA + 2, 0xAB));
    mem_stage(cpu);
    assert_eq!(ctx.peek(DATA), 0x11AB_3344);
}

#[test]
fn word_store_writes_aligned_address() {
    let mut ctx = TestContext::new().warm_dcache(DATA);
    let cpu = ctx.cpu_mut();
    cpu.ex_mem = Some(mem_op(sw(8, 0, 4), DATA + 4, 0xCAFE_F00D));
    mem_stage(cpu);
    assert_eq!(ctx.peek(DATA + 4), 0xCAFE_F00D);
}

#[test]
fn data_miss_holds_record_for_full_latency() {
    let mut ctx = TestContext::new().poke(DATA, 99);
    let cpu = ctx.cpu_mut();
    cpu.ex_mem = Some(mem_op(lw(8, 0, 0), DATA, 0));

    for _ in 0..50 {
        mem_stage(cpu);
        assert!(cpu.mem_wb.is_none());
        assert!(cpu.ex_mem.is_some());
    }
    assert_eq!(cpu.stats.stalls_mem, 50);
    assert_eq!(cpu.stats.dcache_misses, 1);
    assert!(cpu.l1_d_cache.contains(DATA));

    mem_stage(cpu);
    assert_eq!(cpu.mem_wb.as_ref().map(|op| op.dst_value), Some(99));
    assert!(!cpu.mem_miss.active);
}

#[test]
fn empty_latch_leaves_miss_counter_alone() {
    let mut ctx = TestContext::new();
    let cpu = ctx.cpu_mut();
    cpu.mem_miss.arm(5);
    mem_stage(cpu);
    assert_eq!(cpu.mem_miss.remaining, 5);
}
