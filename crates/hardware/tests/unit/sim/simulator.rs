//! Simulator Driver Tests.

use crate::common::builder::instruction::*;
use crate::common::harness::TestContext;
use mipsim_core::Simulator;
use mipsim_core::common::{LoadError, SimError};
use mipsim_core::config::Config;
use mipsim_core::isa::abi::*;
use mipsim_core::soc::MainMemory;

fn halting_program() -> Vec<u32> {
    vec![addiu(REG_V0, REG_ZERO, 10), syscall()]
}

#[test]
fn new_rejects_invalid_config() {
    let mut config = Config::default();
    config.cache.l1_i.sets = 3;
    assert!(Simulator::new(config, MainMemory::new()).is_err());
}

#[test]
fn starts_at_entry_point_and_running() {
    let ctx = TestContext::new();
    assert_eq!(ctx.cpu().pc, 0x0040_0000);
    assert!(ctx.sim.is_running());
    assert!(ctx.cpu().is_drained());
}

#[test]
fn load_program_places_words_at_text_base() {
    let mut ctx = TestContext::new().load_program(&halting_program());
    assert_eq!(ctx.peek(0x0040_0000), addiu(REG_V0, REG_ZERO, 10));
    assert_eq!(ctx.peek(0x0040_0004), syscall());
}

#[test]
fn load_program_rejects_oversized_image() {
    let mut config = Config::default();
    config.memory.text_size = 8;
    let mut sim = Simulator::new(config, MainMemory::new()).unwrap();
    assert!(matches!(
        sim.load_program(&[0; 3]),
        Err(LoadError::TooLarge {
            words: 3,
            capacity: 2
        })
    ));
}

#[test]
fn step_after_halt_is_refused() {
    let mut ctx = TestContext::new().load_program(&halting_program());
    let _ = ctx.run_until_halt();
    let cycles = ctx.stats().cycles;
    assert!(!ctx.sim.step());
    assert_eq!(ctx.stats().cycles, cycles);
}

#[test]
fn run_stops_early_on_halt() {
    let mut ctx = TestContext::new()
        .load_program(&halting_program())
        .warm_icache();
    let done = ctx.sim.run(1_000);
    assert_eq!(done, 6);
    assert!(!ctx.sim.is_running());
}

#[test]
fn run_respects_bound() {
    let mut ctx = TestContext::new().load_program(&halting_program());
    assert_eq!(ctx.sim.run(3), 3);
    assert!(ctx.sim.is_running());
}

#[test]
fn go_reports_cycle_limit() {
    // Spins on itself forever.
    let mut ctx = TestContext::new().load_program(&[j(0x0040_0000)]);
    match ctx.sim.go(Some(500)) {
        Err(SimError::CycleLimit { cycles }) => assert_eq!(cycles, 500),
        other => panic!("expected CycleLimit, got {other:?}"),
    }
}

#[test]
fn register_dump_includes_pc() {
    let mut ctx = TestContext::new().load_program(&halting_program());
    let _ = ctx.run_until_halt();
    let dump = ctx.sim.dump_registers();
    assert!(dump.starts_with("PC       = 0x00400008"));
    assert!(dump.contains("v0"));
}

#[test]
fn memory_dump_is_word_per_line() {
    let mut ctx = TestContext::new().load_program(&halting_program());
    let dump = ctx.sim.mdump(0x0040_0001, 0x0040_0004);
    let lines: Vec<&str> = dump.lines().collect();
    assert_eq!(
        lines,
        vec!["0x00400000: 0x2402000a", "0x00400004: 0x0000000c"]
    );
}

#[test]
fn snapshot_shows_bubbles_and_disassembly() {
    let mut ctx = TestContext::new()
        .load_program(&halting_program())
        .warm_icache();
    ctx.step(1);
    let snap = ctx.sim.pipeline_snapshot();
    assert!(snap.contains("DCODE: 0x00400000: addiu $v0, $zero, 10"));
    assert!(snap.contains("EXEC : (null)"));
}
