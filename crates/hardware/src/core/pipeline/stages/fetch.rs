//! Instruction Fetch (IF) Stage.
//!
//! Fetch probes the instruction cache for the current PC, waits out a miss, reads
//! the instruction word and asks the branch unit where to go next. It is the last
//! stage to run in a cycle, so it sees the decode latch already drained.

use tracing::{debug, trace};

use crate::common::constants::WORD_ALIGN_MASK;
use crate::core::Cpu;
use crate::core::pipeline::latches::PipeOp;

/// Executes the fetch stage of the pipeline.
///
/// Cache timing runs every cycle, even when the decode latch is full, so a miss
/// keeps counting down while the pipeline is backed up. When the data cache began
/// a miss this very cycle and miss coupling is enabled, a new instruction miss
/// waits for the data fill as well as its own.
pub fn fetch_stage(cpu: &mut Cpu) {
    let pc = cpu.pc;

    cpu.fetch_miss.tick();
    if !cpu.fetch_miss.active {
        if cpu.l1_i_cache.probe(pc) {
            cpu.stats.icache_hits += 1;
        } else {
            let mut latency = cpu.l1_i_cache.miss_latency;
            if cpu.miss_coupling
                && cpu.mem_miss.active
                && cpu.mem_miss.remaining == cpu.l1_d_cache.miss_latency
            {
                latency += cpu.l1_i_cache.miss_latency;
            }
            cpu.fetch_miss.arm(latency);
            cpu.stats.icache_misses += 1;
            debug!(pc, latency, "L1-I miss");
        }
    }

    if cpu.fetch_miss.fill_due()
        && let Some(evicted) = cpu.l1_i_cache.install(pc)
    {
        trace!(pc, evicted, "L1-I eviction");
    }

    if cpu.if_id.is_some() {
        return;
    }
    if cpu.fetch_miss.blocking() {
        cpu.stats.stalls_fetch += 1;
        return;
    }
    cpu.fetch_miss.release_if_done();

    let inst = cpu.mem.read_u32(pc & WORD_ALIGN_MASK);
    let prediction = cpu.branch_unit.predict(pc);
    let op = PipeOp::fetched(pc, inst, &prediction);
    trace!(pc, next_pc = prediction.next_pc, "fetched {op}");

    cpu.pc = prediction.next_pc;
    cpu.if_id = Some(op);
    cpu.stats.fetched += 1;
}
