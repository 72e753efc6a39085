//! Memory Access (MEM) Stage.
//!
//! This module implements the Memory stage of the instruction pipeline.
//! It performs the following:
//! 1. **Cache Timing:** Probes the data cache and holds the record through a miss.
//! 2. **Loads:** Reads the aligned word and extracts the addressed byte or halfword.
//! 3. **Stores:** Writes the word, merging narrow stores into the old contents.

use tracing::{debug, trace};

use crate::common::constants::WORD_ALIGN_MASK;
use crate::core::Cpu;
use crate::core::pipeline::latches::PipeOp;
use crate::core::units::lsu::Lsu;

/// Executes the memory stage of the pipeline.
///
/// Non-memory records pass straight through to the writeback latch. A load's
/// value is placed in the record but is not forwardable until the record has
/// moved on, which is what costs a dependent instruction its one-cycle bubble.
pub fn mem_stage(cpu: &mut Cpu) {
    let Some((addr, is_mem)) = cpu.ex_mem.as_ref().map(|op| (op.mem_addr, op.is_mem)) else {
        return;
    };

    cpu.mem_miss.tick();
    if !cpu.mem_miss.active && is_mem {
        if cpu.l1_d_cache.probe(addr) {
            cpu.stats.dcache_hits += 1;
        } else {
            cpu.mem_miss.arm(cpu.l1_d_cache.miss_latency);
            cpu.stats.dcache_misses += 1;
            debug!(addr, latency = cpu.l1_d_cache.miss_latency, "L1-D miss");
        }
    }

    if cpu.mem_miss.fill_due()
        && let Some(evicted) = cpu.l1_d_cache.install(addr)
    {
        trace!(addr, evicted, "L1-D eviction");
    }

    if cpu.mem_miss.blocking() {
        cpu.stats.stalls_mem += 1;
        return;
    }
    cpu.mem_miss.release_if_done();

    let Some(mut op) = cpu.ex_mem.take() else {
        return;
    };
    if op.is_mem {
        access(cpu, &mut op);
    }
    cpu.mem_wb = Some(op);
}

fn access(cpu: &mut Cpu, op: &mut PipeOp) {
    let word_addr = op.mem_addr & WORD_ALIGN_MASK;
    if op.is_store {
        let word = if Lsu::needs_merge(op.opcode) {
            let old = cpu.mem.read_u32(word_addr);
            Lsu::store_word(op.opcode, op.mem_addr, old, op.mem_value)
        } else {
            op.mem_value
        };
        cpu.mem.write_u32(word_addr, word);
        trace!(addr = op.mem_addr, word, "store");
    } else {
        let word = cpu.mem.read_u32(word_addr);
        op.dst_value = Lsu::load_value(op.opcode, op.mem_addr, word);
        trace!(addr = op.mem_addr, value = op.dst_value, "load");
    }
}
