//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the instruction pipeline. It commits
//! results to the register file and recognises the halt system call.

use tracing::info;

use crate::common::constants::INSTRUCTION_BYTES;
use crate::core::Cpu;
use crate::core::pipeline::latches::PipeOp;
use crate::isa::mips::{funct, opcodes as op};

/// Executes the writeback stage of the pipeline.
///
/// Writeback runs first in each cycle, so a result written here is visible to
/// an execute-stage register read in the same cycle. A SYSCALL whose `$v0`
/// equals the configured halt code stops the simulation and leaves the PC just
/// past it.
pub fn wb_stage(cpu: &mut Cpu) {
    let Some(op) = cpu.mem_wb.take() else {
        return;
    };

    if let Some(dst) = op.dst {
        cpu.regs.write(dst, op.dst_value);
    }
    cpu.stats.retired += 1;

    if is_halt(&op, cpu.halt_code) {
        cpu.pc = op.pc.wrapping_add(INSTRUCTION_BYTES);
        cpu.running = false;
        info!(pc = op.pc, cycles = cpu.stats.cycles, "halt syscall retired");
    }
}

const fn is_halt(op: &PipeOp, halt_code: u32) -> bool {
    op.opcode == op::OP_SPECIAL && op.subop == funct::SYSCALL && op.src1_value == halt_code
}
