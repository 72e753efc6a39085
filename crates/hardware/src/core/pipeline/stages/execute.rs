//! Execute (EX) Stage.
//!
//! This module implements the Execute stage of the instruction pipeline.
//! It performs the following:
//! 1. **Operand Read:** Sources are taken from the bypass network or the register file.
//! 2. **Computation:** ALU results, HI/LO operations, effective addresses and branch outcomes.
//! 3. **Prediction Training:** The pattern table and BTB learn from every resolved branch.
//! 4. **Misprediction Detection:** A wrong guess arms a three-stage recovery.

use tracing::debug;

use crate::common::constants::INSTRUCTION_BYTES;
use crate::core::Cpu;
use crate::core::pipeline::hazards::resolve_operands;
use crate::core::pipeline::latches::PipeOp;
use crate::core::pipeline::recovery::RecoveryRequest;
use crate::core::units::alu::Alu;
use crate::isa::mips::{funct, opcodes as op};

/// Stages squashed by an execute-time redirect (fetch, decode and execute inputs).
pub const MISPREDICT_FLUSH_DEPTH: u8 = 3;

/// Executes the execute stage of the pipeline.
///
/// The multiply/divide busy counter advances first, every cycle. The record in the
/// execute latch then stays put if the memory latch is full, an operand is not yet
/// forwardable, or it needs HI/LO while the multiply/divide unit is busy.
pub fn execute_stage(cpu: &mut Cpu) {
    cpu.muldiv.tick();

    if cpu.ex_mem.is_some() {
        return;
    }
    let Some(mut op) = cpu.id_ex.take() else {
        return;
    };

    let producers = [cpu.ex_mem.as_ref(), cpu.mem_wb.as_ref()];
    if let Err(hazard) = resolve_operands(&mut op, &producers, &cpu.regs) {
        debug!(pc = op.pc, reg = hazard.reg, "data hazard stall");
        cpu.stats.stalls_data += 1;
        cpu.id_ex = Some(op);
        return;
    }

    let (a, b) = (op.src1_value, op.src2_value);
    match op.opcode {
        op::OP_SPECIAL => {
            if !execute_special(cpu, &mut op) {
                cpu.stats.stalls_muldiv += 1;
                cpu.id_ex = Some(op);
                return;
            }
        }
        op::OP_BRSPEC | op::OP_BEQ | op::OP_BNE | op::OP_BLEZ | op::OP_BGTZ => {
            op.taken = Alu::branch_taken(op.opcode, op.subop, a, b);
        }
        op::OP_LB | op::OP_LH | op::OP_LW | op::OP_LBU | op::OP_LHU => {
            op.mem_addr = a.wrapping_add(op.se_imm16);
        }
        op::OP_SB | op::OP_SH | op::OP_SW => {
            op.mem_addr = a.wrapping_add(op.se_imm16);
            op.mem_value = b;
        }
        opcode => {
            if let Some(value) = Alu::immediate(opcode, a, op.imm16, op.se_imm16) {
                op.dst_value = value;
                op.dst_ready = true;
            }
        }
    }

    if op.is_branch {
        cpu.stats.branches += 1;
        if op.is_conditional {
            cpu.branch_unit.train_direction(op.pht_index, op.taken);
        }
        cpu.branch_unit
            .record_target(op.btb_index, op.pc, op.branch_dest, op.is_conditional);
    }

    if needs_flush(&op) {
        cpu.stats.mispredictions += 1;
        let target = if op.taken {
            op.branch_dest
        } else {
            op.pc.wrapping_add(INSTRUCTION_BYTES)
        };
        // The instruction already being fetched is the right one; let its miss finish.
        let preserve_fetch_miss = cpu.fetch_miss.active
            && cpu.if_id.as_ref().is_some_and(|d| d.pc == op.branch_dest);
        debug!(
            pc = op.pc,
            taken = op.taken,
            predicted = op.predicted_taken,
            target,
            "misprediction"
        );
        cpu.recovery.request(RecoveryRequest {
            depth: MISPREDICT_FLUSH_DEPTH,
            target,
            preserve_fetch_miss,
        });
    }

    cpu.ex_mem = Some(op);
}

/// Runs a SPECIAL instruction.
///
/// # Returns
///
/// `false` if the instruction must wait for the multiply/divide unit.
fn execute_special(cpu: &mut Cpu, op: &mut PipeOp) -> bool {
    let (a, b) = (op.src1_value, op.src2_value);
    match op.subop {
        funct::JR | funct::JALR => {
            op.dst_value = op.pc.wrapping_add(INSTRUCTION_BYTES);
            op.branch_dest = a;
            op.taken = true;
        }
        funct::MFHI | funct::MFLO | funct::MTHI | funct::MTLO if cpu.muldiv.is_busy() => {
            return false;
        }
        funct::MFHI => op.dst_value = cpu.regs.hi,
        funct::MFLO => op.dst_value = cpu.regs.lo,
        funct::MTHI => cpu.regs.hi = a,
        funct::MTLO => cpu.regs.lo = a,
        funct::SYSCALL => {}
        f => {
            if let Some((hi, lo)) = cpu.muldiv.issue(f, a, b) {
                cpu.regs.hi = hi;
                cpu.regs.lo = lo;
            } else if let Some(value) = Alu::special(f, a, b, op.shamt) {
                op.dst_value = value;
            }
        }
    }
    op.dst_ready = true;
    true
}

/// Decides whether the prediction made at fetch for `op` was wrong.
///
/// A flush is needed when the resolved direction differs from the predicted one,
/// when a taken branch went somewhere other than where fetch went, or when the
/// BTB had nothing for a control-flow instruction.
pub const fn needs_flush(op: &PipeOp) -> bool {
    op.taken != op.predicted_taken
        || (op.is_branch && op.taken && op.predicted_target != op.branch_dest)
        || (op.is_branch && op.btb_miss)
}
