//! Instruction Decode (ID) Stage.
//!
//! Decode classifies the fetched word: which registers it reads and writes,
//! whether it is a branch or memory access, and its immediates. Registers are
//! not read here; execute reads them through the bypass network. Link values
//! for JAL, BLTZAL and BGEZAL are produced here and are ready at once.

use tracing::trace;

use crate::common::constants::INSTRUCTION_BYTES;
use crate::core::Cpu;
use crate::core::pipeline::latches::PipeOp;
use crate::isa::abi::{REG_RA, REG_V0, REG_V1};
use crate::isa::instruction::InstructionBits;
use crate::isa::mips::{funct, opcodes as op, regimm};

/// Executes the decode stage of the pipeline.
///
/// Moves the record in the decode latch to the execute latch. Does nothing while
/// the execute latch is occupied or the decode latch is empty.
pub fn decode_stage(cpu: &mut Cpu) {
    if cpu.id_ex.is_some() {
        return;
    }
    let Some(mut op) = cpu.if_id.take() else {
        return;
    };

    decode(&mut op);
    trace!(pc = op.pc, "decoded {op}");
    cpu.id_ex = Some(op);
}

/// Fills in the decoded fields of a fetched record.
///
/// Unknown opcodes decode to a record with no sources and no destination, which
/// flows through the pipeline with no effect.
pub fn decode(op: &mut PipeOp) {
    let inst = op.inst;
    let link = op.pc.wrapping_add(INSTRUCTION_BYTES);

    op.opcode = inst.opcode();
    op.shamt = inst.shamt();
    op.imm16 = inst.imm16();
    op.se_imm16 = inst.se_imm16();

    match op.opcode {
        op::OP_SPECIAL => {
            op.subop = inst.funct();
            op.src1 = Some(inst.rs());
            op.src2 = Some(inst.rt());
            op.dst = writes_rd(op.subop).then_some(inst.rd());
            match op.subop {
                // The halt check reads $v0 and $v1 at writeback.
                funct::SYSCALL => {
                    op.src1 = Some(REG_V0);
                    op.src2 = Some(REG_V1);
                }
                funct::JR | funct::JALR => {
                    op.is_branch = true;
                    op.is_conditional = false;
                }
                _ => {}
            }
        }
        op::OP_BRSPEC => {
            op.subop = inst.rt() as u32;
            // Unassigned selectors stay inert and never reach the predictor.
            if !matches!(
                op.subop,
                regimm::BLTZ | regimm::BGEZ | regimm::BLTZAL | regimm::BGEZAL
            ) {
                return;
            }
            op.src1 = Some(inst.rs());
            op.is_branch = true;
            op.is_conditional = true;
            op.branch_dest = branch_target(op.pc, op.se_imm16);
            if matches!(op.subop, regimm::BLTZAL | regimm::BGEZAL) {
                op.dst = Some(REG_RA);
                op.dst_value = link;
                op.dst_ready = true;
            }
        }
        op::OP_J | op::OP_JAL => {
            op.is_branch = true;
            op.is_conditional = false;
            op.taken = true;
            op.branch_dest = (op.pc & 0xF000_0000) | inst.jump_target();
            if op.opcode == op::OP_JAL {
                op.dst = Some(REG_RA);
                op.dst_value = link;
                op.dst_ready = true;
            }
        }
        op::OP_BEQ | op::OP_BNE | op::OP_BLEZ | op::OP_BGTZ => {
            op.src1 = Some(inst.rs());
            op.src2 = Some(inst.rt());
            op.is_branch = true;
            op.is_conditional = true;
            op.branch_dest = branch_target(op.pc, op.se_imm16);
        }
        op::OP_ADDI
        | op::OP_ADDIU
        | op::OP_SLTI
        | op::OP_SLTIU
        | op::OP_ANDI
        | op::OP_ORI
        | op::OP_XORI
        | op::OP_LUI => {
            op.src1 = Some(inst.rs());
            op.dst = Some(inst.rt());
        }
        op::OP_LB | op::OP_LH | op::OP_LW | op::OP_LBU | op::OP_LHU => {
            op.is_mem = true;
            op.src1 = Some(inst.rs());
            op.dst = Some(inst.rt());
        }
        op::OP_SB | op::OP_SH | op::OP_SW => {
            op.is_mem = true;
            op.is_store = true;
            op.src1 = Some(inst.rs());
            op.src2 = Some(inst.rt());
        }
        _ => {}
    }
}

const fn branch_target(pc: u32, se_imm16: u32) -> u32 {
    pc.wrapping_add(INSTRUCTION_BYTES)
        .wrapping_add(se_imm16 << 2)
}

/// SPECIAL functions whose result lands in `rd`.
const fn writes_rd(subop: u32) -> bool {
    matches!(
        subop,
        funct::SLL
            | funct::SRL
            | funct::SRA
            | funct::SLLV
            | funct::SRLV
            | funct::SRAV
            | funct::JALR
            | funct::MFHI
            | funct::MFLO
            | funct::ADD
            | funct::ADDU
            | funct::SUB
            | funct::SUBU
            | funct::AND
            | funct::OR
            | funct::XOR
            | funct::NOR
            | funct::SLT
            | funct::SLTU
    )
}
