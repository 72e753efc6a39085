//! Pipeline Latch Definitions.
//!
//! Every latch holds at most one in-flight instruction record, [`PipeOp`]. A record
//! is created by fetch, filled in by decode and execute, and moved forward by
//! `Option::take` so that exactly one stage owns it at a time. Squashing a latch
//! drops the record and all of its pending side effects.

use std::fmt;

use crate::core::units::bru::Prediction;
use crate::isa::disasm::disassemble;

/// Latch between two stages; `None` is a bubble.
pub type Latch = Option<PipeOp>;

/// In-flight instruction record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PipeOp {
    /// Address the instruction was fetched from.
    pub pc: u32,
    /// Raw instruction word.
    pub inst: u32,

    /// Primary opcode.
    pub opcode: u32,
    /// SPECIAL function code or BRSPEC selector; 0 otherwise.
    pub subop: u32,
    /// Shift amount field.
    pub shamt: u32,
    /// Zero-extended 16-bit immediate.
    pub imm16: u32,
    /// Sign-extended 16-bit immediate.
    pub se_imm16: u32,

    /// First source register.
    pub src1: Option<usize>,
    /// Value of `src1` once execute has resolved it.
    pub src1_value: u32,
    /// Second source register.
    pub src2: Option<usize>,
    /// Value of `src2` once execute has resolved it.
    pub src2_value: u32,
    /// Destination register.
    pub dst: Option<usize>,
    /// Result destined for `dst`.
    pub dst_value: u32,
    /// `dst_value` may be forwarded to execute.
    pub dst_ready: bool,

    /// Control-flow instruction (branch or jump).
    pub is_branch: bool,
    /// Direction depends on register values.
    pub is_conditional: bool,
    /// Fetch redirected to `predicted_target`.
    pub predicted_taken: bool,
    /// Address fetch continued from after this instruction.
    pub predicted_target: u32,
    /// Resolved direction.
    pub taken: bool,
    /// Resolved target if taken.
    pub branch_dest: u32,
    /// Pattern table slot chosen at fetch.
    pub pht_index: usize,
    /// BTB slot chosen at fetch.
    pub btb_index: usize,
    /// The BTB had no usable entry at fetch.
    pub btb_miss: bool,

    /// Load or store.
    pub is_mem: bool,
    /// Store.
    pub is_store: bool,
    /// Effective address.
    pub mem_addr: u32,
    /// Value a store writes.
    pub mem_value: u32,
}

impl PipeOp {
    /// Creates the record fetch places into the decode latch.
    pub fn fetched(pc: u32, inst: u32, prediction: &Prediction) -> Self {
        Self {
            pc,
            inst,
            predicted_taken: prediction.taken,
            predicted_target: prediction.next_pc,
            pht_index: prediction.pht_index,
            btb_index: prediction.btb_index,
            btb_miss: prediction.btb_miss,
            ..Self::default()
        }
    }
}

impl fmt::Display for PipeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}: {}", self.pc, disassemble(self.inst, self.pc))
    }
}
