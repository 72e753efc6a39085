//! Main Execution Loop.
//!
//! This module implements the core execution cycle of the CPU. It performs the following:
//! 1. **Pipeline Coordination:** Runs the stages in reverse order once per cycle.
//! 2. **Recovery:** Applies the redirect a stage requested, after every stage has run.
//! 3. **Observability:** Progress logging and the per-cycle pipeline diagram.

use std::fmt::Write as _;

use tracing::{Level, debug, info, trace};

use super::Cpu;
use crate::core::pipeline::latches::Latch;
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage,
};

impl Cpu {
    /// Advances the pipeline by exactly one cycle.
    ///
    /// Writeback runs first; if it retires the halt system call nothing else runs
    /// this cycle. Otherwise memory, execute, decode and fetch follow, and any
    /// pending recovery is applied last. Calling this after halt is not guarded.
    pub fn tick(&mut self) {
        self.stats.cycles += 1;
        if self.progress_interval != 0 && self.stats.cycles.is_multiple_of(self.progress_interval) {
            info!(cycle = self.stats.cycles, retired = self.stats.retired, "progress");
        }
        if tracing::enabled!(Level::TRACE) {
            trace!("cycle {}\n{}", self.stats.cycles, self.pipeline_snapshot());
        }

        wb_stage(self);
        if !self.running {
            return;
        }
        mem_stage(self);
        execute_stage(self);
        decode_stage(self);
        fetch_stage(self);

        self.apply_recovery();
    }

    /// Applies the recovery requested this cycle, if any.
    ///
    /// Sets the PC to the redirect target and squashes the requested number of
    /// stages. An outstanding instruction-cache miss is abandoned when the PC
    /// actually changes, unless the request asked to keep it.
    pub fn apply_recovery(&mut self) {
        let Some(req) = self.recovery.take() else {
            return;
        };

        if req.target != self.pc && !req.preserve_fetch_miss {
            self.fetch_miss.reset();
        }
        self.pc = req.target;

        if req.depth >= 2 {
            self.if_id = None;
        }
        if req.depth >= 3 {
            self.id_ex = None;
        }
        if req.depth >= 4 {
            self.ex_mem = None;
        }
        if req.depth >= 5 {
            self.mem_wb = None;
        }

        self.stats.squashed += 1;
        debug!(target = req.target, depth = req.depth, "pipeline recovered");
    }

    /// Renders the four latches, one line each, with disassembly.
    pub fn pipeline_snapshot(&self) -> String {
        let mut out = String::new();
        let rows: [(&str, &Latch); 4] = [
            ("DCODE", &self.if_id),
            ("EXEC ", &self.id_ex),
            ("MEM  ", &self.ex_mem),
            ("WB   ", &self.mem_wb),
        ];
        for (name, latch) in rows {
            let _ = match latch {
                Some(op) => writeln!(out, "{name}: {op}"),
                None => writeln!(out, "{name}: (null)"),
            };
        }
        out
    }
}
