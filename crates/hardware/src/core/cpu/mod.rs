//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire processor state. It coordinates the following:
//! 1. **State Management:** Maintains registers, HI/LO, the program counter and the run flag.
//! 2. **Pipeline Control:** Owns the four single-slot latches and the recovery controller.
//! 3. **Memory Hierarchy:** Holds both tag-only L1 caches and their miss countdowns.
//! 4. **System Integration:** Reaches instruction and data words through the `Memory` seam.

/// Cycle driver, recovery application and pipeline diagram.
pub mod execution;

use std::fmt;

use crate::common::RegisterFile;
use crate::config::Config;
use crate::core::pipeline::latches::Latch;
use crate::core::pipeline::recovery::Recovery;
use crate::core::units::alu::muldiv::MulDivUnit;
use crate::core::units::bru::BranchUnit;
use crate::core::units::cache::{CacheSim, MissState};
use crate::soc::Memory;
use crate::stats::SimStats;

/// Main CPU structure containing all processor state and components.
///
/// The CPU moves instructions through the five-stage pipeline one cycle per
/// [`Cpu::tick`], times cache misses, predicts and resolves branches, and
/// tracks performance statistics.
pub struct Cpu {
    /// General-purpose registers plus HI and LO.
    pub regs: RegisterFile,
    /// Program Counter; the address fetch reads next.
    pub pc: u32,
    /// Cleared when the halt system call retires.
    pub running: bool,

    /// Instruction and data words.
    pub mem: Box<dyn Memory>,
    /// L1 Instruction Cache.
    pub l1_i_cache: CacheSim,
    /// L1 Data Cache.
    pub l1_d_cache: CacheSim,
    /// Outstanding instruction-cache miss.
    pub fetch_miss: MissState,
    /// Outstanding data-cache miss.
    pub mem_miss: MissState,

    /// IF/ID Latch (decode input).
    pub if_id: Latch,
    /// ID/EX Latch (execute input).
    pub id_ex: Latch,
    /// EX/MEM Latch (memory input).
    pub ex_mem: Latch,
    /// MEM/WB Latch (writeback input).
    pub mem_wb: Latch,

    /// Gshare predictor and BTB.
    pub branch_unit: BranchUnit,
    /// HI/LO producer.
    pub muldiv: MulDivUnit,
    /// Redirect requested this cycle.
    pub recovery: Recovery,

    /// `$v0` value that makes SYSCALL halt.
    pub halt_code: u32,
    /// Charge a second instruction-miss latency when it starts alongside a data miss.
    pub miss_coupling: bool,
    /// Cycles between progress log lines; 0 disables them.
    pub progress_interval: u64,

    /// Performance statistics.
    pub stats: SimStats,
}

impl fmt::Debug for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cpu")
            .field("pc", &format_args!("{:#010x}", self.pc))
            .field("running", &self.running)
            .field("if_id", &self.if_id)
            .field("id_ex", &self.id_ex)
            .field("ex_mem", &self.ex_mem)
            .field("mem_wb", &self.mem_wb)
            .field("cycles", &self.stats.cycles)
            .finish_non_exhaustive()
    }
}

impl Cpu {
    /// Creates a CPU with all state cleared and the PC at the program entry.
    ///
    /// # Arguments
    ///
    /// * `config` - Simulator configuration; expected to have passed `Config::validate`.
    /// * `mem`    - Backing store for instruction and data words.
    pub fn new(config: &Config, mem: Box<dyn Memory>) -> Self {
        Self {
            regs: RegisterFile::new(),
            pc: config.general.start_pc,
            running: true,
            mem,
            l1_i_cache: CacheSim::new(&config.cache.l1_i),
            l1_d_cache: CacheSim::new(&config.cache.l1_d),
            fetch_miss: MissState::default(),
            mem_miss: MissState::default(),
            if_id: None,
            id_ex: None,
            ex_mem: None,
            mem_wb: None,
            branch_unit: BranchUnit::new(config),
            muldiv: MulDivUnit::new(&config.pipeline),
            recovery: Recovery::default(),
            halt_code: config.general.halt_code,
            miss_coupling: config.pipeline.miss_coupling,
            progress_interval: config.general.progress_interval,
            stats: SimStats::default(),
        }
    }

    /// No instruction is in flight in any latch.
    pub const fn is_drained(&self) -> bool {
        self.if_id.is_none() && self.id_ex.is_none() && self.ex_mem.is_none() && self.mem_wb.is_none()
    }
}
