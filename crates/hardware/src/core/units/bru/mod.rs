//! Branch Resolution Unit (BRU).
//!
//! Combines the gshare direction predictor with the branch-target buffer. It provides:
//! 1. **Fetch-time prediction:** Table indices, BTB hit/miss, direction and next PC.
//! 2. **Execute-time training:** Counter and history updates for conditional branches,
//!    target recording for every control-flow instruction.

/// Branch Target Buffer for storing predicted branch targets.
pub mod btb;

/// Global history branch predictor (gshare algorithm).
pub mod gshare;

use tracing::trace;

use self::btb::{Btb, BtbEntry};
use self::gshare::GSharePredictor;
use crate::common::constants::INSTRUCTION_BYTES;
use crate::config::{Config, MemoryConfig};

/// Everything fetch learns about an instruction from the predictor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Prediction {
    /// Pattern table slot used for this PC and history.
    pub pht_index: usize,
    /// BTB slot for this PC.
    pub btb_index: usize,
    /// The BTB held nothing usable for this PC.
    pub btb_miss: bool,
    /// Fetch redirects to `next_pc` rather than falling through.
    pub taken: bool,
    /// Address fetch continues from.
    pub next_pc: u32,
}

/// Direction predictor plus target buffer.
#[derive(Debug, Clone)]
pub struct BranchUnit {
    pht: GSharePredictor,
    btb: Btb,
    window: MemoryConfig,
}

impl BranchUnit {
    /// Builds the predictor tables from the pipeline configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            pht: GSharePredictor::new(config.pipeline.pht_entries, config.pipeline.history_bits),
            btb: Btb::new(config.pipeline.btb_entries),
            window: config.memory.clone(),
        }
    }

    /// Predicts the instruction fetched at `pc`.
    ///
    /// The BTB hits when its tag equals `pc` or its entry is valid. The prediction is
    /// taken only on a hit whose entry is unconditional or whose counter is at least 2.
    pub fn predict(&self, pc: u32) -> Prediction {
        let pht_index = self.pht.index(pc);
        let btb_index = self.btb.index(pc);
        let entry = self.btb.entry(btb_index);

        let hit = entry.tag == pc || entry.valid;
        let taken = hit && (!entry.conditional || self.pht.predict(pht_index));
        let next_pc = if taken {
            entry.target
        } else {
            pc.wrapping_add(INSTRUCTION_BYTES)
        };

        Prediction {
            pht_index,
            btb_index,
            btb_miss: !hit,
            taken,
            next_pc,
        }
    }

    /// Trains direction state with a resolved conditional branch.
    pub fn train_direction(&mut self, pht_index: usize, taken: bool) {
        self.pht.update(pht_index, taken);
        trace!(pht_index, taken, ghr = self.pht.history(), "PHT trained");
    }

    /// Records the resolved target of any control-flow instruction.
    ///
    /// The entry is marked valid only if `target` lies in the program window.
    pub fn record_target(&mut self, btb_index: usize, pc: u32, target: u32, conditional: bool) {
        self.btb.update(
            btb_index,
            BtbEntry {
                tag: pc,
                target,
                valid: self.window.contains(target),
                conditional,
            },
        );
    }

    /// Read-only access to the direction predictor.
    pub const fn pht(&self) -> &GSharePredictor {
        &self.pht
    }

    /// Read-only access to the target buffer.
    pub const fn btb(&self) -> &Btb {
        &self.btb
    }
}
