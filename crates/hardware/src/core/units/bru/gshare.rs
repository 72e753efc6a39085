//! GShare Direction Predictor.
//!
//! GShare correlates global branch history with the program counter using an XOR
//! hash. This allows the predictor to distinguish the same branch instruction
//! in different execution contexts.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `predict()`: O(1)
//!   - `update()`: O(1)
//! - **Space Complexity:** O(N) two-bit counters (256 by default)
//! - **Hardware Cost:** Low - single PHT lookup, XOR, and counter update
//! - **Best Case:** Correlated branches where outcome depends on recent history
//! - **Worst Case:** Many hot branches aliasing onto the same counters

use crate::common::constants::{COUNTER_MAX, COUNTER_TAKEN_THRESHOLD};

/// GShare Predictor structure.
#[derive(Debug, Clone)]
pub struct GSharePredictor {
    /// Global History Register storing recent conditional-branch outcomes.
    ghr: u32,
    /// Mask applied to the GHR after every shift.
    history_mask: u32,
    /// Pattern History Table containing 2-bit saturating counters.
    pht: Vec<u8>,
}

impl GSharePredictor {
    /// Creates a predictor with every counter at 0 (strongly not-taken) and empty history.
    ///
    /// # Arguments
    ///
    /// * `entries` - Pattern table size; must be a power of two.
    /// * `history_bits` - Width of the global history register.
    pub fn new(entries: usize, history_bits: u32) -> Self {
        Self {
            ghr: 0,
            history_mask: 1u32.checked_shl(history_bits).map_or(u32::MAX, |v| v - 1),
            pht: vec![0; entries.max(1).next_power_of_two()],
        }
    }

    /// Calculates the index into the Pattern History Table.
    ///
    /// XORs the word-aligned PC bits with the Global History Register.
    pub fn index(&self, pc: u32) -> usize {
        let mask = self.pht.len() - 1;
        (((pc >> 2) as usize) ^ self.ghr as usize) & mask
    }

    /// Current value of the counter at `idx`.
    pub fn counter(&self, idx: usize) -> u8 {
        self.pht[idx & (self.pht.len() - 1)]
    }

    /// Returns true if the counter at `idx` is 2 or 3 (Taken).
    pub fn predict(&self, idx: usize) -> bool {
        self.counter(idx) >= COUNTER_TAKEN_THRESHOLD
    }

    /// Trains the counter at `idx` with a resolved outcome.
    ///
    /// Saturates at 0 and 3, then shifts the outcome into the Global History Register.
    pub fn update(&mut self, idx: usize, taken: bool) {
        let slot = idx & (self.pht.len() - 1);
        let counter = self.pht[slot];

        if taken && counter < COUNTER_MAX {
            self.pht[slot] += 1;
        } else if !taken && counter > 0 {
            self.pht[slot] -= 1;
        }

        self.ghr = ((self.ghr << 1) | u32::from(taken)) & self.history_mask;
    }

    /// Current Global History Register contents.
    pub const fn history(&self) -> u32 {
        self.ghr
    }
}
