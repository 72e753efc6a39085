//! Least Recently Used (LRU) Replacement Policy.
//!
//! Each way carries a recency counter. Zero marks an empty way; an accessed way is
//! reset to 1 and every other occupied way in the set ages by one. The victim is the
//! first empty way, or else the occupied way with the largest counter.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `update()`: O(W) where W is the number of ways (associativity)
//!   - `get_victim()`: O(W)
//! - **Space Complexity:** O(S × W) where S is the number of sets
//! - **Hardware Cost:** High - one counter and incrementer per way
//! - **Best Case:** Working sets that fit in the associativity
//! - **Worst Case:** Cyclic scans one line larger than the set (every access misses)

use super::ReplacementPolicy;

/// LRU Policy state.
#[derive(Debug, Clone)]
pub struct LruPolicy {
    /// Flattened `sets × ways` recency counters.
    recency: Vec<u32>,
    ways: usize,
}

impl LruPolicy {
    /// Creates a new LRU policy instance with every way empty.
    ///
    /// # Arguments
    ///
    /// * `sets` - The number of sets in the cache.
    /// * `ways` - The associativity (number of ways) of the cache.
    pub fn new(sets: usize, ways: usize) -> Self {
        Self {
            recency: vec![0; sets * ways],
            ways,
        }
    }

    fn set_mut(&mut self, set: usize) -> &mut [u32] {
        let base = set * self.ways;
        &mut self.recency[base..base + self.ways]
    }
}

impl ReplacementPolicy for LruPolicy {
    /// Ages every occupied way in the set, then marks `way` most recently used.
    fn update(&mut self, set: usize, way: usize) {
        let counters = self.set_mut(set);
        for c in counters.iter_mut().filter(|c| **c != 0) {
            *c = c.saturating_add(1);
        }
        counters[way] = 1;
    }

    /// Returns the first empty way, otherwise the first way holding the largest counter.
    fn get_victim(&mut self, set: usize) -> usize {
        let counters = self.set_mut(set);
        if let Some(empty) = counters.iter().position(|&c| c == 0) {
            return empty;
        }
        let mut victim = 0;
        for (way, &c) in counters.iter().enumerate() {
            if c > counters[victim] {
                victim = way;
            }
        }
        victim
    }

    fn rank(&self, set: usize, way: usize) -> u32 {
        self.recency[set * self.ways + way]
    }
}
