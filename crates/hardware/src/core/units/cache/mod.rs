//! Set-Associative Cache Timing Model.
//!
//! This module implements a tag-only set-associative cache. It holds no data; the
//! pipeline reads memory directly and consults the cache only to decide how long
//! an access takes. It provides:
//! 1. **Lookup:** Combinational hit/miss probes that refresh LRU recency on a hit.
//! 2. **Fill:** Installation of a missing block into the first empty way or the LRU victim.
//! 3. **Miss timing:** [`MissState`], the countdown a stage holds while a miss is serviced.

/// Cache replacement policy implementations.
pub mod policies;

use self::policies::{LruPolicy, ReplacementPolicy};
use crate::config::CacheConfig;

/// Cache line entry: tag and validity only.
#[derive(Clone, Copy, Debug, Default)]
struct CacheLine {
    tag: u32,
    valid: bool,
}

/// Cache simulator implementing a tag-only set-associative cache with LRU replacement.
pub struct CacheSim {
    /// Stall cycles charged for a miss.
    pub miss_latency: u32,
    lines: Vec<CacheLine>,
    num_sets: usize,
    ways: usize,
    offset_bits: u32,
    index_bits: u32,
    policy: Box<dyn ReplacementPolicy>,
}

impl std::fmt::Debug for CacheSim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheSim")
            .field("sets", &self.num_sets)
            .field("ways", &self.ways)
            .field("line_bytes", &(1u32 << self.offset_bits))
            .field("miss_latency", &self.miss_latency)
            .finish_non_exhaustive()
    }
}

impl CacheSim {
    /// Creates a new cache simulator with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Cache geometry. Set count and line size must be powers of two
    ///   (enforced by `Config::validate`); zero ways is treated as one.
    ///
    /// # Returns
    ///
    /// A new `CacheSim` with every way empty.
    pub fn new(config: &CacheConfig) -> Self {
        let ways = config.ways.max(1);
        let num_sets = config.sets.max(1).next_power_of_two() as usize;
        let line_bytes = config.line_bytes.max(4).next_power_of_two();

        Self {
            miss_latency: config.miss_latency,
            lines: vec![CacheLine::default(); num_sets * ways],
            num_sets,
            ways,
            offset_bits: line_bytes.trailing_zeros(),
            index_bits: num_sets.trailing_zeros(),
            policy: Box::new(LruPolicy::new(num_sets, ways)),
        }
    }

    /// Splits an address into its set index and tag.
    ///
    /// # Arguments
    ///
    /// * `addr` - Byte address.
    ///
    /// # Returns
    ///
    /// `(set, tag)` where `set < num_sets`.
    #[inline]
    pub fn locate(&self, addr: u32) -> (usize, u32) {
        let set = ((addr >> self.offset_bits) as usize) & (self.num_sets - 1);
        let tag = addr
            .checked_shr(self.offset_bits + self.index_bits)
            .unwrap_or(0);
        (set, tag)
    }

    fn way_of(&self, set: usize, tag: u32) -> Option<usize> {
        let base = set * self.ways;
        self.lines[base..base + self.ways]
            .iter()
            .position(|l| l.valid && l.tag == tag)
    }

    /// Checks whether the block holding `addr` is present, without touching recency.
    pub fn contains(&self, addr: u32) -> bool {
        let (set, tag) = self.locate(addr);
        self.way_of(set, tag).is_some()
    }

    /// Probes the cache for `addr`.
    ///
    /// A hit counts as an access and makes the way most recently used.
    ///
    /// # Returns
    ///
    /// `true` on a hit, `false` on a miss. A miss changes no state; the caller
    /// installs the block later with [`CacheSim::install`].
    pub fn probe(&mut self, addr: u32) -> bool {
        let (set, tag) = self.locate(addr);
        match self.way_of(set, tag) {
            Some(way) => {
                self.policy.update(set, way);
                true
            }
            None => false,
        }
    }

    /// Installs the block holding `addr`.
    ///
    /// Fills the first empty way of the set, or else evicts the least recently used
    /// way, then marks the filled way most recently used.
    ///
    /// # Returns
    ///
    /// The tag that was evicted, or `None` if an empty way was used.
    pub fn install(&mut self, addr: u32) -> Option<u32> {
        let (set, tag) = self.locate(addr);
        let way = self.policy.get_victim(set);
        let line = &mut self.lines[set * self.ways + way];
        let evicted = line.valid.then_some(line.tag);
        *line = CacheLine { tag, valid: true };
        self.policy.update(set, way);
        evicted
    }

    /// Tags currently resident in `set`, in way order; empty ways are `None`.
    pub fn set_tags(&self, set: usize) -> Vec<Option<u32>> {
        let base = (set & (self.num_sets - 1)) * self.ways;
        self.lines[base..base + self.ways]
            .iter()
            .map(|l| l.valid.then_some(l.tag))
            .collect()
    }

    /// Recency counter of a way (0 = empty, 1 = most recently used).
    pub fn recency(&self, set: usize, way: usize) -> u32 {
        self.policy.rank(set & (self.num_sets - 1), way % self.ways)
    }

    /// Number of sets.
    pub const fn num_sets(&self) -> usize {
        self.num_sets
    }

    /// Associativity.
    pub const fn ways(&self) -> usize {
        self.ways
    }
}

/// Countdown held by a pipeline stage while one of its cache misses is serviced.
///
/// A miss is armed with the full latency on the cycle it is detected. The counter
/// then drops by one per cycle; the block is installed when it reads 1 and the stage
/// proceeds on the cycle it reaches 0, for exactly `latency` blocked cycles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MissState {
    /// A miss is outstanding (or has just finished and not yet been released).
    pub active: bool,
    /// Cycles left before the stage may proceed.
    pub remaining: u32,
}

impl MissState {
    /// Starts servicing a miss that takes `cycles` cycles.
    pub const fn arm(&mut self, cycles: u32) {
        self.active = true;
        self.remaining = cycles;
    }

    /// Advances an outstanding miss by one cycle.
    pub const fn tick(&mut self) {
        if self.active && self.remaining > 0 {
            self.remaining -= 1;
        }
    }

    /// The block should be written into the tag array this cycle.
    pub const fn fill_due(&self) -> bool {
        self.remaining == 1
    }

    /// The owning stage may not proceed this cycle.
    pub const fn blocking(&self) -> bool {
        self.active && self.remaining != 0
    }

    /// Clears the miss once its countdown has expired.
    pub const fn release_if_done(&mut self) {
        if self.remaining == 0 {
            self.active = false;
        }
    }

    /// Abandons any outstanding miss.
    pub const fn reset(&mut self) {
        self.active = false;
        self.remaining = 0;
    }
}
