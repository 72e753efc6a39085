//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the pipeline. It provides:
//! 1. **Throughput:** Cycles, fetched/retired/squashed counts and derived IPC.
//! 2. **Branch prediction:** Resolved branches and mispredictions.
//! 3. **Stalls:** Cycles lost to instruction misses, data misses, data hazards and HI/LO latency.
//! 4. **Caches:** Hit/miss counts for the instruction and data caches.
//!
//! The core only ever increments these counters; nothing in the pipeline reads them back.

use serde::Serialize;

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Instructions placed into the decode latch by fetch.
    pub fetched: u64,
    /// Instructions that completed writeback.
    pub retired: u64,
    /// Recovery events applied (each flush counts once).
    pub squashed: u64,

    /// Branch and jump instructions resolved in execute.
    pub branches: u64,
    /// Resolved instructions that triggered a misprediction flush.
    pub mispredictions: u64,

    /// Cycles fetch spent waiting on an instruction-cache miss.
    pub stalls_fetch: u64,
    /// Cycles the memory stage spent waiting on a data-cache miss.
    pub stalls_mem: u64,
    /// Cycles execute waited on an operand that was not yet forwardable.
    pub stalls_data: u64,
    /// Cycles execute waited on the multiply/divide unit.
    pub stalls_muldiv: u64,

    /// Instruction cache hit count.
    pub icache_hits: u64,
    /// Instruction cache miss count.
    pub icache_misses: u64,
    /// Data cache hit count.
    pub dcache_hits: u64,
    /// Data cache miss count.
    pub dcache_misses: u64,
}

impl SimStats {
    /// Retired instructions per cycle; zero before the first cycle.
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.retired as f64 / self.cycles as f64
        }
    }

    /// Renders the counters as a JSON object.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Prints the full statistics report to stdout.
    ///
    /// # Panics
    ///
    /// This function will not panic. Every ratio is guarded against a zero denominator.
    pub fn print(&self) {
        let pct = |part: u64, whole: u64| {
            if whole == 0 {
                0.0
            } else {
                100.0 * part as f64 / whole as f64
            }
        };

        println!("\n==========================================================");
        println!("MIPS PIPELINE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("sim_cycles               {}", self.cycles);
        println!("sim_fetched              {}", self.fetched);
        println!("sim_retired              {}", self.retired);
        println!("sim_squashed             {}", self.squashed);
        println!("sim_ipc                  {:.3}", self.ipc());
        println!("----------------------------------------------------------");
        println!("STALLS");
        println!(
            "  stalls.fetch           {} ({:.2}%)",
            self.stalls_fetch,
            pct(self.stalls_fetch, self.cycles)
        );
        println!(
            "  stalls.memory          {} ({:.2}%)",
            self.stalls_mem,
            pct(self.stalls_mem, self.cycles)
        );
        println!(
            "  stalls.data            {} ({:.2}%)",
            self.stalls_data,
            pct(self.stalls_data, self.cycles)
        );
        println!(
            "  stalls.muldiv          {} ({:.2}%)",
            self.stalls_muldiv,
            pct(self.stalls_muldiv, self.cycles)
        );
        println!("----------------------------------------------------------");
        println!("BRANCH PREDICTION");
        println!("  bp.branches            {}", self.branches);
        println!("  bp.mispredicts         {}", self.mispredictions);
        println!(
            "  bp.accuracy            {:.2}%",
            100.0 - pct(self.mispredictions, self.branches)
        );
        println!("----------------------------------------------------------");
        println!("MEMORY HIERARCHY");
        let print_cache = |name: &str, hits: u64, misses: u64| {
            println!(
                "  {:<6} accesses: {:<10} hit_rate: {:.2}% misses: {}",
                name,
                hits + misses,
                pct(hits, hits + misses),
                misses
            );
        };
        print_cache("L1-I", self.icache_hits, self.icache_misses);
        print_cache("L1-D", self.dcache_hits, self.dcache_misses);
        println!("==========================================================");
    }
}
