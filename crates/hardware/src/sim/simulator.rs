//! Simulator: owns the CPU and drives it.
//!
//! The core only knows how to advance one cycle. The simulator adds program
//! loading, bounded runs, and the register and memory dumps used by the CLI.

use std::fmt::Write as _;

use tracing::{info, warn};

use crate::common::error::{ConfigError, LoadError, SimError};
use crate::config::Config;
use crate::core::Cpu;
use crate::soc::Memory;
use crate::stats::SimStats;

/// Top-level simulator: configuration plus CPU.
#[derive(Debug)]
pub struct Simulator {
    /// CPU state (registers, latches, caches, predictor, stats).
    pub cpu: Cpu,
    config: Config,
}

impl Simulator {
    /// Creates a simulator with all state cleared and the PC at the entry point.
    ///
    /// # Errors
    ///
    /// Returns the first problem [`Config::validate`] finds.
    pub fn new(config: Config, memory: impl Memory + 'static) -> Result<Self, ConfigError> {
        config.validate()?;
        let cpu = Cpu::new(&config, Box::new(memory));
        Ok(Self { cpu, config })
    }

    /// Writes `words` into the text segment, starting at its base.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::TooLarge`] if the words do not fit the configured
    /// text segment; memory is left untouched in that case.
    pub fn load_program(&mut self, words: &[u32]) -> Result<(), LoadError> {
        let capacity = (self.config.memory.text_size / 4) as usize;
        if words.len() > capacity {
            return Err(LoadError::TooLarge {
                words: words.len(),
                capacity,
            });
        }

        let mut addr = self.config.memory.text_base;
        for &word in words {
            self.cpu.mem.write_u32(addr, word);
            addr = addr.wrapping_add(4);
        }
        info!(
            words = words.len(),
            base = self.config.memory.text_base,
            "program loaded"
        );
        Ok(())
    }

    /// Advances one cycle.
    ///
    /// # Returns
    ///
    /// `false`, without advancing, if the program has already halted.
    pub fn step(&mut self) -> bool {
        if !self.cpu.running {
            warn!("simulator halted; step ignored");
            return false;
        }
        self.cpu.tick();
        true
    }

    /// Runs up to `cycles` cycles, stopping early on halt.
    ///
    /// # Returns
    ///
    /// The number of cycles actually simulated.
    pub fn run(&mut self, cycles: u64) -> u64 {
        let mut done = 0;
        while done < cycles && self.step() {
            done += 1;
        }
        done
    }

    /// Runs until the program halts.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::CycleLimit`] if `limit` is given and the total cycle
    /// count reaches it before the program halts.
    pub fn go(&mut self, limit: Option<u64>) -> Result<u64, SimError> {
        while self.cpu.running {
            if limit.is_some_and(|l| self.cpu.stats.cycles >= l) {
                return Err(SimError::CycleLimit {
                    cycles: self.cpu.stats.cycles,
                });
            }
            self.cpu.tick();
        }
        Ok(self.cpu.stats.cycles)
    }

    /// The program has not halted yet.
    pub const fn is_running(&self) -> bool {
        self.cpu.running
    }

    /// Counters collected so far.
    pub const fn stats(&self) -> &SimStats {
        &self.cpu.stats
    }

    /// Effective configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Register file, HI, LO and PC as text.
    pub fn dump_registers(&self) -> String {
        let mut out = format!("PC       = {:#010x}\n", self.cpu.pc);
        let _ = write!(out, "{}", self.cpu.regs);
        out
    }

    /// Prints [`Simulator::dump_registers`] to stdout.
    pub fn rdump(&self) {
        println!("{}", self.dump_registers());
    }

    /// Dumps the words from `start` to `stop` inclusive, one per line.
    ///
    /// Both bounds are rounded down to a word boundary.
    pub fn mdump(&mut self, start: u32, stop: u32) -> String {
        let mut out = String::new();
        let mut addr = start & !3;
        let stop = stop & !3;
        while addr <= stop {
            let word = self.cpu.mem.read_u32(addr);
            let _ = writeln!(out, "{addr:#010x}: {word:#010x}");
            match addr.checked_add(4) {
                Some(next) => addr = next,
                None => break,
            }
        }
        out
    }

    /// The four pipeline latches with disassembly.
    pub fn pipeline_snapshot(&self) -> String {
        self.cpu.pipeline_snapshot()
    }
}
