//! Configuration system for the MIPS pipeline simulator.
//!
//! This module defines the structures used to parameterize the simulator. It provides:
//! 1. **Defaults:** Baseline hardware constants (entry point, cache geometry, predictor sizes).
//! 2. **Structures:** Hierarchical config for general, memory, cache and pipeline settings.
//! 3. **Loading:** JSON parsing from strings or files, followed by geometry validation.
//!
//! Every field is optional in JSON; missing fields fall back to the defaults below, which
//! describe the reference machine exactly.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::error::ConfigError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Entry address of user programs (start of the text segment).
    pub const START_PC: u32 = 0x0040_0000;

    /// `$v0` value that makes a SYSCALL halt the machine.
    pub const HALT_CODE: u32 = 0xA;

    /// Cycles between progress log lines.
    pub const PROGRESS_INTERVAL: u64 = 100_000;

    /// Base of the program window used to validate branch-target buffer entries.
    pub const TEXT_BASE: u32 = 0x0040_0000;

    /// Size of the program window (1 MiB).
    pub const TEXT_SIZE: u32 = 0x0010_0000;

    /// Cache block size in bytes, shared by both caches.
    pub const LINE_BYTES: u32 = 32;

    /// Cycles needed to service any cache miss.
    pub const MISS_LATENCY: u32 = 50;

    /// Instruction cache set count.
    pub const L1_I_SETS: u32 = 64;

    /// Instruction cache associativity.
    pub const L1_I_WAYS: usize = 4;

    /// Data cache set count.
    pub const L1_D_SETS: u32 = 256;

    /// Data cache associativity.
    pub const L1_D_WAYS: usize = 8;

    /// Pattern history table entries (two-bit counters).
    pub const PHT_ENTRIES: usize = 256;

    /// Width of the global history register in bits.
    pub const HISTORY_BITS: u32 = 8;

    /// Branch-target buffer entries.
    pub const BTB_ENTRIES: usize = 1024;

    /// Cycles before a multiply result may be read from HI/LO.
    pub const MULT_LATENCY: u32 = 4;

    /// Cycles before a divide result may be read from HI/LO.
    pub const DIV_LATENCY: u32 = 32;
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// ```
/// use mipsim_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.general.start_pc, 0x0040_0000);
/// assert_eq!(config.cache.l1_d.ways, 8);
/// ```
///
/// Overriding a subset of fields from JSON:
///
/// ```
/// use mipsim_core::config::Config;
///
/// let json = r#"{ "cache": { "l1_d": { "sets": 128 } }, "pipeline": { "div_latency": 20 } }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.cache.l1_d.sets, 128);
/// assert_eq!(config.cache.l1_d.ways, 8);
/// assert_eq!(config.cache.l1_i.sets, 64);
/// assert_eq!(config.pipeline.div_latency, 20);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Program address window
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Instruction and data cache geometry
    #[serde(default)]
    pub cache: CacheHierarchyConfig,
    /// Branch predictor and multiply/divide settings
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Parses and validates a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and [`ConfigError::Invalid`]
    /// when a field fails [`Config::validate`].
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the same
    /// errors as [`Config::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Checks that every table size can be indexed by masking.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.cache.l1_i.validate("cache.l1_i")?;
        self.cache.l1_d.validate("cache.l1_d")?;

        if self.memory.text_size == 0 {
            return Err(invalid("memory.text_size", "program window is empty"));
        }
        if self.memory.text_base.checked_add(self.memory.text_size).is_none() {
            return Err(invalid(
                "memory.text_size",
                "program window runs past the end of the address space",
            ));
        }

        let p = &self.pipeline;
        if !p.pht_entries.is_power_of_two() {
            return Err(invalid("pipeline.pht_entries", "must be a power of two"));
        }
        if !p.btb_entries.is_power_of_two() {
            return Err(invalid("pipeline.btb_entries", "must be a power of two"));
        }
        if p.history_bits > 16 || (1usize << p.history_bits) > p.pht_entries {
            return Err(invalid(
                "pipeline.history_bits",
                format!("history wider than the {}-entry pattern table", p.pht_entries),
            ));
        }
        Ok(())
    }
}

fn invalid(field: impl Into<String>, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field: field.into(),
        reason: reason.into(),
    }
}

/// General simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Initial PC value
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u32,

    /// `$v0` value that turns a SYSCALL into a halt
    #[serde(default = "GeneralConfig::default_halt_code")]
    pub halt_code: u32,

    /// Cycles between progress log lines; 0 disables them
    #[serde(default = "GeneralConfig::default_progress_interval")]
    pub progress_interval: u64,
}

impl GeneralConfig {
    fn default_start_pc() -> u32 {
        defaults::START_PC
    }

    fn default_halt_code() -> u32 {
        defaults::HALT_CODE
    }

    fn default_progress_interval() -> u64 {
        defaults::PROGRESS_INTERVAL
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            start_pc: defaults::START_PC,
            halt_code: defaults::HALT_CODE,
            progress_interval: defaults::PROGRESS_INTERVAL,
        }
    }
}

/// The simulated program's address window.
///
/// Branch-target buffer entries whose target falls outside this window are recorded
/// but marked invalid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MemoryConfig {
    /// First address of the program window
    #[serde(default = "MemoryConfig::default_text_base")]
    pub text_base: u32,

    /// Size of the program window in bytes
    #[serde(default = "MemoryConfig::default_text_size")]
    pub text_size: u32,
}

impl MemoryConfig {
    fn default_text_base() -> u32 {
        defaults::TEXT_BASE
    }

    fn default_text_size() -> u32 {
        defaults::TEXT_SIZE
    }

    /// Returns `true` if `addr` lies inside the program window.
    pub fn contains(&self, addr: u32) -> bool {
        addr >= self.text_base && addr - self.text_base < self.text_size
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            text_base: defaults::TEXT_BASE,
            text_size: defaults::TEXT_SIZE,
        }
    }
}

/// Geometry and timing of the two L1 caches.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CacheHierarchyConfig {
    /// L1 Instruction Cache
    #[serde(default = "CacheConfig::default_l1_i")]
    pub l1_i: CacheConfig,
    /// L1 Data Cache
    #[serde(default = "CacheConfig::default_l1_d")]
    pub l1_d: CacheConfig,
}

impl Default for CacheHierarchyConfig {
    fn default() -> Self {
        Self {
            l1_i: CacheConfig::default_l1_i(),
            l1_d: CacheConfig::default_l1_d(),
        }
    }
}

/// Configuration for a single tag-only cache.
///
/// Set index is `(addr / line_bytes) % sets` and the tag is the remaining upper bits.
/// Missing fields in JSON take the data-cache defaults; use the hierarchy defaults for
/// whole-cache omissions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Number of sets (power of two)
    #[serde(default = "CacheConfig::default_sets")]
    pub sets: u32,
    /// Associativity
    #[serde(default = "CacheConfig::default_ways")]
    pub ways: usize,
    /// Block size in bytes (power of two)
    #[serde(default = "CacheConfig::default_line_bytes")]
    pub line_bytes: u32,
    /// Stall cycles to service a miss
    #[serde(default = "CacheConfig::default_miss_latency")]
    pub miss_latency: u32,
}

impl CacheConfig {
    /// Default instruction cache: 64 sets × 4 ways × 32 B, 50-cycle misses.
    pub const fn default_l1_i() -> Self {
        Self {
            sets: defaults::L1_I_SETS,
            ways: defaults::L1_I_WAYS,
            line_bytes: defaults::LINE_BYTES,
            miss_latency: defaults::MISS_LATENCY,
        }
    }

    /// Default data cache: 256 sets × 8 ways × 32 B, 50-cycle misses.
    pub const fn default_l1_d() -> Self {
        Self {
            sets: defaults::L1_D_SETS,
            ways: defaults::L1_D_WAYS,
            line_bytes: defaults::LINE_BYTES,
            miss_latency: defaults::MISS_LATENCY,
        }
    }

    fn default_sets() -> u32 {
        defaults::L1_D_SETS
    }

    fn default_ways() -> usize {
        defaults::L1_D_WAYS
    }

    fn default_line_bytes() -> u32 {
        defaults::LINE_BYTES
    }

    fn default_miss_latency() -> u32 {
        defaults::MISS_LATENCY
    }

    fn validate(&self, section: &str) -> Result<(), ConfigError> {
        if !self.sets.is_power_of_two() {
            return Err(invalid(format!("{section}.sets"), "must be a power of two"));
        }
        if self.ways == 0 {
            return Err(invalid(format!("{section}.ways"), "must be at least 1"));
        }
        if !self.line_bytes.is_power_of_two() || self.line_bytes < 4 {
            return Err(invalid(
                format!("{section}.line_bytes"),
                "must be a power of two of at least one word",
            ));
        }
        if self.miss_latency == 0 {
            return Err(invalid(
                format!("{section}.miss_latency"),
                "must be at least 1 cycle",
            ));
        }
        Ok(())
    }
}

/// Branch predictor and multiply/divide unit configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PipelineConfig {
    /// Pattern history table entries (power of two)
    #[serde(default = "PipelineConfig::default_pht_entries")]
    pub pht_entries: usize,
    /// Global history register width in bits
    #[serde(default = "PipelineConfig::default_history_bits")]
    pub history_bits: u32,
    /// Branch-target buffer entries (power of two)
    #[serde(default = "PipelineConfig::default_btb_entries")]
    pub btb_entries: usize,
    /// HI/LO busy cycles after MULT/MULTU
    #[serde(default = "PipelineConfig::default_mult_latency")]
    pub mult_latency: u32,
    /// HI/LO busy cycles after DIV/DIVU
    #[serde(default = "PipelineConfig::default_div_latency")]
    pub div_latency: u32,
    /// Extend an I-cache miss by a full miss latency when it starts on the same cycle as a D-cache miss
    #[serde(default = "PipelineConfig::default_miss_coupling")]
    pub miss_coupling: bool,
}

impl PipelineConfig {
    fn default_pht_entries() -> usize {
        defaults::PHT_ENTRIES
    }

    fn default_history_bits() -> u32 {
        defaults::HISTORY_BITS
    }

    fn default_btb_entries() -> usize {
        defaults::BTB_ENTRIES
    }

    fn default_mult_latency() -> u32 {
        defaults::MULT_LATENCY
    }

    fn default_div_latency() -> u32 {
        defaults::DIV_LATENCY
    }

    fn default_miss_coupling() -> bool {
        true
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            pht_entries: defaults::PHT_ENTRIES,
            history_bits: defaults::HISTORY_BITS,
            btb_entries: defaults::BTB_ENTRIES,
            mult_latency: defaults::MULT_LATENCY,
            div_latency: defaults::DIV_LATENCY,
            miss_coupling: true,
        }
    }
}
