//! Simulation utilities and program loading.
//!
//! Provides the hex-word program loader and the driver that owns a `Cpu`.

/// Hex-word program parsing and file loading.
pub mod loader;

/// Top-level simulator combining configuration and CPU.
pub mod simulator;

pub use self::simulator::Simulator;
