//! Common utilities and types shared across the simulator.
//!
//! This module provides the building blocks used by every other component. It includes:
//! 1. **Constants:** Word geometry and fixed architectural values.
//! 2. **Error Handling:** Typed errors for configuration, program loading and the driver.
//! 3. **Register Management:** The architectural register file (GPRs plus HI/LO).

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for configuration, loading and driving the simulator.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use error::{ConfigError, LoadError, SimError};
pub use reg::RegisterFile;
