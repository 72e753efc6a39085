//! Memory system seen by the core.
//!
//! The pipeline only depends on the [`Memory`] trait; [`MainMemory`] is the
//! region-mapped store used by the driver and tests.

/// Region-mapped main memory.
pub mod memory;

/// The word-addressed memory trait.
pub mod traits;

pub use memory::MainMemory;
pub use traits::Memory;
