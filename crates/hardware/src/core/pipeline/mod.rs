//! Instruction pipeline implementation.
//!
//! This module contains the implementation of the five-stage instruction pipeline.
//! It includes the following components:
//! 1. **Hazards:** Operand forwarding and data-hazard detection for execute.
//! 2. **Latches:** The single-slot instruction record passed between stages.
//! 3. **Recovery:** The end-of-cycle redirect and squash controller.
//! 4. **Stages:** Implementation of Fetch, Decode, Execute, Memory, and Writeback stages.

/// Pipeline hazard detection and forwarding logic.
pub mod hazards;

/// Inter-stage pipeline latches and the in-flight instruction record.
pub mod latches;

/// Misprediction recovery requests.
pub mod recovery;

/// Pipeline stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;
