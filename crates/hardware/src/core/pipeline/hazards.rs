//! Data Hazard Detection and Forwarding.
//!
//! Execute reads its operands as late as possible, from the youngest in-flight
//! producer of each register. It provides:
//! 1. **Operand Forwarding:** A producer whose result is ready bypasses the register file.
//! 2. **Hazard Detection:** A producer whose result is not ready yet stalls execute.
//!
//! Register `$0` never depends on anything and always reads 0.

use crate::common::RegisterFile;
use crate::common::constants::ZERO_REG;
use crate::core::pipeline::latches::PipeOp;

/// Operand lookup hit an in-flight producer whose value is not forwardable yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DataHazard {
    /// Register that could not be read.
    pub reg: usize,
}

/// Resolves one source register.
///
/// # Arguments
///
/// * `src`       - Register to read.
/// * `producers` - Downstream latches, youngest first. Only the first record
///   writing `src` is consulted.
/// * `regs`      - Architectural register file.
///
/// # Returns
///
/// The operand value, or [`DataHazard`] when the youngest producer of `src`
/// has not made its result ready.
pub fn forward_operand(
    src: usize,
    producers: &[Option<&PipeOp>],
    regs: &RegisterFile,
) -> Result<u32, DataHazard> {
    if src == ZERO_REG {
        return Ok(0);
    }

    match producers
        .iter()
        .flatten()
        .find(|p| p.dst == Some(src))
    {
        Some(p) if p.dst_ready => Ok(p.dst_value),
        Some(_) => Err(DataHazard { reg: src }),
        None => Ok(regs.read(src)),
    }
}

/// Fills in both source values of `op`.
///
/// # Returns
///
/// `Err` on the first operand that must wait; `op` is then left partially
/// resolved, and execute retries it from scratch next cycle.
pub fn resolve_operands(
    op: &mut PipeOp,
    producers: &[Option<&PipeOp>],
    regs: &RegisterFile,
) -> Result<(), DataHazard> {
    if let Some(src) = op.src1 {
        op.src1_value = forward_operand(src, producers, regs)?;
    }
    if let Some(src) = op.src2 {
        op.src2_value = forward_operand(src, producers, regs)?;
    }
    Ok(())
}
