//! Multiply/Divide Unit.
//!
//! MULT, MULTU, DIV and DIVU write HI and LO as soon as they execute, then keep
//! the unit busy for a fixed number of cycles. Moves to or from HI/LO must wait
//! until the busy counter has drained.

use crate::config::PipelineConfig;
use crate::isa::mips::funct;

/// HI/LO producer with a cycle-counted busy window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MulDivUnit {
    busy: u32,
    mult_latency: u32,
    div_latency: u32,
}

impl MulDivUnit {
    /// Creates an idle unit with the configured latencies.
    pub const fn new(config: &PipelineConfig) -> Self {
        Self {
            busy: 0,
            mult_latency: config.mult_latency,
            div_latency: config.div_latency,
        }
    }

    /// Counts down one cycle of an outstanding operation.
    pub const fn tick(&mut self) {
        self.busy = self.busy.saturating_sub(1);
    }

    /// HI/LO are still being produced.
    pub const fn is_busy(&self) -> bool {
        self.busy > 0
    }

    /// Cycles left in the busy window.
    pub const fn remaining(&self) -> u32 {
        self.busy
    }

    /// Starts a multiply or divide.
    ///
    /// A divide by zero leaves both results 0. Signed divide of `i32::MIN` by -1
    /// wraps instead of trapping.
    ///
    /// # Returns
    ///
    /// `(hi, lo)`, or `None` (with the unit untouched) when `funct` is not a
    /// multiply or divide.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::config::PipelineConfig;
    /// use mipsim_core::core::units::alu::muldiv::MulDivUnit;
    /// use mipsim_core::isa::mips::funct;
    ///
    /// let mut unit = MulDivUnit::new(&PipelineConfig::default());
    /// assert_eq!(unit.issue(funct::DIV, (-7i32) as u32, 2), Some(((-1i32) as u32, (-3i32) as u32)));
    /// assert!(unit.is_busy());
    /// ```
    pub fn issue(&mut self, funct: u32, a: u32, b: u32) -> Option<(u32, u32)> {
        let (result, latency) = match funct {
            funct::MULT => {
                let p = i64::from(a as i32) * i64::from(b as i32);
                (split(p as u64), self.mult_latency)
            }
            funct::MULTU => (split(u64::from(a) * u64::from(b)), self.mult_latency),
            funct::DIV => {
                let (n, d) = (a as i32, b as i32);
                let r = if d == 0 {
                    (0, 0)
                } else {
                    (n.wrapping_rem(d) as u32, n.wrapping_div(d) as u32)
                };
                (r, self.div_latency)
            }
            funct::DIVU => {
                let r = if b == 0 { (0, 0) } else { (a % b, a / b) };
                (r, self.div_latency)
            }
            _ => return None,
        };
        self.busy = latency;
        Some(result)
    }
}

const fn split(product: u64) -> (u32, u32) {
    ((product >> 32) as u32, product as u32)
}
