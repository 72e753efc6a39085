//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage.
//! It handles the SPECIAL register-register operations, the I-type immediate
//! operations and branch condition evaluation. Multiply and divide live in
//! [`muldiv`], which also owns the HI/LO busy window.

/// Multiply/divide unit with HI/LO result latency.
pub mod muldiv;

use crate::isa::mips::{funct, opcodes as op, regimm};

/// Arithmetic Logic Unit (ALU) for integer operations.
///
/// Stateless; every operation is a pure function of its operands.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes a SPECIAL (R-type) arithmetic, logical or shift operation.
    ///
    /// # Arguments
    ///
    /// * `funct` - The SPECIAL function code.
    /// * `a`     - Value of `rs`.
    /// * `b`     - Value of `rt`.
    /// * `shamt` - Shift amount field, used by the constant shifts.
    ///
    /// # Returns
    ///
    /// The result for `rd`, or `None` when `funct` is not a plain ALU operation
    /// (jumps, SYSCALL, HI/LO moves and multiply/divide are handled by the caller).
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::core::units::alu::Alu;
    /// use mipsim_core::isa::mips::funct;
    ///
    /// assert_eq!(Alu::special(funct::SUBU, 5, 7, 0), Some(0xFFFF_FFFE));
    /// assert_eq!(Alu::special(funct::SRA, 0, 0x8000_0000, 4), Some(0xF800_0000));
    /// assert_eq!(Alu::special(funct::SYSCALL, 0, 0, 0), None);
    /// ```
    pub fn special(funct: u32, a: u32, b: u32, shamt: u32) -> Option<u32> {
        let value = match funct {
            funct::SLL => b << shamt,
            funct::SRL => b >> shamt,
            funct::SRA => ((b as i32) >> shamt) as u32,
            funct::SLLV => b << (a & 31),
            funct::SRLV => b >> (a & 31),
            funct::SRAV => ((b as i32) >> (a & 31)) as u32,
            // No overflow trap is modelled; ADD and SUB wrap like their unsigned forms.
            funct::ADD | funct::ADDU => a.wrapping_add(b),
            funct::SUB | funct::SUBU => a.wrapping_sub(b),
            funct::AND => a & b,
            funct::OR => a | b,
            funct::XOR => a ^ b,
            funct::NOR => !(a | b),
            funct::SLT => u32::from((a as i32) < (b as i32)),
            funct::SLTU => u32::from(a < b),
            _ => return None,
        };
        Some(value)
    }

    /// Executes an I-type ALU operation.
    ///
    /// ADDI/ADDIU/SLTI/SLTIU use the sign-extended immediate; SLTIU compares it
    /// unsigned. ANDI/ORI/XORI use the zero-extended immediate, and LUI places it
    /// in the upper half.
    ///
    /// # Returns
    ///
    /// The result for `rt`, or `None` for opcodes that are not immediate ALU operations.
    pub fn immediate(opcode: u32, a: u32, imm16: u32, se_imm16: u32) -> Option<u32> {
        let value = match opcode {
            op::OP_ADDI | op::OP_ADDIU => a.wrapping_add(se_imm16),
            op::OP_SLTI => u32::from((a as i32) < (se_imm16 as i32)),
            op::OP_SLTIU => u32::from(a < se_imm16),
            op::OP_ANDI => a & imm16,
            op::OP_ORI => a | imm16,
            op::OP_XORI => a ^ imm16,
            op::OP_LUI => imm16 << 16,
            _ => return None,
        };
        Some(value)
    }

    /// Evaluates the condition of a conditional branch.
    ///
    /// # Arguments
    ///
    /// * `opcode` - Primary opcode.
    /// * `sel`    - BRSPEC selector (the `rt` field); ignored for other opcodes.
    /// * `a`      - Value of `rs`.
    /// * `b`      - Value of `rt` (BEQ/BNE only).
    ///
    /// # Returns
    ///
    /// `true` if the branch is taken. Non-branch opcodes return `false`.
    pub fn branch_taken(opcode: u32, sel: u32, a: u32, b: u32) -> bool {
        let signed = a as i32;
        match opcode {
            op::OP_BRSPEC => match sel {
                regimm::BLTZ | regimm::BLTZAL => signed < 0,
                regimm::BGEZ | regimm::BGEZAL => signed >= 0,
                _ => false,
            },
            op::OP_BEQ => a == b,
            op::OP_BNE => a != b,
            op::OP_BLEZ => signed <= 0,
            op::OP_BGTZ => signed > 0,
            _ => false,
        }
    }
}
