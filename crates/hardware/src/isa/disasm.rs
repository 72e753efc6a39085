//! Instruction Disassembler for the MIPS integer subset.
//!
//! Converts a 32-bit instruction word into a mnemonic string for trace output,
//! pipeline snapshots and test diagnostics. Branch and jump targets are rendered
//! as absolute addresses when the PC of the instruction is known.
//!
//! # Usage
//!
//! ```
//! use mipsim_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x2402_000A, 0x0040_0000), "addiu $v0, $zero, 10");
//! assert_eq!(disassemble(0x0000_000C, 0x0040_0004), "syscall");
//! ```

use crate::isa::abi;
use crate::isa::instruction::InstructionBits;
use crate::isa::mips::{funct, opcodes as op, regimm};

fn reg(idx: usize) -> String {
    format!("${}", abi::name(idx))
}

fn branch_dest(inst: u32, pc: u32) -> u32 {
    pc.wrapping_add(4).wrapping_add(inst.se_imm16() << 2)
}

/// Disassembles a 32-bit MIPS instruction located at `pc`.
///
/// Returns `"nop"` for the all-zero word and `"unknown"` for unrecognised encodings.
pub fn disassemble(inst: u32, pc: u32) -> String {
    if inst == 0 {
        return "nop".to_string();
    }

    let (rs, rt, rd) = (reg(inst.rs()), reg(inst.rt()), reg(inst.rd()));
    let simm = inst.se_imm16() as i32;
    let uimm = inst.imm16();

    match inst.opcode() {
        op::OP_SPECIAL => special(inst, &rs, &rt, &rd),
        op::OP_BRSPEC => {
            let name = match inst.rt() as u32 {
                regimm::BLTZ => "bltz",
                regimm::BGEZ => "bgez",
                regimm::BLTZAL => "bltzal",
                regimm::BGEZAL => "bgezal",
                _ => return "unknown".to_string(),
            };
            format!("{name} {rs}, {:#010x}", branch_dest(inst, pc))
        }
        op::OP_J | op::OP_JAL => {
            let name = if inst.opcode() == op::OP_J { "j" } else { "jal" };
            format!("{name} {:#010x}", (pc & 0xF000_0000) | inst.jump_target())
        }
        op::OP_BEQ => format!("beq {rs}, {rt}, {:#010x}", branch_dest(inst, pc)),
        op::OP_BNE => format!("bne {rs}, {rt}, {:#010x}", branch_dest(inst, pc)),
        op::OP_BLEZ => format!("blez {rs}, {:#010x}", branch_dest(inst, pc)),
        op::OP_BGTZ => format!("bgtz {rs}, {:#010x}", branch_dest(inst, pc)),
        op::OP_ADDI => format!("addi {rt}, {rs}, {simm}"),
        op::OP_ADDIU => format!("addiu {rt}, {rs}, {simm}"),
        op::OP_SLTI => format!("slti {rt}, {rs}, {simm}"),
        op::OP_SLTIU => format!("sltiu {rt}, {rs}, {simm}"),
        op::OP_ANDI => format!("andi {rt}, {rs}, {uimm:#x}"),
        op::OP_ORI => format!("ori {rt}, {rs}, {uimm:#x}"),
        op::OP_XORI => format!("xori {rt}, {rs}, {uimm:#x}"),
        op::OP_LUI => format!("lui {rt}, {uimm:#x}"),
        op::OP_LB => format!("lb {rt}, {simm}({rs})"),
        op::OP_LH => format!("lh {rt}, {simm}({rs})"),
        op::OP_LW => format!("lw {rt}, {simm}({rs})"),
        op::OP_LBU => format!("lbu {rt}, {simm}({rs})"),
        op::OP_LHU => format!("lhu {rt}, {simm}({rs})"),
        op::OP_SB => format!("sb {rt}, {simm}({rs})"),
        op::OP_SH => format!("sh {rt}, {simm}({rs})"),
        op::OP_SW => format!("sw {rt}, {simm}({rs})"),
        _ => "unknown".to_string(),
    }
}

fn special(inst: u32, rs: &str, rt: &str, rd: &str) -> String {
    let shamt = inst.shamt();
    match inst.funct() {
        funct::SLL => format!("sll {rd}, {rt}, {shamt}"),
        funct::SRL => format!("srl {rd}, {rt}, {shamt}"),
        funct::SRA => format!("sra {rd}, {rt}, {shamt}"),
        funct::SLLV => format!("sllv {rd}, {rt}, {rs}"),
        funct::SRLV => format!("srlv {rd}, {rt}, {rs}"),
        funct::SRAV => format!("srav {rd}, {rt}, {rs}"),
        funct::JR => format!("jr {rs}"),
        funct::JALR => format!("jalr {rd}, {rs}"),
        funct::SYSCALL => "syscall".to_string(),
        funct::MFHI => format!("mfhi {rd}"),
        funct::MTHI => format!("mthi {rs}"),
        funct::MFLO => format!("mflo {rd}"),
        funct::MTLO => format!("mtlo {rs}"),
        funct::MULT => format!("mult {rs}, {rt}"),
        funct::MULTU => format!("multu {rs}, {rt}"),
        funct::DIV => format!("div {rs}, {rt}"),
        funct::DIVU => format!("divu {rs}, {rt}"),
        funct::ADD => format!("add {rd}, {rs}, {rt}"),
        funct::ADDU => format!("addu {rd}, {rs}, {rt}"),
        funct::SUB => format!("sub {rd}, {rs}, {rt}"),
        funct::SUBU => format!("subu {rd}, {rs}, {rt}"),
        funct::AND => format!("and {rd}, {rs}, {rt}"),
        funct::OR => format!("or {rd}, {rs}, {rt}"),
        funct::XOR => format!("xor {rd}, {rs}, {rt}"),
        funct::NOR => format!("nor {rd}, {rs}, {rt}"),
        funct::SLT => format!("slt {rd}, {rs}, {rt}"),
        funct::SLTU => format!("sltu {rd}, {rs}, {rt}"),
        _ => "unknown".to_string(),
    }
}
