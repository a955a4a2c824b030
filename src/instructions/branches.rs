//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! - BCC / BCS: Branch on Carry Clear / Set
//! - BEQ / BNE: Branch on Zero Set / Clear
//! - BMI / BPL: Branch on Negative Set / Clear
//! - BVC / BVS: Branch on Overflow Clear / Set
//!
//! All branch instructions use relative addressing with a signed 8-bit offset.
//! By the time a handler runs PC already points at the next instruction, which
//! is the base the offset is applied to.
//!
//! Cycle timing:
//! - 2 cycles if branch not taken
//! - 3 cycles if branch taken to same page
//! - 4 cycles if branch taken to different page
//!
//! No flags are affected.

use crate::addressing::page_crossed;
use crate::{MemoryBus, Operand, Status, CPU};

/// Applies the relative offset when `condition` holds.
///
/// Returns the cycles to add to the 2-cycle base cost.
fn branch<M: MemoryBus>(cpu: &mut CPU, bus: &mut M, operand: &Operand, condition: bool) -> u8 {
    if !condition {
        return 0;
    }

    let offset = cpu.read_operand(bus, operand) as i8;
    let next_instruction = cpu.pc;
    let target = next_instruction.wrapping_add_signed(offset as i16);
    cpu.pc = target;

    if page_crossed(next_instruction, target) {
        2
    } else {
        1
    }
}

/// Executes BCC (Branch if Carry Clear), opcode 0x90.
pub(crate) fn execute_bcc<M: MemoryBus>(cpu: &mut CPU, bus: &mut M, operand: &Operand) -> u8 {
    let condition = !cpu.p.contains(Status::CARRY);
    branch(cpu, bus, operand, condition)
}

/// Executes BCS (Branch if Carry Set), opcode 0xB0.
pub(crate) fn execute_bcs<M: MemoryBus>(cpu: &mut CPU, bus: &mut M, operand: &Operand) -> u8 {
    let condition = cpu.p.contains(Status::CARRY);
    branch(cpu, bus, operand, condition)
}

/// Executes BEQ (Branch if Equal), opcode 0xF0.
pub(crate) fn execute_beq<M: MemoryBus>(cpu: &mut CPU, bus: &mut M, operand: &Operand) -> u8 {
    let condition = cpu.p.contains(Status::ZERO);
    branch(cpu, bus, operand, condition)
}

/// Executes BNE (Branch if Not Equal), opcode 0xD0.
pub(crate) fn execute_bne<M: MemoryBus>(cpu: &mut CPU, bus: &mut M, operand: &Operand) -> u8 {
    let condition = !cpu.p.contains(Status::ZERO);
    branch(cpu, bus, operand, condition)
}

/// Executes BMI (Branch if Minus), opcode 0x30.
pub(crate) fn execute_bmi<M: MemoryBus>(cpu: &mut CPU, bus: &mut M, operand: &Operand) -> u8 {
    let condition = cpu.p.contains(Status::NEGATIVE);
    branch(cpu, bus, operand, condition)
}

/// Executes BPL (Branch if Positive), opcode 0x10.
pub(crate) fn execute_bpl<M: MemoryBus>(cpu: &mut CPU, bus: &mut M, operand: &Operand) -> u8 {
    let condition = !cpu.p.contains(Status::NEGATIVE);
    branch(cpu, bus, operand, condition)
}

/// Executes BVC (Branch if Overflow Clear), opcode 0x50.
pub(crate) fn execute_bvc<M: MemoryBus>(cpu: &mut CPU, bus: &mut M, operand: &Operand) -> u8 {
    let condition = !cpu.p.contains(Status::OVERFLOW);
    branch(cpu, bus, operand, condition)
}

/// Executes BVS (Branch if Overflow Set), opcode 0x70.
pub(crate) fn execute_bvs<M: MemoryBus>(cpu: &mut CPU, bus: &mut M, operand: &Operand) -> u8 {
    let condition = cpu.p.contains(Status::OVERFLOW);
    branch(cpu, bus, operand, condition)
}
