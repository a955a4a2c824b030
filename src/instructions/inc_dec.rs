//! # Increment and Decrement Instructions
//!
//! This module implements:
//! - INC / DEC: Read-modify-write on memory
//! - INX / INY / DEX / DEY: Index register updates
//!
//! All results wrap modulo 256 and update Z and N. INC and DEC never pay a
//! page-crossing penalty; their AbsoluteX cost is fixed at 7 cycles.

use crate::{MemoryBus, Operand, CPU};

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU, bus: &mut M, operand: &Operand) {
    let result = cpu.read_operand(bus, operand).wrapping_add(1);
    cpu.write_operand(bus, operand, result);
    cpu.p.set_zn(result);
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU, bus: &mut M, operand: &Operand) {
    let result = cpu.read_operand(bus, operand).wrapping_sub(1);
    cpu.write_operand(bus, operand, result);
    cpu.p.set_zn(result);
}

/// Executes the INX (Increment X Register) instruction.
pub(crate) fn execute_inx(cpu: &mut CPU) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.p.set_zn(cpu.x);
}

/// Executes the INY (Increment Y Register) instruction.
pub(crate) fn execute_iny(cpu: &mut CPU) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.p.set_zn(cpu.y);
}

/// Executes the DEX (Decrement X Register) instruction.
pub(crate) fn execute_dex(cpu: &mut CPU) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.p.set_zn(cpu.x);
}

/// Executes the DEY (Decrement Y Register) instruction.
pub(crate) fn execute_dey(cpu: &mut CPU) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.p.set_zn(cpu.y);
}
