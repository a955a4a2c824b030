//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each works on the accumulator (Accumulator mode) or as a read-modify-write
//! on memory. The bit shifted out lands in Carry; Z and N follow the result.

use crate::{MemoryBus, Operand, Status, CPU};

/// Reads the operand, applies `shift`, writes the result back and updates
/// C, Z and N. `shift` receives the old value and the incoming carry and
/// returns (result, carry out).
fn read_modify_write<M: MemoryBus>(
    cpu: &mut CPU,
    bus: &mut M,
    operand: &Operand,
    shift: impl FnOnce(u8, bool) -> (u8, bool),
) {
    let value = cpu.read_operand(bus, operand);
    let (result, carry_out) = shift(value, cpu.p.contains(Status::CARRY));

    cpu.write_operand(bus, operand, result);
    cpu.p.set(Status::CARRY, carry_out);
    cpu.p.set_zn(result);
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 0 is set to 0 and bit 7 is placed in the carry flag.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU, bus: &mut M, operand: &Operand) {
    read_modify_write(cpu, bus, operand, |value, _| {
        (value << 1, value & 0x80 != 0)
    });
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 7 is set to 0 and bit 0 is placed in the carry flag. N is always cleared.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU, bus: &mut M, operand: &Operand) {
    read_modify_write(cpu, bus, operand, |value, _| {
        (value >> 1, value & 0x01 != 0)
    });
}

/// Executes the ROL (Rotate Left) instruction.
///
/// The old carry enters bit 0; bit 7 becomes the new carry.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU, bus: &mut M, operand: &Operand) {
    read_modify_write(cpu, bus, operand, |value, carry| {
        ((value << 1) | carry as u8, value & 0x80 != 0)
    });
}

/// Executes the ROR (Rotate Right) instruction.
///
/// The old carry enters bit 7; bit 0 becomes the new carry.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU, bus: &mut M, operand: &Operand) {
    read_modify_write(cpu, bus, operand, |value, carry| {
        ((value >> 1) | ((carry as u8) << 7), value & 0x01 != 0)
    });
}
