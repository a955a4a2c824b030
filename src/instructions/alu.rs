//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic on the accumulator
//! - CMP, CPX, CPY: Compare register with memory
//! - BIT: Bit test
//!
//! Arithmetic is always binary; the Decimal flag is stored but ignored.

use crate::{MemoryBus, Operand, Status, CPU};

/// Adds `value` and the carry flag to the accumulator, updating N, V, Z, C.
///
/// SBC reuses this with the operand inverted: `A - M - !C == A + !M + C`.
fn add_with_carry(cpu: &mut CPU, value: u8) {
    let a = cpu.a;
    let carry_in = cpu.p.contains(Status::CARRY) as u16;

    let sum = a as u16 + value as u16 + carry_in;
    let result = sum as u8;

    // Carry: unsigned overflow out of bit 7
    cpu.p.set(Status::CARRY, sum > 0xFF);

    // Overflow: both inputs share a sign and the result's sign differs
    cpu.p
        .set(Status::OVERFLOW, (a ^ result) & (value ^ result) & 0x80 != 0);

    cpu.p.set_zn(result);
    cpu.a = result;
}

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand plus the carry flag to the accumulator.
///
/// # Flag Behavior
///
/// - Carry (C): Set if the unsigned sum exceeds 0xFF
/// - Overflow (V): Set if two operands of the same sign give a result of the other sign
/// - Zero (Z), Negative (N): From the result
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU, bus: &mut M, operand: &Operand) {
    let value = cpu.read_operand(bus, operand);
    add_with_carry(cpu, value);
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Computes `A - M - (1 - C)`. Carry set afterwards means no borrow occurred.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU, bus: &mut M, operand: &Operand) {
    let value = cpu.read_operand(bus, operand);
    add_with_carry(cpu, !value);
}

/// Executes the AND (Logical AND) instruction.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU, bus: &mut M, operand: &Operand) {
    let value = cpu.read_operand(bus, operand);
    cpu.a &= value;
    cpu.p.set_zn(cpu.a);
}

/// Executes the ORA (Logical Inclusive OR) instruction.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU, bus: &mut M, operand: &Operand) {
    let value = cpu.read_operand(bus, operand);
    cpu.a |= value;
    cpu.p.set_zn(cpu.a);
}

/// Executes the EOR (Exclusive OR) instruction.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU, bus: &mut M, operand: &Operand) {
    let value = cpu.read_operand(bus, operand);
    cpu.a ^= value;
    cpu.p.set_zn(cpu.a);
}

/// Compares `register` with `value` without storing the difference.
///
/// - C: register >= value (unsigned)
/// - Z: register == value
/// - N: bit 7 of `register - value`
fn compare(cpu: &mut CPU, register: u8, value: u8) {
    let result = register.wrapping_sub(value);
    cpu.p.set(Status::CARRY, register >= value);
    cpu.p.set_zn(result);
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU, bus: &mut M, operand: &Operand) {
    let value = cpu.read_operand(bus, operand);
    let register = cpu.a;
    compare(cpu, register, value);
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut CPU, bus: &mut M, operand: &Operand) {
    let value = cpu.read_operand(bus, operand);
    let register = cpu.x;
    compare(cpu, register, value);
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut CPU, bus: &mut M, operand: &Operand) {
    let value = cpu.read_operand(bus, operand);
    let register = cpu.y;
    compare(cpu, register, value);
}

/// Executes the BIT (Bit Test) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if `A & M` is zero
/// - Negative (N): Bit 7 of M
/// - Overflow (V): Bit 6 of M
///
/// The accumulator is not modified.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU, bus: &mut M, operand: &Operand) {
    let value = cpu.read_operand(bus, operand);
    cpu.p.set(Status::ZERO, cpu.a & value == 0);
    cpu.p.set(Status::NEGATIVE, value & 0x80 != 0);
    cpu.p.set(Status::OVERFLOW, value & 0x40 != 0);
}
