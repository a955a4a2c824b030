//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register
//!
//! Loads update Z and N and pay the indexed page-crossing penalty. Stores
//! touch no flags and never read the effective address.

use crate::{MemoryBus, Operand, CPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU, bus: &mut M, operand: &Operand) {
    let value = cpu.read_operand(bus, operand);
    cpu.a = value;
    cpu.p.set_zn(value);
}

/// Executes the LDX (Load X Register) instruction.
///
/// Same flag behavior as LDA.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU, bus: &mut M, operand: &Operand) {
    let value = cpu.read_operand(bus, operand);
    cpu.x = value;
    cpu.p.set_zn(value);
}

/// Executes the LDY (Load Y Register) instruction.
///
/// Same flag behavior as LDA.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU, bus: &mut M, operand: &Operand) {
    let value = cpu.read_operand(bus, operand);
    cpu.y = value;
    cpu.p.set_zn(value);
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &CPU, bus: &mut M, operand: &Operand) {
    bus.write(operand.address, cpu.a);
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &CPU, bus: &mut M, operand: &Operand) {
    bus.write(operand.address, cpu.x);
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(cpu: &CPU, bus: &mut M, operand: &Operand) {
    bus.write(operand.address, cpu.y);
}
