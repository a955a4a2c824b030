//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator on Stack
//! - PHP: Push Processor Status on Stack
//! - PLA: Pull Accumulator from Stack
//! - PLP: Pull Processor Status from Stack
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! The stack pointer (SP) is an 8-bit register that serves as an offset into this
//! page and wraps from 0x00 to 0xFF (and back) without leaving it.

use crate::{MemoryBus, Status, CPU};

/// Executes the PHA (Push Accumulator) instruction.
///
/// Cycles: 3. Flags affected: None.
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU, bus: &mut M) {
    let value = cpu.a;
    cpu.push(bus, value);
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// Pushes all eight status bits, bit 5 set, so that PLP restores exactly
/// the flags that were pushed.
///
/// Cycles: 3. Flags affected: None.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU, bus: &mut M) {
    let status = cpu.status();
    cpu.push(bus, status);
}

/// Executes the PLA (Pull Accumulator) instruction.
///
/// Cycles: 4. Flags affected: Z, N.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU, bus: &mut M) {
    let value = cpu.pull(bus);
    cpu.a = value;
    cpu.p.set_zn(value);
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Every flag is replaced from the pulled byte; bit 5 stays set.
///
/// Cycles: 4.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU, bus: &mut M) {
    let status = cpu.pull(bus);
    cpu.p = Status::from_stack(status);
}
