//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address
//! - JSR / RTS: Call and return from subroutine
//! - RTI: Return from interrupt
//! - BRK: Force break
//! - NOP: No operation
//!
//! BRK only sets the Break flag here. The push/vector sequence of a real
//! interrupt is not performed by this engine.

use crate::{MemoryBus, Operand, Status, CPU};

/// Executes the JMP (Jump) instruction.
///
/// Addressing modes:
/// - Absolute (0x4C): JMP $1234 - Jump to address $1234
/// - Indirect (0x6C): JMP ($1234) - Jump to address stored at $1234/$1235
///
/// The resolver has already dereferenced the Indirect pointer, including the
/// NMOS page-wrap bug when it is enabled in [`crate::CpuConfig`].
pub(crate) fn execute_jmp(cpu: &mut CPU, operand: &Operand) {
    cpu.pc = operand.address;
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR instruction (return
/// address minus one), high byte first, then jumps to the target.
///
/// Cycles: 6
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU, bus: &mut M, operand: &Operand) {
    // PC already points past the 3-byte instruction
    let return_address = cpu.pc.wrapping_sub(1);
    cpu.push_word(bus, return_address);
    cpu.pc = operand.address;
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pulls the return address (low byte first) and resumes one byte past it.
///
/// Cycles: 6
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU, bus: &mut M) {
    let return_address = cpu.pull_word(bus);
    cpu.pc = return_address.wrapping_add(1);
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls the status register, then PC (low byte first). Unlike RTS the
/// pulled address is used as-is.
///
/// Cycles: 6
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU, bus: &mut M) {
    let status = cpu.pull(bus);
    cpu.p = Status::from_stack(status);
    cpu.pc = cpu.pull_word(bus);
}

/// Executes the BRK (Force Break) instruction.
///
/// Sets the Break flag. Cycles: 7.
pub(crate) fn execute_brk(cpu: &mut CPU) {
    cpu.p.insert(Status::BREAK);
}

/// Executes the NOP (No Operation) instruction. Cycles: 2.
pub(crate) fn execute_nop() {}
