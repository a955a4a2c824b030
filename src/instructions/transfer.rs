//! # Register Transfer Instructions
//!
//! This module implements register-to-register copies:
//! - TAX, TAY: Accumulator to index register
//! - TXA, TYA: Index register to accumulator
//! - TSX: Stack pointer to X
//! - TXS: X to stack pointer
//!
//! All update Z and N from the copied value except TXS, which changes no flags.
//! Implied addressing, 2 cycles.

use crate::CPU;

pub(crate) fn execute_tax(cpu: &mut CPU) {
    cpu.x = cpu.a;
    cpu.p.set_zn(cpu.x);
}

pub(crate) fn execute_tay(cpu: &mut CPU) {
    cpu.y = cpu.a;
    cpu.p.set_zn(cpu.y);
}

pub(crate) fn execute_txa(cpu: &mut CPU) {
    cpu.a = cpu.x;
    cpu.p.set_zn(cpu.a);
}

pub(crate) fn execute_tya(cpu: &mut CPU) {
    cpu.a = cpu.y;
    cpu.p.set_zn(cpu.a);
}

pub(crate) fn execute_tsx(cpu: &mut CPU) {
    cpu.x = cpu.sp;
    cpu.p.set_zn(cpu.x);
}

/// TXS is the only transfer that leaves the flags alone.
pub(crate) fn execute_txs(cpu: &mut CPU) {
    cpu.sp = cpu.x;
}
