//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC: Clear Carry Flag
//! - SEC: Set Carry Flag
//! - CLI: Clear Interrupt Disable
//! - SEI: Set Interrupt Disable
//! - CLV: Clear Overflow Flag
//! - CLD: Clear Decimal Mode
//! - SED: Set Decimal Mode
//!
//! These instructions use implied addressing mode and execute in 2 cycles.
//! Only the named flag changes.

use crate::{Status, CPU};

pub(crate) fn execute_clc(cpu: &mut CPU) {
    cpu.p.remove(Status::CARRY);
}

pub(crate) fn execute_sec(cpu: &mut CPU) {
    cpu.p.insert(Status::CARRY);
}

pub(crate) fn execute_cli(cpu: &mut CPU) {
    cpu.p.remove(Status::INTERRUPT_DISABLE);
}

pub(crate) fn execute_sei(cpu: &mut CPU) {
    cpu.p.insert(Status::INTERRUPT_DISABLE);
}

pub(crate) fn execute_cld(cpu: &mut CPU) {
    cpu.p.remove(Status::DECIMAL);
}

pub(crate) fn execute_sed(cpu: &mut CPU) {
    cpu.p.insert(Status::DECIMAL);
}

pub(crate) fn execute_clv(cpu: &mut CPU) {
    cpu.p.remove(Status::OVERFLOW);
}
