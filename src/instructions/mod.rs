//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all 6502 instructions, organized by category.
//! Each instruction is a standalone function that takes the CPU, the memory bus and the
//! operand already resolved for the opcode's addressing mode.
//!
//! Handlers never advance PC past operand bytes (the resolver has done that)
//! and never charge the base cycle cost (the dispatcher reads it from the
//! opcode table). Only branches report extra cycles.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::{MemoryBus, Operand, Operation, CPU};

/// Runs the handler for `operation`.
///
/// Returns cycles to add on top of the opcode's base cost; non-zero only for
/// taken branches.
pub(crate) fn execute<M: MemoryBus>(
    operation: Operation,
    cpu: &mut CPU,
    bus: &mut M,
    operand: &Operand,
) -> u8 {
    match operation {
        Operation::Bcc => return branches::execute_bcc(cpu, bus, operand),
        Operation::Bcs => return branches::execute_bcs(cpu, bus, operand),
        Operation::Beq => return branches::execute_beq(cpu, bus, operand),
        Operation::Bmi => return branches::execute_bmi(cpu, bus, operand),
        Operation::Bne => return branches::execute_bne(cpu, bus, operand),
        Operation::Bpl => return branches::execute_bpl(cpu, bus, operand),
        Operation::Bvc => return branches::execute_bvc(cpu, bus, operand),
        Operation::Bvs => return branches::execute_bvs(cpu, bus, operand),

        Operation::Adc => alu::execute_adc(cpu, bus, operand),
        Operation::Sbc => alu::execute_sbc(cpu, bus, operand),
        Operation::And => alu::execute_and(cpu, bus, operand),
        Operation::Ora => alu::execute_ora(cpu, bus, operand),
        Operation::Eor => alu::execute_eor(cpu, bus, operand),
        Operation::Cmp => alu::execute_cmp(cpu, bus, operand),
        Operation::Cpx => alu::execute_cpx(cpu, bus, operand),
        Operation::Cpy => alu::execute_cpy(cpu, bus, operand),
        Operation::Bit => alu::execute_bit(cpu, bus, operand),

        Operation::Asl => shifts::execute_asl(cpu, bus, operand),
        Operation::Lsr => shifts::execute_lsr(cpu, bus, operand),
        Operation::Rol => shifts::execute_rol(cpu, bus, operand),
        Operation::Ror => shifts::execute_ror(cpu, bus, operand),

        Operation::Lda => load_store::execute_lda(cpu, bus, operand),
        Operation::Ldx => load_store::execute_ldx(cpu, bus, operand),
        Operation::Ldy => load_store::execute_ldy(cpu, bus, operand),
        Operation::Sta => load_store::execute_sta(cpu, bus, operand),
        Operation::Stx => load_store::execute_stx(cpu, bus, operand),
        Operation::Sty => load_store::execute_sty(cpu, bus, operand),

        Operation::Inc => inc_dec::execute_inc(cpu, bus, operand),
        Operation::Dec => inc_dec::execute_dec(cpu, bus, operand),
        Operation::Inx => inc_dec::execute_inx(cpu),
        Operation::Iny => inc_dec::execute_iny(cpu),
        Operation::Dex => inc_dec::execute_dex(cpu),
        Operation::Dey => inc_dec::execute_dey(cpu),

        Operation::Jmp => control::execute_jmp(cpu, operand),
        Operation::Jsr => control::execute_jsr(cpu, bus, operand),
        Operation::Rts => control::execute_rts(cpu, bus),
        Operation::Rti => control::execute_rti(cpu, bus),
        Operation::Brk => control::execute_brk(cpu),
        Operation::Nop => control::execute_nop(),

        Operation::Pha => stack::execute_pha(cpu, bus),
        Operation::Php => stack::execute_php(cpu, bus),
        Operation::Pla => stack::execute_pla(cpu, bus),
        Operation::Plp => stack::execute_plp(cpu, bus),

        Operation::Clc => flags::execute_clc(cpu),
        Operation::Sec => flags::execute_sec(cpu),
        Operation::Cli => flags::execute_cli(cpu),
        Operation::Sei => flags::execute_sei(cpu),
        Operation::Cld => flags::execute_cld(cpu),
        Operation::Sed => flags::execute_sed(cpu),
        Operation::Clv => flags::execute_clv(cpu),

        Operation::Tax => transfer::execute_tax(cpu),
        Operation::Tay => transfer::execute_tay(cpu),
        Operation::Txa => transfer::execute_txa(cpu),
        Operation::Tya => transfer::execute_tya(cpu),
        Operation::Tsx => transfer::execute_tsx(cpu),
        Operation::Txs => transfer::execute_txs(cpu),
    }

    0
}
