//! # Opcode Metadata Table
//!
//! This module contains the complete 256-entry opcode metadata table that serves as the
//! single source of truth for instruction decoding.
//!
//! The table covers:
//! - **151 documented instructions** - Official NMOS 6502 opcodes
//! - **105 illegal/undocumented opcodes** - Marked with "???" mnemonic
//!
//! Each opcode entry includes:
//! - The operation to execute (which selects the handler)
//! - Addressing mode (which selects the operand resolver)
//! - Base cycle cost and whether a page-crossing penalty applies
//! - Instruction size in bytes

use crate::addressing::AddressingMode;
use AddressingMode::{
    Absolute as Abs, AbsoluteX as Abx, AbsoluteY as Aby, Accumulator as Acc, Immediate as Imm,
    Implicit as Imp, Indirect as Ind, IndirectX as Izx, IndirectY as Izy, Relative as Rel,
    ZeroPage as Zp, ZeroPageX as Zpx, ZeroPageY as Zpy,
};
use Operation::*;

/// The 56 documented 6502 operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
}

impl Operation {
    /// Three-letter assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Operation::Adc => "ADC",
            Operation::And => "AND",
            Operation::Asl => "ASL",
            Operation::Bcc => "BCC",
            Operation::Bcs => "BCS",
            Operation::Beq => "BEQ",
            Operation::Bit => "BIT",
            Operation::Bmi => "BMI",
            Operation::Bne => "BNE",
            Operation::Bpl => "BPL",
            Operation::Brk => "BRK",
            Operation::Bvc => "BVC",
            Operation::Bvs => "BVS",
            Operation::Clc => "CLC",
            Operation::Cld => "CLD",
            Operation::Cli => "CLI",
            Operation::Clv => "CLV",
            Operation::Cmp => "CMP",
            Operation::Cpx => "CPX",
            Operation::Cpy => "CPY",
            Operation::Dec => "DEC",
            Operation::Dex => "DEX",
            Operation::Dey => "DEY",
            Operation::Eor => "EOR",
            Operation::Inc => "INC",
            Operation::Inx => "INX",
            Operation::Iny => "INY",
            Operation::Jmp => "JMP",
            Operation::Jsr => "JSR",
            Operation::Lda => "LDA",
            Operation::Ldx => "LDX",
            Operation::Ldy => "LDY",
            Operation::Lsr => "LSR",
            Operation::Nop => "NOP",
            Operation::Ora => "ORA",
            Operation::Pha => "PHA",
            Operation::Php => "PHP",
            Operation::Pla => "PLA",
            Operation::Plp => "PLP",
            Operation::Rol => "ROL",
            Operation::Ror => "ROR",
            Operation::Rti => "RTI",
            Operation::Rts => "RTS",
            Operation::Sbc => "SBC",
            Operation::Sec => "SEC",
            Operation::Sed => "SED",
            Operation::Sei => "SEI",
            Operation::Sta => "STA",
            Operation::Stx => "STX",
            Operation::Sty => "STY",
            Operation::Tax => "TAX",
            Operation::Tay => "TAY",
            Operation::Tsx => "TSX",
            Operation::Txa => "TXA",
            Operation::Txs => "TXS",
            Operation::Tya => "TYA",
        }
    }

    /// True for the eight conditional branches.
    pub const fn is_branch(self) -> bool {
        matches!(
            self,
            Operation::Bcc
                | Operation::Bcs
                | Operation::Beq
                | Operation::Bmi
                | Operation::Bne
                | Operation::Bpl
                | Operation::Bvc
                | Operation::Bvs
        )
    }
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use cpu6502::{AddressingMode, Operation, OPCODE_TABLE};
///
/// // Look up LDA absolute,X (opcode 0xBD)
/// let lda = &OPCODE_TABLE[0xBD];
/// assert_eq!(lda.mnemonic, "LDA");
/// assert_eq!(lda.operation, Some(Operation::Lda));
/// assert_eq!(lda.addressing_mode, AddressingMode::AbsoluteX);
/// assert_eq!(lda.base_cycles, 4);
/// assert_eq!(lda.size_bytes, 3);
/// assert!(lda.page_penalty);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic (e.g., "LDA", "STA", "???" for illegal opcodes).
    pub mnemonic: &'static str,

    /// Operation executed by this opcode, `None` for illegal opcodes.
    pub operation: Option<Operation>,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost (before page crossing and branch penalties).
    ///
    /// Illegal opcodes are marked with 0 cycles.
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,

    /// Whether an indexed page crossing adds one cycle.
    ///
    /// Set for reads (loads, ADC, SBC, AND, ORA, EOR, CMP) in AbsoluteX,
    /// AbsoluteY and IndirectY modes. Stores and read-modify-write
    /// instructions always pay the worst case in `base_cycles` instead.
    pub page_penalty: bool,
}

impl OpcodeMetadata {
    const ILLEGAL: OpcodeMetadata = OpcodeMetadata {
        mnemonic: "???",
        operation: None,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_penalty: false,
    };

    const fn documented(
        operation: Operation,
        addressing_mode: AddressingMode,
        base_cycles: u8,
        page_penalty: bool,
    ) -> Self {
        OpcodeMetadata {
            mnemonic: operation.mnemonic(),
            operation: Some(operation),
            addressing_mode,
            base_cycles,
            size_bytes: 1 + addressing_mode.operand_bytes(),
            page_penalty,
        }
    }

    /// Whether this opcode is a documented instruction the engine executes.
    pub const fn implemented(&self) -> bool {
        self.operation.is_some()
    }
}

/// (opcode, operation, mode, base cycles, page-crossing penalty)
type Entry = (u8, Operation, AddressingMode, u8, bool);

/// Documented opcodes, grouped by operation.
const DOCUMENTED: [Entry; 151] = [
    (0x69, Adc, Imm, 2, false),
    (0x65, Adc, Zp, 3, false),
    (0x75, Adc, Zpx, 4, false),
    (0x6D, Adc, Abs, 4, false),
    (0x7D, Adc, Abx, 4, true),
    (0x79, Adc, Aby, 4, true),
    (0x61, Adc, Izx, 6, false),
    (0x71, Adc, Izy, 5, true),
    (0x29, And, Imm, 2, false),
    (0x25, And, Zp, 3, false),
    (0x35, And, Zpx, 4, false),
    (0x2D, And, Abs, 4, false),
    (0x3D, And, Abx, 4, true),
    (0x39, And, Aby, 4, true),
    (0x21, And, Izx, 6, false),
    (0x31, And, Izy, 5, true),
    (0x0A, Asl, Acc, 2, false),
    (0x06, Asl, Zp, 5, false),
    (0x16, Asl, Zpx, 6, false),
    (0x0E, Asl, Abs, 6, false),
    (0x1E, Asl, Abx, 7, false),
    (0x90, Bcc, Rel, 2, false),
    (0xB0, Bcs, Rel, 2, false),
    (0xF0, Beq, Rel, 2, false),
    (0x24, Bit, Zp, 3, false),
    (0x2C, Bit, Abs, 4, false),
    (0x30, Bmi, Rel, 2, false),
    (0xD0, Bne, Rel, 2, false),
    (0x10, Bpl, Rel, 2, false),
    (0x00, Brk, Imp, 7, false),
    (0x50, Bvc, Rel, 2, false),
    (0x70, Bvs, Rel, 2, false),
    (0x18, Clc, Imp, 2, false),
    (0xD8, Cld, Imp, 2, false),
    (0x58, Cli, Imp, 2, false),
    (0xB8, Clv, Imp, 2, false),
    (0xC9, Cmp, Imm, 2, false),
    (0xC5, Cmp, Zp, 3, false),
    (0xD5, Cmp, Zpx, 4, false),
    (0xCD, Cmp, Abs, 4, false),
    (0xDD, Cmp, Abx, 4, true),
    (0xD9, Cmp, Aby, 4, true),
    (0xC1, Cmp, Izx, 6, false),
    (0xD1, Cmp, Izy, 5, true),
    (0xE0, Cpx, Imm, 2, false),
    (0xE4, Cpx, Zp, 3, false),
    (0xEC, Cpx, Abs, 4, false),
    (0xC0, Cpy, Imm, 2, false),
    (0xC4, Cpy, Zp, 3, false),
    (0xCC, Cpy, Abs, 4, false),
    (0xC6, Dec, Zp, 5, false),
    (0xD6, Dec, Zpx, 6, false),
    (0xCE, Dec, Abs, 6, false),
    (0xDE, Dec, Abx, 7, false),
    (0xCA, Dex, Imp, 2, false),
    (0x88, Dey, Imp, 2, false),
    (0x49, Eor, Imm, 2, false),
    (0x45, Eor, Zp, 3, false),
    (0x55, Eor, Zpx, 4, false),
    (0x4D, Eor, Abs, 4, false),
    (0x5D, Eor, Abx, 4, true),
    (0x59, Eor, Aby, 4, true),
    (0x41, Eor, Izx, 6, false),
    (0x51, Eor, Izy, 5, true),
    (0xE6, Inc, Zp, 5, false),
    (0xF6, Inc, Zpx, 6, false),
    (0xEE, Inc, Abs, 6, false),
    (0xFE, Inc, Abx, 7, false),
    (0xE8, Inx, Imp, 2, false),
    (0xC8, Iny, Imp, 2, false),
    (0x4C, Jmp, Abs, 3, false),
    (0x6C, Jmp, Ind, 5, false),
    (0x20, Jsr, Abs, 6, false),
    (0xA9, Lda, Imm, 2, false),
    (0xA5, Lda, Zp, 3, false),
    (0xB5, Lda, Zpx, 4, false),
    (0xAD, Lda, Abs, 4, false),
    (0xBD, Lda, Abx, 4, true),
    (0xB9, Lda, Aby, 4, true),
    (0xA1, Lda, Izx, 6, false),
    (0xB1, Lda, Izy, 5, true),
    (0xA2, Ldx, Imm, 2, false),
    (0xA6, Ldx, Zp, 3, false),
    (0xB6, Ldx, Zpy, 4, false),
    (0xAE, Ldx, Abs, 4, false),
    (0xBE, Ldx, Aby, 4, true),
    (0xA0, Ldy, Imm, 2, false),
    (0xA4, Ldy, Zp, 3, false),
    (0xB4, Ldy, Zpx, 4, false),
    (0xAC, Ldy, Abs, 4, false),
    (0xBC, Ldy, Abx, 4, true),
    (0x4A, Lsr, Acc, 2, false),
    (0x46, Lsr, Zp, 5, false),
    (0x56, Lsr, Zpx, 6, false),
    (0x4E, Lsr, Abs, 6, false),
    (0x5E, Lsr, Abx, 7, false),
    (0xEA, Nop, Imp, 2, false),
    (0x09, Ora, Imm, 2, false),
    (0x05, Ora, Zp, 3, false),
    (0x15, Ora, Zpx, 4, false),
    (0x0D, Ora, Abs, 4, false),
    (0x1D, Ora, Abx, 4, true),
    (0x19, Ora, Aby, 4, true),
    (0x01, Ora, Izx, 6, false),
    (0x11, Ora, Izy, 5, true),
    (0x48, Pha, Imp, 3, false),
    (0x08, Php, Imp, 3, false),
    (0x68, Pla, Imp, 4, false),
    (0x28, Plp, Imp, 4, false),
    (0x2A, Rol, Acc, 2, false),
    (0x26, Rol, Zp, 5, false),
    (0x36, Rol, Zpx, 6, false),
    (0x2E, Rol, Abs, 6, false),
    (0x3E, Rol, Abx, 7, false),
    (0x6A, Ror, Acc, 2, false),
    (0x66, Ror, Zp, 5, false),
    (0x76, Ror, Zpx, 6, false),
    (0x6E, Ror, Abs, 6, false),
    (0x7E, Ror, Abx, 7, false),
    (0x40, Rti, Imp, 6, false),
    (0x60, Rts, Imp, 6, false),
    (0xE9, Sbc, Imm, 2, false),
    (0xE5, Sbc, Zp, 3, false),
    (0xF5, Sbc, Zpx, 4, false),
    (0xED, Sbc, Abs, 4, false),
    (0xFD, Sbc, Abx, 4, true),
    (0xF9, Sbc, Aby, 4, true),
    (0xE1, Sbc, Izx, 6, false),
    (0xF1, Sbc, Izy, 5, true),
    (0x38, Sec, Imp, 2, false),
    (0xF8, Sed, Imp, 2, false),
    (0x78, Sei, Imp, 2, false),
    (0x85, Sta, Zp, 3, false),
    (0x95, Sta, Zpx, 4, false),
    (0x8D, Sta, Abs, 4, false),
    (0x9D, Sta, Abx, 5, false),
    (0x99, Sta, Aby, 5, false),
    (0x81, Sta, Izx, 6, false),
    (0x91, Sta, Izy, 6, false),
    (0x86, Stx, Zp, 3, false),
    (0x96, Stx, Zpy, 4, false),
    (0x8E, Stx, Abs, 4, false),
    (0x84, Sty, Zp, 3, false),
    (0x94, Sty, Zpx, 4, false),
    (0x8C, Sty, Abs, 4, false),
    (0xAA, Tax, Imp, 2, false),
    (0xA8, Tay, Imp, 2, false),
    (0xBA, Tsx, Imp, 2, false),
    (0x8A, Txa, Imp, 2, false),
    (0x9A, Txs, Imp, 2, false),
    (0x98, Tya, Imp, 2, false),
];

const fn build_table() -> [OpcodeMetadata; 256] {
    let mut table = [OpcodeMetadata::ILLEGAL; 256];
    let mut i = 0;
    while i < DOCUMENTED.len() {
        let (opcode, operation, mode, cycles, penalty) = DOCUMENTED[i];
        table[opcode as usize] = OpcodeMetadata::documented(operation, mode, cycles, penalty);
        i += 1;
    }
    table
}

/// Complete 256-entry opcode metadata table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use cpu6502::OPCODE_TABLE;
///
/// let brk = &OPCODE_TABLE[0x00];
/// assert_eq!(brk.mnemonic, "BRK");
/// assert_eq!(brk.base_cycles, 7);
///
/// // Illegal opcode
/// let illegal = &OPCODE_TABLE[0x02];
/// assert_eq!(illegal.mnemonic, "???");
/// assert_eq!(illegal.operation, None);
/// assert_eq!(illegal.base_cycles, 0);
/// ```
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = build_table();
