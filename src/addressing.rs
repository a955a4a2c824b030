//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6502 processor
//! and the resolver that turns the bytes following an opcode into an
//! effective address.
//!
//! Resolution happens once per instruction, right after the opcode fetch. The
//! resolver advances PC past every operand byte it consumes and reports
//! whether indexing moved the address onto another page. Handlers then read or
//! write through the resulting [`Operand`].

use crate::{MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how the CPU interprets the operand bytes
/// that follow an opcode and how it calculates the effective memory address
/// for the operation.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    /// May incur +1 cycle penalty if page boundary is crossed.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// Addressing context produced for a single instruction.
///
/// Lives only for the duration of one `step()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operand {
    /// Mode the operand was resolved with.
    pub mode: AddressingMode,

    /// Effective address.
    ///
    /// For Immediate and Relative this is the location of the operand byte
    /// itself. Unused (0) for Implicit and Accumulator.
    pub address: u16,

    /// True when indexing moved `address` onto a different page than the
    /// unindexed base address.
    pub page_crossed: bool,
}

impl Operand {
    fn at(mode: AddressingMode, address: u16) -> Self {
        Self {
            mode,
            address,
            page_crossed: false,
        }
    }

    fn indexed(mode: AddressingMode, base: u16, index: u8) -> Self {
        let address = base.wrapping_add(index as u16);
        Self {
            mode,
            address,
            page_crossed: page_crossed(base, address),
        }
    }
}

/// Returns true if `a` and `b` lie on different 256-byte pages.
pub(crate) fn page_crossed(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

impl CPU {
    /// Reads the byte at PC and advances PC.
    pub(crate) fn fetch_byte<M: MemoryBus>(&mut self, bus: &M) -> u8 {
        let value = bus.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Reads a little-endian word at PC and advances PC by two.
    pub(crate) fn fetch_word<M: MemoryBus>(&mut self, bus: &M) -> u16 {
        let lo = self.fetch_byte(bus);
        let hi = self.fetch_byte(bus);
        u16::from_le_bytes([lo, hi])
    }

    /// Resolves the operand for `mode`, consuming its bytes from the
    /// instruction stream.
    pub(crate) fn resolve<M: MemoryBus>(&mut self, bus: &M, mode: AddressingMode) -> Operand {
        match mode {
            AddressingMode::Implicit | AddressingMode::Accumulator => Operand::at(mode, 0),

            AddressingMode::Immediate | AddressingMode::Relative => {
                let address = self.pc;
                self.pc = self.pc.wrapping_add(1);
                Operand::at(mode, address)
            }

            AddressingMode::ZeroPage => {
                let zp = self.fetch_byte(bus);
                Operand::at(mode, zp as u16)
            }

            AddressingMode::ZeroPageX => {
                let zp = self.fetch_byte(bus).wrapping_add(self.x);
                Operand::at(mode, zp as u16)
            }

            AddressingMode::ZeroPageY => {
                let zp = self.fetch_byte(bus).wrapping_add(self.y);
                Operand::at(mode, zp as u16)
            }

            AddressingMode::Absolute => {
                let address = self.fetch_word(bus);
                Operand::at(mode, address)
            }

            AddressingMode::AbsoluteX => {
                let base = self.fetch_word(bus);
                Operand::indexed(mode, base, self.x)
            }

            AddressingMode::AbsoluteY => {
                let base = self.fetch_word(bus);
                Operand::indexed(mode, base, self.y)
            }

            AddressingMode::Indirect => {
                let ptr = self.fetch_word(bus);
                let lo = bus.read(ptr);
                // NMOS bug: the high byte never carries into the next page
                let hi_addr = if self.config.indirect_jmp_page_wrap {
                    (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF)
                } else {
                    ptr.wrapping_add(1)
                };
                let hi = bus.read(hi_addr);
                Operand::at(mode, u16::from_le_bytes([lo, hi]))
            }

            AddressingMode::IndirectX => {
                let ptr = self.fetch_byte(bus).wrapping_add(self.x);
                Operand::at(mode, read_zero_page_word(bus, ptr))
            }

            AddressingMode::IndirectY => {
                let ptr = self.fetch_byte(bus);
                let base = read_zero_page_word(bus, ptr);
                Operand::indexed(mode, base, self.y)
            }
        }
    }
}

/// Reads a pointer from the zero page; the high byte wraps from 0xFF to 0x00.
fn read_zero_page_word<M: MemoryBus>(bus: &M, ptr: u8) -> u16 {
    let lo = bus.read(ptr as u16);
    let hi = bus.read(ptr.wrapping_add(1) as u16);
    u16::from_le_bytes([lo, hi])
}
