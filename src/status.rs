//! # Processor Status Register
//!
//! The 6502 packs its condition flags into a single byte (NV-BDIZC):
//!
//! - Bit 7: N (Negative)
//! - Bit 6: V (Overflow)
//! - Bit 5: (unused, always reads 1)
//! - Bit 4: B (Break)
//! - Bit 3: D (Decimal, stored only)
//! - Bit 2: I (Interrupt Disable)
//! - Bit 1: Z (Zero)
//! - Bit 0: C (Carry)
//!
//! Bit positions only matter when the whole register is serialized, which
//! happens on PHP/PLP/RTI and in snapshots.

use bitflags::bitflags;

bitflags! {
    /// 6502 processor status flags.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::Status;
    ///
    /// let mut p = Status::UNUSED;
    /// p.set(Status::CARRY, true);
    /// assert_eq!(p.bits(), 0b0010_0001);
    ///
    /// p.set_zn(0x80);
    /// assert!(p.contains(Status::NEGATIVE));
    /// assert!(!p.contains(Status::ZERO));
    /// assert!(p.contains(Status::CARRY)); // untouched
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Status: u8 {
        /// Set if bit 7 of the last result is 1.
        const NEGATIVE = 0b1000_0000;
        /// Set on signed overflow.
        const OVERFLOW = 0b0100_0000;
        /// Not a real flag; always 1 when the register is read.
        const UNUSED = 0b0010_0000;
        /// Set by BRK.
        const BREAK = 0b0001_0000;
        /// Decimal mode (no effect on arithmetic in this engine).
        const DECIMAL = 0b0000_1000;
        /// Interrupt disable.
        const INTERRUPT_DISABLE = 0b0000_0100;
        /// Set if the last result was zero.
        const ZERO = 0b0000_0010;
        /// Carry out of bit 7, or "no borrow" for subtraction.
        const CARRY = 0b0000_0001;
    }
}

impl Status {
    /// Power-on status: interrupts disabled, bit 5 set.
    pub const POWER_ON: Status = Status::UNUSED.union(Status::INTERRUPT_DISABLE);

    /// Updates Zero and Negative from a result byte.
    pub fn set_zn(&mut self, value: u8) {
        self.set(Status::ZERO, value == 0);
        self.set(Status::NEGATIVE, value & 0x80 != 0);
    }

    /// Builds a status register from a byte pulled off the stack.
    ///
    /// Every flag is taken from `value`; bit 5 is forced on.
    pub fn from_stack(value: u8) -> Self {
        Status::from_bits_retain(value) | Status::UNUSED
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::POWER_ON
    }
}
