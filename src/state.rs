//! # Register Snapshots
//!
//! A plain-data copy of the register file, used to save and restore CPU state
//! (for example between test cases, or alongside a memory image). With the
//! `serde` feature enabled the snapshot can be serialized in any serde format.

/// Saved CPU register file.
///
/// # Examples
///
/// ```
/// use cpu6502::CPU;
///
/// let mut cpu = CPU::new();
/// cpu.set_a(0x42);
/// cpu.set_pc(0xC000);
///
/// let state = cpu.snapshot();
/// assert_eq!(state.a, 0x42);
/// assert_eq!(state.pc, 0xC000);
/// assert_eq!(state.status, 0x24);
///
/// let mut restored = CPU::new();
/// restored.restore(&state);
/// assert_eq!(restored.a(), 0x42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CpuState {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub pc: u16,
    pub sp: u8,
    /// Packed status register (NV-BDIZC), bit 5 set.
    pub status: u8,
    /// Total cycles executed when the snapshot was taken.
    pub cycles: u64,
}
