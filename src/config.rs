//! # CPU Configuration
//!
//! Construction-time options for the CPU core. Defaults reproduce NMOS 6502
//! behavior.

/// Options applied when a CPU is created.
///
/// # Examples
///
/// ```
/// use cpu6502::{CpuConfig, FlatMemory, Machine};
///
/// let config = CpuConfig {
///     indirect_jmp_page_wrap: false,
///     ..CpuConfig::default()
/// };
///
/// let machine = Machine::with_config(FlatMemory::new(), config);
/// assert_eq!(machine.cpu().sp(), 0xFD);
/// assert!(!machine.cpu().config().indirect_jmp_page_wrap);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CpuConfig {
    /// Reproduce the NMOS indirect JMP bug.
    ///
    /// When the pointer of `JMP ($xxFF)` sits on the last byte of a page, the
    /// hardware fetches the target high byte from `$xx00` rather than from
    /// the next page. Programs written for real hardware may rely on it.
    pub indirect_jmp_page_wrap: bool,

    /// Stack pointer value after power-on.
    pub reset_stack_pointer: u8,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            indirect_jmp_page_wrap: true,
            reset_stack_pointer: 0xFD,
        }
    }
}
