//! # 6502 Instruction Execution Engine
//!
//! A cycle-counting NMOS 6502 instruction engine: it fetches opcode bytes from a
//! memory bus, resolves operands through the 13 addressing modes, executes the
//! 56 documented operations against the register file and reports the cycle
//! cost of every instruction.
//!
//! ## Quick Start
//!
//! ```rust
//! use cpu6502::{FlatMemory, Machine, MemoryBus};
//!
//! // LDA #$7F ; ADC #$01
//! let mut memory = FlatMemory::new();
//! for (i, byte) in [0xA9, 0x7F, 0x69, 0x01].iter().enumerate() {
//!     memory.write(0x8000 + i as u16, *byte);
//! }
//!
//! let mut machine = Machine::connect(memory);
//! machine.cpu_mut().set_pc(0x8000);
//!
//! assert_eq!(machine.step(), Ok(2));
//! assert_eq!(machine.step(), Ok(2));
//!
//! assert_eq!(machine.cpu().a(), 0x80);
//! assert!(machine.cpu().flag_n());
//! assert!(machine.cpu().flag_v());
//! assert!(!machine.cpu().flag_c());
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from memory via the `MemoryBus` trait.
//!   The `CPU` never owns memory; a `Machine` owns both and lends the bus to
//!   the CPU for one instruction at a time.
//! - **Table-Driven Design**: every opcode byte maps to an `OpcodeMetadata`
//!   entry naming its operation, addressing mode and base cycle cost.
//! - **Cycle Counting**: `step()` returns the cost of the single instruction it
//!   ran, including page-crossing and branch penalties.
//!
//! ## Modules
//!
//! - `cpu` - register file, fetch/resolve/execute step
//! - `status` - processor status flags
//! - `addressing` - addressing modes and operand resolution
//! - `opcodes` - opcode metadata table
//! - `memory` - MemoryBus trait and a flat 64KB implementation
//! - `machine` - single owner of a CPU and its memory
//! - `config` - construction-time CPU options
//! - `state` - register snapshots

pub mod addressing;
pub mod config;
pub mod cpu;
pub mod machine;
pub mod memory;
pub mod opcodes;
pub mod state;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::{AddressingMode, Operand};
pub use config::CpuConfig;
pub use cpu::CPU;
pub use machine::Machine;
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{OpcodeMetadata, Operation, OPCODE_TABLE};
pub use state::CpuState;
pub use status::Status;

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionError {
    /// The fetched byte is not a documented 6502 opcode.
    ///
    /// The byte has been consumed (PC points past it) but nothing was
    /// executed and no cycles were charged.
    UnimplementedOpcode {
        /// The opcode byte that was fetched.
        opcode: u8,
        /// Address the opcode was fetched from.
        address: u16,
    },
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::UnimplementedOpcode { opcode, address } => {
                write!(
                    f,
                    "Opcode 0x{:02X} at 0x{:04X} is not implemented",
                    opcode, address
                )
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
