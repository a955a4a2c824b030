//! # Machine
//!
//! A `Machine` is the single owner of a CPU and the memory it runs against.
//! The CPU never holds a pointer to memory; the machine lends its memory to
//! the CPU for the duration of each `step()`, so the CPU always executes
//! against the same memory instance the caller inspects.

use crate::{CpuConfig, ExecutionError, MemoryBus, CPU};

/// Owns a [`CPU`] and its [`MemoryBus`].
///
/// # Examples
///
/// ```
/// use cpu6502::{FlatMemory, Machine, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// // JSR $1234
/// memory.write(0x8000, 0x20);
/// memory.write(0x8001, 0x34);
/// memory.write(0x8002, 0x12);
/// // RTS
/// memory.write(0x1234, 0x60);
///
/// let mut machine = Machine::connect(memory);
/// machine.cpu_mut().set_pc(0x8000);
///
/// assert_eq!(machine.step(), Ok(6));
/// assert_eq!(machine.cpu().pc(), 0x1234);
///
/// assert_eq!(machine.step(), Ok(6));
/// assert_eq!(machine.cpu().pc(), 0x8003);
/// ```
pub struct Machine<M: MemoryBus> {
    cpu: CPU,
    memory: M,
}

impl<M: MemoryBus> Machine<M> {
    /// Binds a power-on CPU to `memory`.
    ///
    /// The machine takes ownership of the memory; there is no way to swap it
    /// while the CPU is running. Use [`Machine::into_parts`] and
    /// [`Machine::from_parts`] to rebind, which is treated as a reset point.
    pub fn connect(memory: M) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    /// Binds a power-on CPU built from `config` to `memory`.
    pub fn with_config(memory: M, config: CpuConfig) -> Self {
        log::debug!("Connecting CPU to memory bus ({:?})", config);
        Self {
            cpu: CPU::with_config(config),
            memory,
        }
    }

    /// Reassembles a machine from an existing CPU and memory.
    pub fn from_parts(cpu: CPU, memory: M) -> Self {
        log::debug!("Rebinding CPU at PC=0x{:04X} to memory bus", cpu.pc());
        Self { cpu, memory }
    }

    /// Splits the machine back into its CPU and memory.
    pub fn into_parts(self) -> (CPU, M) {
        log::debug!("Disconnecting CPU at PC=0x{:04X}", self.cpu.pc());
        (self.cpu, self.memory)
    }

    /// Executes exactly one instruction and returns its cycle cost.
    ///
    /// # Errors
    ///
    /// See [`CPU::step`].
    pub fn step(&mut self) -> Result<u8, ExecutionError> {
        self.cpu.step(&mut self.memory)
    }

    /// Executes instructions until at least `cycle_budget` cycles have run.
    ///
    /// # Errors
    ///
    /// See [`CPU::run_for_cycles`].
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        self.cpu.run_for_cycles(&mut self.memory, cycle_budget)
    }

    /// The processor, for inspecting registers and flags.
    pub fn cpu(&self) -> &CPU {
        &self.cpu
    }

    /// Mutable access to registers, for test setup.
    pub fn cpu_mut(&mut self) -> &mut CPU {
        &mut self.cpu
    }

    /// The attached memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Mutable access to the memory bus, for loading programs.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }
}
