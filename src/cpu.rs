//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 register file and
//! the fetch-resolve-execute step.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: N, V, B, D, I, Z, C packed in a [`Status`] flag set
//! - **Cycle counter**: u64 monotonically increasing cycle count
//!
//! ## Execution Model
//!
//! The CPU does not own memory. Each call to `step()` borrows a [`MemoryBus`]
//! for exactly one instruction:
//!
//! 1. Fetch the opcode at PC (PC += 1)
//! 2. Look up its [`OPCODE_TABLE`] entry
//! 3. Resolve the operand for the entry's addressing mode
//! 4. Run the operation's handler
//! 5. Charge base cycles plus any page-crossing or branch penalty

use crate::addressing::{AddressingMode, Operand};
use crate::instructions;
use crate::{CpuConfig, CpuState, ExecutionError, MemoryBus, Status, OPCODE_TABLE};

/// Base address of the hardware stack page.
pub(crate) const STACK_BASE: u16 = 0x0100;

/// 6502 CPU register file and execution context.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0x8000, 0xA9); // LDA #$00
/// memory.write(0x8001, 0x00);
///
/// let mut cpu = CPU::new();
/// cpu.set_pc(0x8000);
///
/// let cycles = cpu.step(&mut memory).unwrap();
/// assert_eq!(cycles, 2);
/// assert!(cpu.flag_z());
/// assert!(!cpu.flag_n());
/// assert_eq!(cpu.pc(), 0x8002);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CPU {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Processor status flags
    pub(crate) p: Status,

    /// Total CPU cycles executed
    pub(crate) cycles: u64,

    pub(crate) config: CpuConfig,
}

impl CPU {
    /// Creates a CPU in its power-on state with the default configuration.
    ///
    /// - A, X, Y and PC are zero
    /// - SP is 0xFD
    /// - Interrupt Disable is set, every other flag is clear
    /// - Cycle counter is 0
    pub fn new() -> Self {
        Self::with_config(CpuConfig::default())
    }

    /// Creates a CPU in its power-on state using `config`.
    pub fn with_config(config: CpuConfig) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: config.reset_stack_pointer,
            p: Status::POWER_ON,
            cycles: 0,
            config,
        }
    }

    /// Executes one instruction and returns the cycles it consumed.
    ///
    /// The returned count covers this instruction only; the running total is
    /// available from [`CPU::cycles`].
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::UnimplementedOpcode`] when the fetched byte is
    /// not a documented opcode. The byte is consumed (PC advances by one) but
    /// no other state changes and no cycles are charged.
    pub fn step<M: MemoryBus>(&mut self, bus: &mut M) -> Result<u8, ExecutionError> {
        let address = self.pc;
        let opcode = self.fetch_byte(bus);
        let metadata = &OPCODE_TABLE[opcode as usize];

        let Some(operation) = metadata.operation else {
            log::warn!(
                "Unimplemented opcode 0x{:02X} at 0x{:04X}",
                opcode,
                address
            );
            return Err(ExecutionError::UnimplementedOpcode { opcode, address });
        };

        let operand = self.resolve(bus, metadata.addressing_mode);
        let extra = instructions::execute(operation, self, bus, &operand);

        let mut cycles = metadata.base_cycles + extra;
        if metadata.page_penalty && operand.page_crossed {
            cycles += 1;
        }
        self.cycles += cycles as u64;

        log::trace!(
            "{:04X}  {:02X}  {} {:?}  cycles={}",
            address,
            opcode,
            metadata.mnemonic,
            metadata.addressing_mode,
            cycles
        );

        Ok(cycles)
    }

    /// Runs the CPU for a specified number of cycles.
    ///
    /// Executes instructions until the cycle budget is exhausted or an error occurs.
    /// Returns the actual number of cycles consumed (may be slightly more than budget
    /// due to instruction granularity).
    ///
    /// # Errors
    ///
    /// Stops at the first instruction that fails and returns its error.
    pub fn run_for_cycles<M: MemoryBus>(
        &mut self,
        bus: &mut M,
        cycle_budget: u64,
    ) -> Result<u64, ExecutionError> {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles.saturating_add(cycle_budget);

        while self.cycles < target_cycles {
            self.step(bus)?;
        }

        Ok(self.cycles - start_cycles)
    }

    // ========== Stack ==========

    /// Pushes a byte: store at 0x0100 | SP, then decrement SP.
    pub(crate) fn push<M: MemoryBus>(&mut self, bus: &mut M, value: u8) {
        bus.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Pulls a byte: increment SP, then load from 0x0100 | SP.
    pub(crate) fn pull<M: MemoryBus>(&mut self, bus: &mut M) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        bus.read(STACK_BASE | self.sp as u16)
    }

    /// Pushes a word, high byte first.
    pub(crate) fn push_word<M: MemoryBus>(&mut self, bus: &mut M, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.push(bus, hi);
        self.push(bus, lo);
    }

    /// Pulls a word, low byte first.
    pub(crate) fn pull_word<M: MemoryBus>(&mut self, bus: &mut M) -> u16 {
        let lo = self.pull(bus);
        let hi = self.pull(bus);
        u16::from_le_bytes([lo, hi])
    }

    // ========== Operand access ==========

    /// Reads the value an instruction operates on.
    pub(crate) fn read_operand<M: MemoryBus>(&self, bus: &M, operand: &Operand) -> u8 {
        match operand.mode {
            AddressingMode::Accumulator => self.a,
            _ => bus.read(operand.address),
        }
    }

    /// Writes a read-modify-write result back to the accumulator or memory.
    pub(crate) fn write_operand<M: MemoryBus>(&mut self, bus: &mut M, operand: &Operand, value: u8) {
        match operand.mode {
            AddressingMode::Accumulator => self.a = value,
            _ => bus.write(operand.address, value),
        }
    }

    // ========== Snapshots ==========

    /// Captures the register file.
    pub fn snapshot(&self) -> CpuState {
        CpuState {
            a: self.a,
            x: self.x,
            y: self.y,
            pc: self.pc,
            sp: self.sp,
            status: self.status(),
            cycles: self.cycles,
        }
    }

    /// Restores the register file from a snapshot.
    pub fn restore(&mut self, state: &CpuState) {
        self.a = state.a;
        self.x = state.x;
        self.y = state.y;
        self.pc = state.pc;
        self.sp = state.sp;
        self.p = Status::from_stack(state.status);
        self.cycles = state.cycles;
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed byte (NV-BDIZC).
    ///
    /// Bit 5 always reads as 1.
    pub fn status(&self) -> u8 {
        (self.p | Status::UNUSED).bits()
    }

    /// Returns the status flags.
    pub fn flags(&self) -> Status {
        self.p | Status::UNUSED
    }

    /// Returns the total number of CPU cycles executed since initialization.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns the configuration this CPU was created with.
    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.p.contains(Status::NEGATIVE)
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.p.contains(Status::OVERFLOW)
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.p.contains(Status::BREAK)
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.p.contains(Status::DECIMAL)
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.p.contains(Status::INTERRUPT_DISABLE)
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.p.contains(Status::ZERO)
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.p.contains(Status::CARRY)
    }

    // ========== Setters (test setup) ==========

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter, e.g. to the start of a loaded program.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Replaces every flag from a packed byte; bit 5 is forced on.
    pub fn set_status(&mut self, value: u8) {
        self.p = Status::from_stack(value);
    }

    /// Sets or clears the negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.p.set(Status::NEGATIVE, value);
    }

    /// Sets or clears the overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.p.set(Status::OVERFLOW, value);
    }

    /// Sets or clears the break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.p.set(Status::BREAK, value);
    }

    /// Sets or clears the decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.p.set(Status::DECIMAL, value);
    }

    /// Sets or clears the interrupt disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.p.set(Status::INTERRUPT_DISABLE, value);
    }

    /// Sets or clears the zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.p.set(Status::ZERO, value);
    }

    /// Sets or clears the carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.p.set(Status::CARRY, value);
    }
}

impl Default for CPU {
    fn default() -> Self {
        Self::new()
    }
}
