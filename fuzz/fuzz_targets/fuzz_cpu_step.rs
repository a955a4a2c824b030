//! Fuzz target for CPU step execution.
//!
//! This target creates arbitrary CPU states and memory contents, executes a
//! few instructions, and checks the invariants every step must keep.

#![no_main]

use arbitrary::Arbitrary;
use cpu6502::{CpuConfig, FlatMemory, Machine, MemoryBus, OPCODE_TABLE};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    /// Packed NV-BDIZC byte
    status: u8,
    /// Whether JMP ($xxFF) reproduces the page-wrap quirk
    indirect_jmp_page_wrap: bool,
}

/// Memory region for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instructions + operands)
    instruction_bytes: [u8; 16],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// Small region of memory for absolute addressing
    main_memory: [u8; 256],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();

    for (i, &byte) in input.memory.instruction_bytes.iter().enumerate() {
        memory.write(0x8000 + i as u16, byte);
    }
    for (i, &byte) in input.memory.zero_page.iter().enumerate() {
        memory.write(i as u16, byte);
    }
    for (i, &byte) in input.memory.stack_page.iter().enumerate() {
        memory.write(0x0100 + i as u16, byte);
    }
    for (i, &byte) in input.memory.main_memory.iter().enumerate() {
        memory.write(0x4000 + i as u16, byte);
    }

    let config = CpuConfig {
        indirect_jmp_page_wrap: input.cpu_state.indirect_jmp_page_wrap,
        ..CpuConfig::default()
    };
    let mut machine = Machine::with_config(memory, config);

    let cpu = machine.cpu_mut();
    cpu.set_pc(0x8000);
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);

    for _ in 0..4 {
        let pc = machine.cpu().pc();
        let opcode = machine.memory().read(pc);
        let metadata = &OPCODE_TABLE[opcode as usize];
        let cycles_before = machine.cpu().cycles();

        match machine.step() {
            Ok(cycles) => {
                // Base cost plus at most two extra (taken branch across a page)
                assert!(cycles >= metadata.base_cycles);
                assert!(cycles <= metadata.base_cycles + 2);
                assert_eq!(machine.cpu().cycles(), cycles_before + cycles as u64);
            }
            Err(_) => {
                assert!(!metadata.implemented());
                assert_eq!(machine.cpu().pc(), pc.wrapping_add(1));
                assert_eq!(machine.cpu().cycles(), cycles_before);
            }
        }

        assert_eq!(machine.cpu().status() & 0x20, 0x20);
    }
});
