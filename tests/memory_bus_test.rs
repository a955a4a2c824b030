//! Memory bus trait tests
//!
//! Verifies that the MemoryBus trait implementation works correctly.

use cpu6502::{FlatMemory, Machine, MemoryBus, CPU};

#[test]
fn test_flat_memory_initialization() {
    let memory = FlatMemory::new();

    for addr in [0x0000, 0x1234, 0x8000, 0xFFFF].iter() {
        assert_eq!(
            memory.read(*addr),
            0x00,
            "Memory at 0x{:04X} should be initialized to 0",
            addr
        );
    }
}

#[test]
fn test_flat_memory_read_write_round_trip() {
    let mut memory = FlatMemory::new();

    let test_data = [
        (0x0000, 0x01),
        (0x00FF, 0xFF),
        (0x0100, 0x7F),
        (0x1234, 0x42),
        (0x8000, 0xAB),
        (0xFFFF, 0xCD),
    ];

    for &(addr, value) in &test_data {
        memory.write(addr, value);
        assert_eq!(
            memory.read(addr),
            value,
            "Memory at 0x{:04X} should contain 0x{:02X}",
            addr,
            value
        );
    }
}

#[test]
fn test_flat_memory_independence() {
    let mut memory = FlatMemory::new();

    memory.write(0x1000, 0xAA);
    memory.write(0x2000, 0xBB);
    memory.write(0x3000, 0xCC);

    assert_eq!(memory.read(0x1000), 0xAA);
    assert_eq!(memory.read(0x2000), 0xBB);
    assert_eq!(memory.read(0x3000), 0xCC);

    // Adjacent addresses are unaffected
    assert_eq!(memory.read(0x0FFF), 0x00);
    assert_eq!(memory.read(0x1001), 0x00);
    assert_eq!(memory.read(0x1FFF), 0x00);
    assert_eq!(memory.read(0x2001), 0x00);
}

#[test]
fn test_read_word_is_little_endian_and_wraps() {
    let mut memory = FlatMemory::new();
    memory.write(0x1000, 0x34);
    memory.write(0x1001, 0x12);
    memory.write(0xFFFF, 0xCD);
    memory.write(0x0000, 0xAB);

    assert_eq!(memory.read_word(0x1000), 0x1234);
    assert_eq!(memory.read_word(0xFFFF), 0xABCD);
}

/// A bus that records every write, standing in for memory-mapped hardware.
#[derive(Default)]
struct RecordingBus {
    ram: Vec<u8>,
    writes: Vec<(u16, u8)>,
}

impl RecordingBus {
    fn new() -> Self {
        Self {
            ram: vec![0; 0x10000],
            writes: Vec::new(),
        }
    }
}

impl MemoryBus for RecordingBus {
    fn read(&self, addr: u16) -> u8 {
        self.ram[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.writes.push((addr, value));
        self.ram[addr as usize] = value;
    }
}

#[test]
fn test_custom_bus_sees_cpu_writes() {
    let mut bus = RecordingBus::new();
    // LDA #$42 ; STA $D020 ; PHA
    for (i, byte) in [0xA9, 0x42, 0x8D, 0x20, 0xD0, 0x48].iter().enumerate() {
        bus.ram[0x8000 + i] = *byte;
    }

    let mut cpu = CPU::new();
    cpu.set_pc(0x8000);
    for _ in 0..3 {
        cpu.step(&mut bus).unwrap();
    }

    assert_eq!(bus.writes, vec![(0xD020, 0x42), (0x01FD, 0x42)]);
}

#[test]
fn test_machine_hands_memory_back() {
    let mut memory = FlatMemory::new();
    memory.write(0x8000, 0xE6); // INC $10
    memory.write(0x8001, 0x10);

    let mut machine = Machine::connect(memory);
    machine.cpu_mut().set_pc(0x8000);
    machine.step().unwrap();

    let (cpu, memory) = machine.into_parts();
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(memory.read(0x0010), 0x01);
}

#[test]
fn test_cpu_borrows_bus_through_mutable_reference() {
    let mut memory = FlatMemory::new();
    memory.write(0x0000, 0xEA);

    let mut cpu = CPU::new();
    let bus = &mut memory;
    cpu.step(bus).unwrap();

    assert_eq!(cpu.pc(), 0x0001);
    assert_eq!(memory.read(0x0000), 0xEA);
}
