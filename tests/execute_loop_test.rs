//! Tests for the execution loop: single steps, cycle budgets, undefined
//! opcodes, and short multi-instruction programs.

use cpu6502::{ExecutionError, FlatMemory, Machine, MemoryBus};

/// Helper function to create a machine with `program` loaded at 0x8000
fn setup(program: &[u8]) -> Machine<FlatMemory> {
    let mut memory = FlatMemory::new();
    for (i, byte) in program.iter().enumerate() {
        memory.write(0x8000 + i as u16, *byte);
    }
    let mut machine = Machine::connect(memory);
    machine.cpu_mut().set_pc(0x8000);
    machine
}

// ========== Undefined opcodes ==========

#[test]
fn test_undefined_opcode_reports_error() {
    let mut m = setup(&[0xFF]);
    m.cpu_mut().set_a(0x12);
    let before = m.cpu().snapshot();

    let result = m.step();

    assert_eq!(
        result,
        Err(ExecutionError::UnimplementedOpcode {
            opcode: 0xFF,
            address: 0x8000,
        })
    );
    assert_eq!(m.cpu().pc(), 0x8001);
    assert_eq!(m.cpu().cycles(), 0);
    assert_eq!(m.cpu().a(), before.a);
    assert_eq!(m.cpu().status(), before.status);
    assert_eq!(m.cpu().sp(), before.sp);
}

#[test]
fn test_undefined_opcode_error_message() {
    let mut m = setup(&[0x02]);

    let err = m.step().unwrap_err();

    assert_eq!(err.to_string(), "Opcode 0x02 at 0x8000 is not implemented");
}

#[test]
fn test_every_undefined_opcode_is_rejected() {
    let undefined: Vec<u8> = (0..=255u8)
        .filter(|&op| !cpu6502::OPCODE_TABLE[op as usize].implemented())
        .collect();
    assert_eq!(undefined.len(), 105);

    for opcode in undefined {
        let mut m = setup(&[opcode]);
        assert!(m.step().is_err(), "0x{:02X} should be rejected", opcode);
        assert_eq!(m.cpu().pc(), 0x8001);
    }
}

#[test]
fn test_execution_continues_after_undefined_opcode() {
    let mut m = setup(&[0xFF, 0xA9, 0x07]);

    assert!(m.step().is_err());
    assert_eq!(m.step(), Ok(2));
    assert_eq!(m.cpu().a(), 0x07);
}

// ========== Cycle budgets ==========

#[test]
fn test_step_returns_per_instruction_cycles() {
    // LDA #$01 ; STA $0200 ; NOP
    let mut m = setup(&[0xA9, 0x01, 0x8D, 0x00, 0x02, 0xEA]);

    assert_eq!(m.step(), Ok(2));
    assert_eq!(m.step(), Ok(4));
    assert_eq!(m.step(), Ok(2));
    assert_eq!(m.cpu().cycles(), 8);
}

#[test]
fn test_run_for_cycles_exact_budget() {
    let mut m = setup(&[0xEA; 8]);

    assert_eq!(m.run_for_cycles(10), Ok(10));
    assert_eq!(m.cpu().pc(), 0x8005);
}

#[test]
fn test_run_for_cycles_may_overshoot() {
    // INC $10 takes 5 cycles
    let mut m = setup(&[0xE6, 0x10, 0xE6, 0x10]);

    assert_eq!(m.run_for_cycles(6), Ok(10));
    assert_eq!(m.memory().read(0x0010), 2);
}

#[test]
fn test_run_for_cycles_zero_budget() {
    let mut m = setup(&[0xEA]);

    assert_eq!(m.run_for_cycles(0), Ok(0));
    assert_eq!(m.cpu().pc(), 0x8000);
}

#[test]
fn test_run_for_cycles_stops_on_undefined_opcode() {
    let mut m = setup(&[0xEA, 0xEA, 0x02]);

    let result = m.run_for_cycles(100);

    assert_eq!(
        result,
        Err(ExecutionError::UnimplementedOpcode {
            opcode: 0x02,
            address: 0x8002,
        })
    );
    assert_eq!(m.cpu().cycles(), 4);
}

#[test]
fn test_run_for_cycles_unbounded_budget() {
    // NOP ; undefined
    let mut m = setup(&[0xEA, 0x02]);
    m.step().unwrap();

    let result = m.run_for_cycles(u64::MAX);

    assert_eq!(
        result,
        Err(ExecutionError::UnimplementedOpcode {
            opcode: 0x02,
            address: 0x8001,
        })
    );
    assert_eq!(m.cpu().cycles(), 2);
}

// ========== Programs ==========

#[test]
fn test_countdown_loop() {
    // LDX #$05 ; loop: DEX ; BNE loop
    let mut m = setup(&[0xA2, 0x05, 0xCA, 0xD0, 0xFD]);

    let mut steps = 0;
    while m.cpu().pc() != 0x8005 {
        m.step().unwrap();
        steps += 1;
    }

    assert_eq!(steps, 11);
    assert_eq!(m.cpu().x(), 0);
    assert!(m.cpu().flag_z());
    // LDX 2 + 5 * DEX 2 + 4 taken BNE 3 + final BNE 2
    assert_eq!(m.cpu().cycles(), 26);
}

#[test]
fn test_sum_one_to_ten() {
    let program = [
        0xA9, 0x00, // LDA #$00
        0xA2, 0x0A, // LDX #$0A
        0x86, 0x10, // loop: STX $10
        0x18, // CLC
        0x65, 0x10, // ADC $10
        0xCA, // DEX
        0xD0, 0xF8, // BNE loop
        0x85, 0x20, // STA $20
        0x00, // BRK
    ];
    let mut m = setup(&program);

    while !m.cpu().flag_b() {
        m.step().unwrap();
    }

    assert_eq!(m.memory().read(0x0020), 55);
    assert_eq!(m.cpu().pc(), 0x800F);
}

#[test]
fn test_subroutine_with_stack_use() {
    let program = [
        0xA9, 0x03, // LDA #$03
        0x20, 0x00, 0x90, // JSR double
        0x85, 0x30, // STA $30
        0x00, // BRK
    ];
    let mut m = setup(&program);
    // double: PHA ; PLA ; ASL A ; RTS
    for (i, byte) in [0x48, 0x68, 0x0A, 0x60].iter().enumerate() {
        m.memory_mut().write(0x9000 + i as u16, *byte);
    }

    while !m.cpu().flag_b() {
        m.step().unwrap();
    }

    assert_eq!(m.memory().read(0x0030), 0x06);
    assert_eq!(m.cpu().sp(), 0xFD);
}
