//! Tests for the bitwise instructions AND, ORA, EOR and BIT.

use cpu6502::{FlatMemory, Machine, MemoryBus};

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

// ========== AND ==========

#[test]
fn test_and_immediate() {
    let mut m = setup(&[0x29, 0x0F]);
    m.cpu_mut().set_a(0xF3);

    assert_eq!(m.step(), Ok(2));
    assert_eq!(m.cpu().a(), 0x03);
    assert!(!m.cpu().flag_z());
    assert!(!m.cpu().flag_n());
}

#[test]
fn test_and_zero_result() {
    let mut m = setup(&[0x29, 0x0F]);
    m.cpu_mut().set_a(0xF0);

    m.step().unwrap();

    assert_eq!(m.cpu().a(), 0x00);
    assert!(m.cpu().flag_z());
}

#[test]
fn test_and_absolute_y_page_cross() {
    let mut m = setup(&[0x39, 0xFF, 0x20]);
    m.cpu_mut().set_a(0xFF);
    m.cpu_mut().set_y(0x01);
    m.memory_mut().write(0x2100, 0x81);

    assert_eq!(m.step(), Ok(5));
    assert_eq!(m.cpu().a(), 0x81);
    assert!(m.cpu().flag_n());
}

#[test]
fn test_and_preserves_carry_and_overflow() {
    let mut m = setup(&[0x29, 0x00]);
    m.cpu_mut().set_flag_c(true);
    m.cpu_mut().set_flag_v(true);

    m.step().unwrap();

    assert!(m.cpu().flag_c());
    assert!(m.cpu().flag_v());
}

// ========== ORA ==========

#[test]
fn test_ora_immediate_negative() {
    let mut m = setup(&[0x09, 0x80]);
    m.cpu_mut().set_a(0x01);

    assert_eq!(m.step(), Ok(2));
    assert_eq!(m.cpu().a(), 0x81);
    assert!(m.cpu().flag_n());
}

#[test]
fn test_ora_zero_page_x() {
    let mut m = setup(&[0x15, 0x10]);
    m.cpu_mut().set_x(0x02);
    m.memory_mut().write(0x0012, 0x0C);
    m.cpu_mut().set_a(0x30);

    assert_eq!(m.step(), Ok(4));
    assert_eq!(m.cpu().a(), 0x3C);
}

#[test]
fn test_ora_zero_with_zero() {
    let mut m = setup(&[0x05, 0x10]);

    assert_eq!(m.step(), Ok(3));
    assert!(m.cpu().flag_z());
}

// ========== EOR ==========

#[test]
fn test_eor_self_clears() {
    let mut m = setup(&[0x49, 0xFF]);
    m.cpu_mut().set_a(0xFF);

    m.step().unwrap();

    assert_eq!(m.cpu().a(), 0x00);
    assert!(m.cpu().flag_z());
    assert!(!m.cpu().flag_n());
}

#[test]
fn test_eor_indexed_indirect() {
    let mut m = setup(&[0x41, 0x10]);
    m.cpu_mut().set_a(0x0F);
    m.cpu_mut().set_x(0x02);
    m.memory_mut().write(0x0012, 0x00);
    m.memory_mut().write(0x0013, 0x40);
    m.memory_mut().write(0x4000, 0xFF);

    assert_eq!(m.step(), Ok(6));
    assert_eq!(m.cpu().a(), 0xF0);
    assert!(m.cpu().flag_n());
}

#[test]
fn test_eor_indirect_indexed_no_page_cross() {
    let mut m = setup(&[0x51, 0x10]);
    m.cpu_mut().set_a(0x01);
    m.cpu_mut().set_y(0x01);
    m.memory_mut().write(0x0010, 0x00);
    m.memory_mut().write(0x0011, 0x40);
    m.memory_mut().write(0x4001, 0x03);

    assert_eq!(m.step(), Ok(5));
    assert_eq!(m.cpu().a(), 0x02);
}

// ========== BIT ==========

#[test]
fn test_bit_zero_page_copies_high_bits() {
    let mut m = setup(&[0x24, 0x10]);
    m.cpu_mut().set_a(0x01);
    m.memory_mut().write(0x0010, 0xC0);

    assert_eq!(m.step(), Ok(3));

    assert!(m.cpu().flag_z());
    assert!(m.cpu().flag_n());
    assert!(m.cpu().flag_v());
    assert_eq!(m.cpu().a(), 0x01);
}

#[test]
fn test_bit_absolute_clears_flags() {
    let mut m = setup(&[0x2C, 0x00, 0x30]);
    m.cpu_mut().set_a(0xFF);
    m.cpu_mut().set_flag_n(true);
    m.cpu_mut().set_flag_v(true);
    m.cpu_mut().set_flag_z(true);
    m.memory_mut().write(0x3000, 0x3F);

    assert_eq!(m.step(), Ok(4));

    assert!(!m.cpu().flag_z());
    assert!(!m.cpu().flag_n());
    assert!(!m.cpu().flag_v());
    assert_eq!(m.memory().read(0x3000), 0x3F);
}

#[test]
fn test_bit_leaves_carry() {
    let mut m = setup(&[0x24, 0x10]);
    m.cpu_mut().set_flag_c(true);

    m.step().unwrap();

    assert!(m.cpu().flag_c());
}
