//! Tests for INC, DEC, INX, INY, DEX and DEY.

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

// ========== Memory ==========

#[test]
fn test_inc_zero_page_wraps_to_zero() {
    let mut m = setup(&[0xE6, 0x10]);
    m.memory_mut().write(0x0010, 0xFF);

    assert_eq!(m.step(), Ok(5));

    assert_eq!(m.memory().read(0x0010), 0x00);
    assert!(m.cpu().flag_z());
    assert!(!m.cpu().flag_n());
}

#[test]
fn test_inc_absolute_x_page_cross_has_fixed_cycles() {
    let mut m = setup(&[0xFE, 0xFF, 0x20]);
    m.cpu_mut().set_x(0x01);
    m.memory_mut().write(0x2100, 0x7F);

    assert_eq!(m.step(), Ok(7));

    assert_eq!(m.memory().read(0x2100), 0x80);
    assert!(m.cpu().flag_n());
}

#[test]
fn test_inc_leaves_carry() {
    let mut m = setup(&[0xEE, 0x00, 0x30]);
    m.memory_mut().write(0x3000, 0xFF);
    m.cpu_mut().set_flag_c(false);

    assert_eq!(m.step(), Ok(6));
    assert!(!m.cpu().flag_c());
}

#[test]
fn test_dec_zero_page_wraps_to_ff() {
    let mut m = setup(&[0xC6, 0x10]);

    assert_eq!(m.step(), Ok(5));

    assert_eq!(m.memory().read(0x0010), 0xFF);
    assert!(m.cpu().flag_n());
}

#[test]
fn test_dec_zero_page_x() {
    let mut m = setup(&[0xD6, 0x10]);
    m.cpu_mut().set_x(0x01);
    m.memory_mut().write(0x0011, 0x01);

    assert_eq!(m.step(), Ok(6));
    assert_eq!(m.memory().read(0x0011), 0x00);
    assert!(m.cpu().flag_z());
}

#[test]
fn test_dec_absolute() {
    let mut m = setup(&[0xCE, 0x00, 0x30]);
    m.memory_mut().write(0x3000, 0x10);

    assert_eq!(m.step(), Ok(6));
    assert_eq!(m.memory().read(0x3000), 0x0F);
}

// ========== Registers ==========

#[test]
fn test_inx_wraps_to_zero() {
    let mut m = setup(&[0xE8]);
    m.cpu_mut().set_x(0xFF);

    assert_eq!(m.step(), Ok(2));
    assert_eq!(m.cpu().x(), 0x00);
    assert!(m.cpu().flag_z());
    assert_eq!(m.cpu().pc(), 0x8001);
}

#[test]
fn test_iny_into_negative() {
    let mut m = setup(&[0xC8]);
    m.cpu_mut().set_y(0x7F);

    assert_eq!(m.step(), Ok(2));
    assert_eq!(m.cpu().y(), 0x80);
    assert!(m.cpu().flag_n());
}

#[test]
fn test_dex_wraps_to_ff() {
    let mut m = setup(&[0xCA]);

    assert_eq!(m.step(), Ok(2));
    assert_eq!(m.cpu().x(), 0xFF);
    assert!(m.cpu().flag_n());
}

#[test]
fn test_dey_to_zero() {
    let mut m = setup(&[0x88]);
    m.cpu_mut().set_y(0x01);

    assert_eq!(m.step(), Ok(2));
    assert_eq!(m.cpu().y(), 0x00);
    assert!(m.cpu().flag_z());
}

#[test]
fn test_register_increment_leaves_other_registers() {
    let mut m = setup(&[0xE8, 0xC8]);
    m.cpu_mut().set_a(0x11);

    m.step().unwrap();
    m.step().unwrap();

    assert_eq!(m.cpu().a(), 0x11);
    assert_eq!(m.cpu().x(), 0x01);
    assert_eq!(m.cpu().y(), 0x01);
}
