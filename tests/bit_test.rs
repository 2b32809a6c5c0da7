//! Tests for the BIT (Bit Test) instruction.
//!
//! Z comes from A & M; N and V are copied straight from memory bits 7
//! and 6; the accumulator is never modified.

use sim6502::{Bus, Cpu, Flag, MemoryBus};

/// Creates a reset CPU with the program counter at 0x0200.
fn setup() -> (Cpu, Bus) {
    let mut bus = Bus::new();
    let mut cpu = Cpu::new();
    cpu.reset(&mut bus);
    cpu.set_pc(0x0200);

    (cpu, bus)
}

#[test]
fn test_bit_zero_page_disjoint_operands() {
    let (mut cpu, mut bus) = setup();

    // BIT $10 with mem = 0xF0, A = 0x0F: A & M = 0
    bus.write(0x0200, 0x24);
    bus.write(0x0201, 0x10);
    bus.write(0x0010, 0xF0);
    cpu.set_a(0x0F);

    cpu.step(&mut bus);

    assert!(cpu.flag(Flag::Zero));
    assert!(cpu.flag(Flag::Negative)); // memory bit 7
    assert!(cpu.flag(Flag::Overflow)); // memory bit 6
    assert_eq!(cpu.a(), 0x0F); // unchanged
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_bit_overlapping_operands_clear_z() {
    let (mut cpu, mut bus) = setup();

    // BIT $10 with mem = 0x01, A = 0x01
    bus.write(0x0200, 0x24);
    bus.write(0x0201, 0x10);
    bus.write(0x0010, 0x01);
    cpu.set_a(0x01);

    cpu.step(&mut bus);

    assert!(!cpu.flag(Flag::Zero));
    assert!(!cpu.flag(Flag::Negative));
    assert!(!cpu.flag(Flag::Overflow));
}

#[test]
fn test_bit_copies_n_from_memory_only() {
    let (mut cpu, mut bus) = setup();

    // mem bit 7 set, bit 6 clear
    bus.write(0x0200, 0x24);
    bus.write(0x0201, 0x10);
    bus.write(0x0010, 0x80);
    cpu.set_a(0xFF);

    cpu.step(&mut bus);

    assert!(cpu.flag(Flag::Negative));
    assert!(!cpu.flag(Flag::Overflow));
    assert!(!cpu.flag(Flag::Zero)); // 0xFF & 0x80 != 0
}

#[test]
fn test_bit_copies_v_from_memory_only() {
    let (mut cpu, mut bus) = setup();

    // mem bit 6 set, bit 7 clear
    bus.write(0x0200, 0x24);
    bus.write(0x0201, 0x10);
    bus.write(0x0010, 0x40);
    cpu.set_a(0x00);

    cpu.step(&mut bus);

    assert!(cpu.flag(Flag::Overflow));
    assert!(!cpu.flag(Flag::Negative));
    assert!(cpu.flag(Flag::Zero));
}

#[test]
fn test_bit_clears_stale_n_and_v() {
    let (mut cpu, mut bus) = setup();

    bus.write(0x0200, 0x24);
    bus.write(0x0201, 0x10);
    bus.write(0x0010, 0x01);
    cpu.set_a(0x01);
    cpu.set_flag(Flag::Negative, true);
    cpu.set_flag(Flag::Overflow, true);

    cpu.step(&mut bus);

    assert!(!cpu.flag(Flag::Negative));
    assert!(!cpu.flag(Flag::Overflow));
}

#[test]
fn test_bit_absolute() {
    let (mut cpu, mut bus) = setup();

    // BIT $1234
    bus.write(0x0200, 0x2C);
    bus.write(0x0201, 0x34);
    bus.write(0x0202, 0x12);
    bus.write(0x1234, 0xC0);
    cpu.set_a(0x3F);

    cpu.step(&mut bus);

    assert!(cpu.flag(Flag::Zero));
    assert!(cpu.flag(Flag::Negative));
    assert!(cpu.flag(Flag::Overflow));
    assert_eq!(cpu.pc(), 0x0203);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_bit_preserves_carry() {
    let (mut cpu, mut bus) = setup();

    bus.write(0x0200, 0x24);
    bus.write(0x0201, 0x10);
    bus.write(0x0010, 0xFF);
    cpu.set_flag(Flag::Carry, true);

    cpu.step(&mut bus);

    assert!(cpu.flag(Flag::Carry));
}
