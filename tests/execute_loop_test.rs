//! Tests for the dispatch loop: budget accounting, instruction
//! completion past the budget, unrecognized-opcode policy, and pumping
//! the machine across multiple `execute` calls.

use sim6502::{Bus, Cpu, MemoryBus};

/// Creates a reset CPU with the program counter at 0x0200.
fn setup() -> (Cpu, Bus) {
    let mut bus = Bus::new();
    let mut cpu = Cpu::new();
    cpu.reset(&mut bus);
    cpu.set_pc(0x0200);

    (cpu, bus)
}

#[test]
fn test_execute_consumes_exact_budget() {
    let (mut cpu, mut bus) = setup();

    // Four LDA #imm, 2 cycles each
    for i in 0..4u16 {
        bus.write(0x0200 + i * 2, 0xA9);
        bus.write(0x0201 + i * 2, 0x10 + i as u8);
    }

    cpu.execute(&mut bus, 8);

    assert_eq!(cpu.cycles(), 8);
    assert_eq!(cpu.a(), 0x13);
    assert_eq!(cpu.pc(), 0x0208);
}

#[test]
fn test_started_instruction_always_completes() {
    let (mut cpu, mut bus) = setup();

    // LDA #$01 (2) then STA $1234 (4); a budget of 3 starts the
    // store, which runs to completion
    bus.write(0x0200, 0xA9);
    bus.write(0x0201, 0x01);
    bus.write(0x0202, 0x8D);
    bus.write(0x0203, 0x34);
    bus.write(0x0204, 0x12);

    cpu.execute(&mut bus, 3);

    assert_eq!(bus.read(0x1234), 0x01);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_overshoot_carries_into_next_budget() {
    let (mut cpu, mut bus) = setup();

    // STA $10 costs 3; a 1-cycle budget runs it entirely, and the
    // 2-cycle debt is charged against the next call
    bus.write(0x0200, 0x85);
    bus.write(0x0201, 0x10);
    bus.write(0x0202, 0xA9); // LDA #$55
    bus.write(0x0203, 0x55);

    cpu.execute(&mut bus, 1);
    assert_eq!(cpu.cycles(), 3);
    assert_eq!(cpu.a(), 0x00);

    // 3 already spent of this 5-cycle total: only the LDA runs
    cpu.execute(&mut bus, 2);
    assert_eq!(cpu.a(), 0x55);
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_zero_budget_executes_nothing() {
    let (mut cpu, mut bus) = setup();

    bus.write(0x0200, 0xA9);
    bus.write(0x0201, 0x42);

    cpu.execute(&mut bus, 0);

    assert_eq!(cpu.cycles(), 0);
    assert_eq!(cpu.pc(), 0x0200);
    assert_eq!(cpu.a(), 0x00);
}

#[test]
fn test_unrecognized_opcode_is_one_cycle_noop() {
    let (mut cpu, mut bus) = setup();

    // 0x02 has no documented encoding; then a real instruction
    bus.write(0x0200, 0x02);
    bus.write(0x0201, 0xA9);
    bus.write(0x0202, 0x42);

    cpu.execute(&mut bus, 3);

    assert_eq!(cpu.a(), 0x42);
    assert_eq!(cpu.cycles(), 3);
    assert_eq!(cpu.pc(), 0x0203);
}

#[test]
fn test_unrecognized_opcode_leaves_state_untouched() {
    let (mut cpu, mut bus) = setup();

    bus.write(0x0200, 0xFF);
    cpu.set_a(0x11);
    cpu.set_x(0x22);
    cpu.set_y(0x33);
    let status = cpu.status();
    let sp = cpu.sp();

    cpu.execute(&mut bus, 1);

    assert_eq!(cpu.a(), 0x11);
    assert_eq!(cpu.x(), 0x22);
    assert_eq!(cpu.y(), 0x33);
    assert_eq!(cpu.status(), status);
    assert_eq!(cpu.sp(), sp);
    assert_eq!(cpu.pc(), 0x0201); // only the opcode byte is consumed
}

#[test]
fn test_embedder_can_mutate_memory_between_calls() {
    let (mut cpu, mut bus) = setup();

    // LDA $50 twice; the embedder swaps the operand value in between,
    // standing in for an external device
    bus.write(0x0200, 0xA5);
    bus.write(0x0201, 0x50);
    bus.write(0x0202, 0xA5);
    bus.write(0x0203, 0x50);
    bus.write(0x0050, 0x01);

    cpu.execute(&mut bus, 3);
    assert_eq!(cpu.a(), 0x01);

    bus.write(0x0050, 0x02);
    cpu.execute(&mut bus, 3);
    assert_eq!(cpu.a(), 0x02);
}

#[test]
fn test_two_cpus_share_one_bus_sequentially() {
    let mut bus = Bus::new();
    let mut first = Cpu::new();
    first.reset(&mut bus);

    bus.write(0x0100, 0xA9); // LDA #$0A
    bus.write(0x0101, 0x0A);

    let mut second = Cpu::new();

    first.execute(&mut bus, 2);
    second.execute(&mut bus, 2);

    // Both ran the same program from the same memory image
    assert_eq!(first.a(), 0x0A);
    assert_eq!(second.a(), 0x0A);
    assert_eq!(first.cycles(), 2);
    assert_eq!(second.cycles(), 2);
}

#[test]
fn test_program_counter_wraps_through_top_of_memory() {
    let (mut cpu, mut bus) = setup();

    // LDA #imm straddling the address-space wrap: opcode at 0xFFFF,
    // operand at 0x0000
    cpu.set_pc(0xFFFF);
    bus.write(0xFFFF, 0xA9);
    bus.write(0x0000, 0x77);

    cpu.step(&mut bus);

    assert_eq!(cpu.a(), 0x77);
    assert_eq!(cpu.pc(), 0x0001);
}
