//! # Arithmetic and Logic Instructions
//!
//! - ADC: add memory to accumulator with carry (binary mode only; the
//!   D flag is ignored)
//! - AND: bitwise AND memory with accumulator
//! - BIT: bit test against memory
//! - CMP: compare memory with accumulator

use crate::bus::MemoryBus;
use crate::cpu::{Cpu, Flag};
use crate::opcodes::OPCODE_TABLE;

/// Executes ADC (Add with Carry).
///
/// `A := A + M + C`, computed in nine bits.
///
/// # Flag Behavior
///
/// - Carry (C): set if the 9-bit sum exceeds 0xFF
/// - Zero (Z): set if the truncated result is 0
/// - Negative (N): set if bit 7 of the result is set
/// - Overflow (V): set when both operands share a sign different from
///   the result's sign: `(A ^ r) & (M ^ r) & 0x80`
pub(crate) fn execute_adc<B: MemoryBus>(cpu: &mut Cpu, bus: &mut B, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (addr, page_crossed) = cpu.operand_address(bus, metadata.addressing_mode);
    let value = bus.read(addr);

    let a = cpu.a;
    let carry_in = cpu.flag(Flag::Carry) as u16;

    // Do the math in a word so the carry out is visible
    let result16 = a as u16 + value as u16 + carry_in;
    let result = result16 as u8;

    cpu.set_flag(Flag::Carry, result16 > 0xFF);
    cpu.set_nz(result);
    cpu.set_flag(Flag::Overflow, (a ^ result) & (value ^ result) & 0x80 != 0);

    cpu.a = result;

    let mut cycles = metadata.base_cycles as u64;
    if page_crossed && metadata.page_penalty {
        cycles += 1;
    }
    cpu.cycles += cycles;
}

/// Executes AND (Logical AND).
///
/// `A := A & M`.
///
/// # Flag Behavior
///
/// - Zero (Z): set if the result is 0
/// - Negative (N): set if bit 7 of the result is set
pub(crate) fn execute_and<B: MemoryBus>(cpu: &mut Cpu, bus: &mut B, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (addr, page_crossed) = cpu.operand_address(bus, metadata.addressing_mode);
    let value = bus.read(addr);

    let result = cpu.a & value;

    cpu.a = result;
    cpu.set_nz(result);

    let mut cycles = metadata.base_cycles as u64;
    if page_crossed && metadata.page_penalty {
        cycles += 1;
    }
    cpu.cycles += cycles;
}

/// Executes BIT (Bit Test).
///
/// Computes `A & M` without storing it.
///
/// # Flag Behavior
///
/// - Zero (Z): set if `A & M` is 0
/// - Negative (N): copied from bit 7 of the memory operand
/// - Overflow (V): copied from bit 6 of the memory operand
/// - The accumulator is unchanged
pub(crate) fn execute_bit<B: MemoryBus>(cpu: &mut Cpu, bus: &mut B, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (addr, _) = cpu.operand_address(bus, metadata.addressing_mode);
    let value = bus.read(addr);

    cpu.set_flag(Flag::Zero, cpu.a & value == 0);
    cpu.set_flag(Flag::Negative, value & 0x80 != 0);
    cpu.set_flag(Flag::Overflow, value & 0x40 != 0);

    cpu.cycles += metadata.base_cycles as u64;
}

/// Executes CMP (Compare Accumulator).
///
/// Computes `A - M` and discards the difference.
///
/// # Flag Behavior
///
/// - Carry (C): set if `A >= M` (unsigned)
/// - Zero (Z): set if `A == M`
/// - Negative (N): set if bit 7 of `A - M` is set
/// - The accumulator is unchanged
pub(crate) fn execute_cmp<B: MemoryBus>(cpu: &mut Cpu, bus: &mut B, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (addr, page_crossed) = cpu.operand_address(bus, metadata.addressing_mode);
    let value = bus.read(addr);

    let result = cpu.a.wrapping_sub(value);

    cpu.set_flag(Flag::Carry, cpu.a >= value);
    cpu.set_nz(result);

    let mut cycles = metadata.base_cycles as u64;
    if page_crossed && metadata.page_penalty {
        cycles += 1;
    }
    cpu.cycles += cycles;
}
