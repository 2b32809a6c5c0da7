//! # Load and Store Instructions
//!
//! - LDA: load accumulator from memory
//! - STA: store accumulator to memory

use crate::bus::MemoryBus;
use crate::cpu::Cpu;
use crate::opcodes::OPCODE_TABLE;

/// Executes LDA (Load Accumulator).
///
/// `A := M`.
///
/// # Flag Behavior
///
/// - Zero (Z): set if A = 0
/// - Negative (N): set if bit 7 of A is set
/// - Other flags: not affected
///
/// Indexed reads that cross a page boundary cost one extra cycle.
pub(crate) fn execute_lda<B: MemoryBus>(cpu: &mut Cpu, bus: &mut B, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (addr, page_crossed) = cpu.operand_address(bus, metadata.addressing_mode);
    let value = bus.read(addr);

    cpu.a = value;
    cpu.set_nz(value);

    let mut cycles = metadata.base_cycles as u64;
    if page_crossed && metadata.page_penalty {
        cycles += 1;
    }
    cpu.cycles += cycles;
}

/// Executes STA (Store Accumulator).
///
/// `M := A`. No flags are affected.
///
/// Stores always take their worst-case cycle count; crossing a page
/// costs nothing extra.
pub(crate) fn execute_sta<B: MemoryBus>(cpu: &mut Cpu, bus: &mut B, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (addr, _) = cpu.operand_address(bus, metadata.addressing_mode);
    bus.write(addr, cpu.a);

    cpu.cycles += metadata.base_cycles as u64;
}
