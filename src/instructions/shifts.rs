//! # Shift Instructions
//!
//! - ASL: arithmetic shift left, on the accumulator or in memory

use crate::addressing::AddressingMode;
use crate::bus::MemoryBus;
use crate::cpu::{Cpu, Flag};
use crate::opcodes::OPCODE_TABLE;

/// Executes ASL (Arithmetic Shift Left).
///
/// Shifts the accumulator or a memory byte one bit left; bit 0 becomes
/// 0 and the old bit 7 lands in the carry.
///
/// # Flag Behavior
///
/// - Carry (C): old bit 7 of the operand
/// - Zero (Z): set if the result is 0
/// - Negative (N): set if bit 7 of the result is set
///
/// Memory forms are read-modify-write and take their fixed worst-case
/// cycle count; there is no page-cross penalty.
pub(crate) fn execute_asl<B: MemoryBus>(cpu: &mut Cpu, bus: &mut B, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let result = if metadata.addressing_mode == AddressingMode::Accumulator {
        let value = cpu.a;

        cpu.set_flag(Flag::Carry, value & 0x80 != 0);

        let result = value << 1;
        cpu.a = result;

        result
    } else {
        // Read, shift, write back
        let (addr, _) = cpu.operand_address(bus, metadata.addressing_mode);
        let value = bus.read(addr);

        cpu.set_flag(Flag::Carry, value & 0x80 != 0);

        let result = value << 1;
        bus.write(addr, result);

        result
    };

    cpu.set_nz(result);
    cpu.cycles += metadata.base_cycles as u64;
}
