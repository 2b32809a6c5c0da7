//! # Control Flow Instructions
//!
//! - BRK: software interrupt through the IRQ/BRK vector
//!
//! BRK is the only interrupt source the core models; it is synchronous
//! and fully described by the push protocol below.

use crate::bus::MemoryBus;
use crate::cpu::{Cpu, Flag};
use crate::opcodes::OPCODE_TABLE;

/// Executes BRK (Force Interrupt).
///
/// The push protocol, in order:
/// 1. Compute the return address as PC + 1. PC is already past the
///    opcode, so the pushed address points one byte past BRK, leaving a
///    signature-byte slot.
/// 2. Push the return address high byte, then low byte.
/// 3. Set B, push the status byte, then clear B in live state.
/// 4. Set I.
/// 5. Load PC from the vector at 0xFFFE/F (little-endian).
///
/// Cycle timing: 7 cycles, fixed.
///
/// # Flag Behavior
///
/// - Break (B): 1 in the pushed status byte, 0 in live state afterward
/// - InterruptDisable (I): set to 1
pub(crate) fn execute_brk<B: MemoryBus>(cpu: &mut Cpu, bus: &mut B, opcode: u8) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    // One byte past the opcode: the signature-byte slot
    let return_pc = cpu.pc.wrapping_add(1);
    cpu.push_word(bus, return_pc);

    cpu.set_flag(Flag::Break, true);
    let status = cpu.status();
    cpu.push_byte(bus, status);
    cpu.set_flag(Flag::Break, false);

    cpu.set_flag(Flag::InterruptDisable, true);

    cpu.pc = cpu.read_irq_vector(bus);

    cpu.cycles += metadata.base_cycles as u64;
}
