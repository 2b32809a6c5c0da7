//! # Flag Clear Instructions
//!
//! - CLC: clear carry
//! - CLD: clear decimal mode
//! - CLI: clear interrupt disable
//! - CLV: clear overflow
//!
//! All use implied addressing and take 2 cycles. Each clears exactly
//! its own flag.

use crate::bus::MemoryBus;
use crate::cpu::{Cpu, Flag};
use crate::opcodes::OPCODE_TABLE;

fn clear_flag(cpu: &mut Cpu, opcode: u8, flag: Flag) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.set_flag(flag, false);
    cpu.cycles += metadata.base_cycles as u64;
}

/// Executes CLC (Clear Carry Flag): `C := 0`.
pub(crate) fn execute_clc<B: MemoryBus>(cpu: &mut Cpu, _bus: &mut B, opcode: u8) {
    clear_flag(cpu, opcode, Flag::Carry);
}

/// Executes CLD (Clear Decimal Mode): `D := 0`.
pub(crate) fn execute_cld<B: MemoryBus>(cpu: &mut Cpu, _bus: &mut B, opcode: u8) {
    clear_flag(cpu, opcode, Flag::Decimal);
}

/// Executes CLI (Clear Interrupt Disable): `I := 0`.
pub(crate) fn execute_cli<B: MemoryBus>(cpu: &mut Cpu, _bus: &mut B, opcode: u8) {
    clear_flag(cpu, opcode, Flag::InterruptDisable);
}

/// Executes CLV (Clear Overflow Flag): `V := 0`.
pub(crate) fn execute_clv<B: MemoryBus>(cpu: &mut Cpu, _bus: &mut B, opcode: u8) {
    clear_flag(cpu, opcode, Flag::Overflow);
}
