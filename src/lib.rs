//! # 6502 CPU Emulator Core
//!
//! An instruction-accurate emulator for the MOS 6502 8-bit
//! microprocessor. The crate exposes a programmable CPU core that
//! fetches, decodes, and executes machine code held in a flat 64 KiB
//! address space, consuming a configurable cycle budget per dispatch
//! call.
//!
//! The point of the core is reproducing the 6502's micro-architectural
//! quirks precisely: post-indexed page-cross penalties, zero-page
//! wrap-around, stack confinement to page 1, overflow-flag computation,
//! and break-interrupt semantics.
//!
//! ## Quick Start
//!
//! ```rust
//! use sim6502::{Bus, Cpu, MemoryBus};
//!
//! let mut bus = Bus::new();
//! let mut cpu = Cpu::new();
//!
//! // Reset zeroes memory and boots at 0x0100
//! cpu.reset(&mut bus);
//!
//! // LDA #$20 ; ADC #$22
//! bus.write(0x0100, 0xA9);
//! bus.write(0x0101, 0x20);
//! bus.write(0x0102, 0x69);
//! bus.write(0x0103, 0x22);
//!
//! // Run a 4-cycle budget
//! cpu.execute(&mut bus, 4);
//!
//! assert_eq!(cpu.a(), 0x42);
//! ```
//!
//! ## Architecture
//!
//! Three layers, leaves first:
//!
//! - [`Memory`] — a flat 65 536-byte array, zero-initialized on reset.
//! - [`Bus`] — a narrow read/write façade over the address space,
//!   implementing the [`MemoryBus`] trait the CPU is generic over. It
//!   centralizes address decoding so memory-mapped devices can later be
//!   added without touching the CPU.
//! - [`Cpu`] — the architectural-state record plus the dispatch loop.
//!   It borrows the bus per call, so independent CPUs can coexist over
//!   distinct buses.
//!
//! Decode is table-driven: [`OPCODE_TABLE`] maps every opcode byte to
//! its mnemonic, addressing mode, size, and cycle cost, and the
//! per-mnemonic handlers implement the semantics.
//!
//! ## Execution Model
//!
//! [`Cpu::execute`] runs to exhaustion of its cycle budget and returns;
//! there is no suspension and no interrupt source besides the software
//! `BRK`. The embedder pumps the machine by calling `execute`
//! repeatedly, freely reading and writing memory between calls — that
//! is the intended substitute for external devices.

pub mod addressing;
pub mod bus;
pub mod cpu;
pub mod memory;
pub mod opcodes;

// Internal instruction implementations (not part of the public API)
mod instructions;

// Re-export public API
pub use addressing::AddressingMode;
pub use bus::{Bus, MemoryBus};
pub use cpu::{Cpu, Flag};
pub use memory::{Memory, MEMORY_SIZE};
pub use opcodes::{Mnemonic, OpcodeMetadata, OPCODE_TABLE};
