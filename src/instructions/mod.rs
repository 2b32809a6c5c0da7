//! # Instruction Implementations
//!
//! Per-mnemonic semantics, organized by category. Each handler takes the
//! CPU, the borrowed bus, and the opcode byte; it resolves its operand
//! through the decode table, mutates architectural state, and charges
//! its total cycle cost (base plus any page-cross or branch-taken
//! additions) to the CPU's cycle counter.
//!
//! ## Categories
//!
//! - **load_store**: LDA, STA
//! - **alu**: ADC, AND, BIT, CMP
//! - **shifts**: ASL
//! - **branches**: BCC, BCS, BNE, BEQ, BPL, BMI, BVC, BVS
//! - **flags**: CLC, CLD, CLI, CLV
//! - **control**: BRK

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod load_store;
pub mod shifts;
