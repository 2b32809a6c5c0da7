//! # Opcode Decode Table
//!
//! The 256-entry metadata table that serves as the single source of
//! truth for instruction decode. Each entry carries the mnemonic tag,
//! the addressing mode, the base cycle cost, the instruction size, and
//! whether the opcode pays the read page-cross penalty.
//!
//! Semantics live in per-mnemonic handlers under
//! [`crate::instructions`]; the table only describes shape and cost.

use crate::addressing::AddressingMode;

/// Instruction mnemonic tag.
///
/// One variant per instruction the core recognizes, plus [`Illegal`]
/// for the bytes it does not. Dispatch matches on this tag, so adding
/// an instruction means the compiler points at every site to update.
///
/// [`Illegal`]: Mnemonic::Illegal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    /// Add memory to accumulator with carry.
    Adc,
    /// Bitwise AND memory with accumulator.
    And,
    /// Arithmetic shift left (accumulator or memory).
    Asl,
    /// Branch if carry clear.
    Bcc,
    /// Branch if carry set.
    Bcs,
    /// Branch if equal (zero set).
    Beq,
    /// Bit test: Z from A & M, N and V copied from memory bits 7 and 6.
    Bit,
    /// Branch if minus (negative set).
    Bmi,
    /// Branch if not equal (zero clear).
    Bne,
    /// Branch if plus (negative clear).
    Bpl,
    /// Software interrupt through the vector at 0xFFFE/F.
    Brk,
    /// Branch if overflow clear.
    Bvc,
    /// Branch if overflow set.
    Bvs,
    /// Clear carry flag.
    Clc,
    /// Clear decimal flag.
    Cld,
    /// Clear interrupt-disable flag.
    Cli,
    /// Clear overflow flag.
    Clv,
    /// Compare memory with accumulator.
    Cmp,
    /// Load accumulator from memory.
    Lda,
    /// Store accumulator to memory.
    Sta,
    /// Byte with no recognized encoding; executes as a 1-cycle no-op.
    Illegal,
}

/// Static decode metadata for a single opcode byte.
///
/// # Examples
///
/// ```
/// use sim6502::{AddressingMode, Mnemonic, OPCODE_TABLE};
///
/// // LDA immediate (0xA9)
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
/// assert!(!lda_imm.page_penalty);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Which instruction this byte decodes to.
    pub mnemonic: Mnemonic,

    /// How the operand bytes are interpreted.
    pub addressing_mode: AddressingMode,

    /// Cycle cost before page-cross or branch-taken additions.
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode plus operands, 1-3).
    pub size_bytes: u8,

    /// Whether an indexed read that crosses a page adds one cycle.
    ///
    /// True only for read instructions in AbsoluteX, AbsoluteY, and
    /// IndirectY modes. Stores always take their worst-case count and
    /// never pay this penalty.
    pub page_penalty: bool,
}

/// Shared entry for every byte without a recognized encoding.
///
/// Costs one cycle and consumes only the opcode byte, so the dispatch
/// loop always makes progress.
const ILLEGAL: OpcodeMetadata = OpcodeMetadata {
    mnemonic: Mnemonic::Illegal,
    addressing_mode: AddressingMode::Implied,
    base_cycles: 1,
    size_bytes: 1,
    page_penalty: false,
};

const fn entry(
    mnemonic: Mnemonic,
    addressing_mode: AddressingMode,
    base_cycles: u8,
    size_bytes: u8,
    page_penalty: bool,
) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        addressing_mode,
        base_cycles,
        size_bytes,
        page_penalty,
    }
}

const fn build_table() -> [OpcodeMetadata; 256] {
    use AddressingMode::*;
    use Mnemonic::*;

    let mut t = [ILLEGAL; 256];

    // LDA
    t[0xA9] = entry(Lda, Immediate, 2, 2, false);
    t[0xA5] = entry(Lda, ZeroPage, 3, 2, false);
    t[0xB5] = entry(Lda, ZeroPageX, 4, 2, false);
    t[0xAD] = entry(Lda, Absolute, 4, 3, false);
    t[0xBD] = entry(Lda, AbsoluteX, 4, 3, true);
    t[0xB9] = entry(Lda, AbsoluteY, 4, 3, true);
    t[0xA1] = entry(Lda, IndirectX, 6, 2, false);
    t[0xB1] = entry(Lda, IndirectY, 5, 2, true);

    // STA (stores always take the worst case, no page penalty)
    t[0x85] = entry(Sta, ZeroPage, 3, 2, false);
    t[0x95] = entry(Sta, ZeroPageX, 4, 2, false);
    t[0x8D] = entry(Sta, Absolute, 4, 3, false);
    t[0x9D] = entry(Sta, AbsoluteX, 5, 3, false);
    t[0x99] = entry(Sta, AbsoluteY, 5, 3, false);
    t[0x81] = entry(Sta, IndirectX, 6, 2, false);
    t[0x91] = entry(Sta, IndirectY, 6, 2, false);

    // ADC
    t[0x69] = entry(Adc, Immediate, 2, 2, false);
    t[0x65] = entry(Adc, ZeroPage, 3, 2, false);
    t[0x75] = entry(Adc, ZeroPageX, 4, 2, false);
    t[0x6D] = entry(Adc, Absolute, 4, 3, false);
    t[0x7D] = entry(Adc, AbsoluteX, 4, 3, true);
    t[0x79] = entry(Adc, AbsoluteY, 4, 3, true);
    t[0x61] = entry(Adc, IndirectX, 6, 2, false);
    t[0x71] = entry(Adc, IndirectY, 5, 2, true);

    // AND
    t[0x29] = entry(And, Immediate, 2, 2, false);
    t[0x25] = entry(And, ZeroPage, 3, 2, false);
    t[0x35] = entry(And, ZeroPageX, 4, 2, false);
    t[0x2D] = entry(And, Absolute, 4, 3, false);
    t[0x3D] = entry(And, AbsoluteX, 4, 3, true);
    t[0x39] = entry(And, AbsoluteY, 4, 3, true);
    t[0x21] = entry(And, IndirectX, 6, 2, false);
    t[0x31] = entry(And, IndirectY, 5, 2, true);

    // CMP
    t[0xC9] = entry(Cmp, Immediate, 2, 2, false);
    t[0xC5] = entry(Cmp, ZeroPage, 3, 2, false);
    t[0xD5] = entry(Cmp, ZeroPageX, 4, 2, false);
    t[0xCD] = entry(Cmp, Absolute, 4, 3, false);
    t[0xDD] = entry(Cmp, AbsoluteX, 4, 3, true);
    t[0xD9] = entry(Cmp, AbsoluteY, 4, 3, true);
    t[0xC1] = entry(Cmp, IndirectX, 6, 2, false);
    t[0xD1] = entry(Cmp, IndirectY, 5, 2, true);

    // ASL (read-modify-write: fixed worst-case cycles)
    t[0x0A] = entry(Asl, Accumulator, 2, 1, false);
    t[0x06] = entry(Asl, ZeroPage, 5, 2, false);
    t[0x16] = entry(Asl, ZeroPageX, 6, 2, false);
    t[0x0E] = entry(Asl, Absolute, 6, 3, false);
    t[0x1E] = entry(Asl, AbsoluteX, 7, 3, false);

    // BIT
    t[0x24] = entry(Bit, ZeroPage, 3, 2, false);
    t[0x2C] = entry(Bit, Absolute, 4, 3, false);

    // Branches: 2 base cycles, +1 taken, +1 more on page cross
    t[0x10] = entry(Bpl, Relative, 2, 2, false);
    t[0x30] = entry(Bmi, Relative, 2, 2, false);
    t[0x50] = entry(Bvc, Relative, 2, 2, false);
    t[0x70] = entry(Bvs, Relative, 2, 2, false);
    t[0x90] = entry(Bcc, Relative, 2, 2, false);
    t[0xB0] = entry(Bcs, Relative, 2, 2, false);
    t[0xD0] = entry(Bne, Relative, 2, 2, false);
    t[0xF0] = entry(Beq, Relative, 2, 2, false);

    // BRK
    t[0x00] = entry(Brk, Implied, 7, 1, false);

    // Flag clears
    t[0x18] = entry(Clc, Implied, 2, 1, false);
    t[0x58] = entry(Cli, Implied, 2, 1, false);
    t[0xB8] = entry(Clv, Implied, 2, 1, false);
    t[0xD8] = entry(Cld, Implied, 2, 1, false);

    t
}

/// Complete decode table indexed by opcode byte value.
///
/// Every byte the core does not recognize shares the [`Mnemonic::Illegal`]
/// entry: one cycle, one byte, no operands.
///
/// # Examples
///
/// ```
/// use sim6502::{Mnemonic, OPCODE_TABLE};
///
/// let brk = &OPCODE_TABLE[0x00];
/// assert_eq!(brk.mnemonic, Mnemonic::Brk);
/// assert_eq!(brk.base_cycles, 7);
///
/// // 0x02 has no documented encoding
/// assert_eq!(OPCODE_TABLE[0x02].mnemonic, Mnemonic::Illegal);
/// ```
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = build_table();
