//! # Addressing Modes
//!
//! The addressing mode determines how the CPU interprets the operand
//! bytes that follow an opcode and how it computes the effective memory
//! address for the operation.

/// Addressing modes recognized by the core.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative,
///   IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand; the operation is implied by the instruction.
    ///
    /// Examples: BRK, CLC
    Implied,

    /// Operates directly on the accumulator register.
    ///
    /// Example: ASL A
    Accumulator,

    /// 8-bit constant embedded in the instruction stream.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address into the zero page (0x0000-0x00FF).
    ///
    /// Example: LDA $80 (loads from 0x0080)
    ZeroPage,

    /// Zero-page address indexed by X. Wraps within the zero page and
    /// never crosses into page 1.
    ///
    /// Example: LDA $FF,X with X=2 loads from 0x0001
    ZeroPageX,

    /// Zero-page address indexed by Y. Wraps within the zero page.
    ZeroPageY,

    /// Signed 8-bit offset relative to the address following the
    /// instruction; used only by branches.
    Relative,

    /// Full 16-bit little-endian address.
    ///
    /// Example: LDA $1234
    Absolute,

    /// 16-bit address indexed by X. Reads pay +1 cycle when the index
    /// carries into the high byte.
    AbsoluteX,

    /// 16-bit address indexed by Y. Reads pay +1 cycle on page cross.
    AbsoluteY,

    /// Indexed indirect: the operand plus X (wrapping in the zero page)
    /// names a little-endian pointer in page 0; the pointer's high byte
    /// is also fetched with zero-page wrap-around.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: the operand names a little-endian pointer in
    /// page 0 (high byte fetched with zero-page wrap-around); Y is added
    /// to the pointer. Reads pay +1 cycle on page cross.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}
