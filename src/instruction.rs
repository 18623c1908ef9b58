use serde::{Deserialize, Serialize};

/// How an instruction locates its operand. One variant is selected per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressingMode {
    Implicit,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    /// Branch offsets. Declared for completeness; never produced by the
    /// classifier since branch targets need symbol resolution upstream.
    Relative,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    /// `($nn,X)`
    IndexedIndirect,
    /// `($nn),Y`
    IndirectIndexed,
}

/// One classified source line: mnemonic, addressing mode, and the operand
/// bytes in the order the encoder emits them (low byte first for 16-bit
/// forms). Built fresh per line, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedInstruction {
    pub mnemonic: String,
    pub mode: AddressingMode,
    pub operands: Vec<u8>,
}

impl ParsedInstruction {
    pub fn new(mnemonic: &str, mode: AddressingMode, operands: Vec<u8>) -> Self {
        Self {
            mnemonic: mnemonic.to_string(),
            mode,
            operands,
        }
    }
}
