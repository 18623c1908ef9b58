//! Addressing-mode classification: the ordered pattern match over operand
//! text that decides which of the machine's addressing modes a line uses and
//! extracts its operand bytes.

use tracing::trace;

use crate::hex::{le_pair, parse_hex_token};
use crate::instruction::{AddressingMode, ParsedInstruction};
use crate::normalize::{normalize, NormalizedLine};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// A value exceeds what its addressing form can encode: one byte for
    /// immediate, indexed-indirect and indirect-indexed operands, two bytes
    /// for absolute and indirect addresses.
    #[error("value {value:#x} is out of range, at most {limit:#x} is allowed")]
    ValueTooWide { value: u32, limit: u32 },
    #[error("unsupported register {found:?}, only {expected} is supported here")]
    UnsupportedRegister {
        found: String,
        expected: &'static str,
    },
    #[error("unrecognized operand syntax {operand:?}")]
    UnrecognizedOperand { operand: String },
}

/// Classification error with the offending source line attached, for
/// reporting at the driver boundary.
#[derive(thiserror::Error, Debug)]
#[error("line {number}: {text:?}")]
pub struct LineError {
    pub number: usize,
    pub text: String,
    #[source]
    pub source: ClassifyError,
}

/// Parses one raw source line end to end. `Ok(None)` for blank lines.
pub fn parse_line(raw: &str) -> Result<Option<ParsedInstruction>, ClassifyError> {
    let Some(line) = normalize(raw) else {
        return Ok(None);
    };
    let instr = classify(&line)?;
    trace!(mnemonic = %instr.mnemonic, mode = ?instr.mode, "classified line");
    Ok(Some(instr))
}

/// Selects the addressing mode for a normalized line and extracts its
/// operand bytes. Rules are tried in order; patterns are mutually exclusive
/// by construction.
pub fn classify(line: &NormalizedLine) -> Result<ParsedInstruction, ClassifyError> {
    let Some(operand) = line.operand.as_deref() else {
        return Ok(ParsedInstruction::new(
            &line.mnemonic,
            AddressingMode::Implicit,
            vec![],
        ));
    };

    if operand == "A" {
        return Ok(ParsedInstruction::new(
            &line.mnemonic,
            AddressingMode::Accumulator,
            vec![],
        ));
    }

    if operand.starts_with('#') {
        return immediate(line, operand);
    }

    if operand.starts_with('$') {
        return match operand.split_once(',') {
            Some((address, register)) => indexed(line, operand, address, register),
            None => direct(line, operand),
        };
    }

    if operand.starts_with('(') && operand.ends_with(')') {
        let inner = &operand[1..operand.len() - 1];
        return match inner.split_once(',') {
            Some((address, register)) => indexed_indirect(line, operand, address, register),
            None => indirect(line, operand, inner),
        };
    }

    if operand.starts_with('(') {
        if let Some((address, register)) = operand.split_once(',') {
            return indirect_indexed(line, operand, address, register);
        }
    }

    Err(ClassifyError::UnrecognizedOperand {
        operand: operand.to_string(),
    })
}

/// `#$nn` — always exactly one byte; a 16-bit immediate is not a valid
/// encoding for this machine.
fn immediate(line: &NormalizedLine, operand: &str) -> Result<ParsedInstruction, ClassifyError> {
    let value = hex_value(operand, operand)?;
    if value > 0xFF {
        return Err(ClassifyError::ValueTooWide { value, limit: 0xFF });
    }
    Ok(ParsedInstruction::new(
        &line.mnemonic,
        AddressingMode::Immediate,
        vec![value as u8],
    ))
}

/// `$nn` / `$nnnn` — width is value-driven: above 0xFF the address takes the
/// two-byte absolute encoding, otherwise the one-byte zero-page encoding.
fn direct(line: &NormalizedLine, operand: &str) -> Result<ParsedInstruction, ClassifyError> {
    let value = hex_value(operand, operand)?;
    let (mode, operands) = widen(value, AddressingMode::ZeroPage, AddressingMode::Absolute)?;
    Ok(ParsedInstruction::new(&line.mnemonic, mode, operands))
}

/// `$nn,X` / `$nnnn,X` and the `Y` counterparts.
fn indexed(
    line: &NormalizedLine,
    operand: &str,
    address: &str,
    register: &str,
) -> Result<ParsedInstruction, ClassifyError> {
    let value = hex_value(operand, address)?;
    let (mode, operands) = match register {
        "X" => widen(value, AddressingMode::ZeroPageX, AddressingMode::AbsoluteX)?,
        "Y" => widen(value, AddressingMode::ZeroPageY, AddressingMode::AbsoluteY)?,
        other => {
            return Err(ClassifyError::UnsupportedRegister {
                found: other.to_string(),
                expected: "X or Y",
            })
        }
    };
    Ok(ParsedInstruction::new(&line.mnemonic, mode, operands))
}

/// `($nn,X)` — the pointer lives in zero page, so the address must fit one
/// byte and the register must be X.
fn indexed_indirect(
    line: &NormalizedLine,
    operand: &str,
    address: &str,
    register: &str,
) -> Result<ParsedInstruction, ClassifyError> {
    if register != "X" {
        return Err(ClassifyError::UnsupportedRegister {
            found: register.to_string(),
            expected: "X",
        });
    }
    let value = hex_value(operand, address)?;
    if value > 0xFF {
        return Err(ClassifyError::ValueTooWide { value, limit: 0xFF });
    }
    Ok(ParsedInstruction::new(
        &line.mnemonic,
        AddressingMode::IndexedIndirect,
        vec![value as u8],
    ))
}

/// `($nnnn)` — plain indirection through a pointer at the given address.
fn indirect(
    line: &NormalizedLine,
    operand: &str,
    inner: &str,
) -> Result<ParsedInstruction, ClassifyError> {
    let value = hex_value(operand, inner)?;
    if value > 0xFFFF {
        return Err(ClassifyError::ValueTooWide {
            value,
            limit: 0xFFFF,
        });
    }
    let operands = if value > 0xFF {
        le_pair(value).to_vec()
    } else {
        vec![value as u8]
    };
    Ok(ParsedInstruction::new(
        &line.mnemonic,
        AddressingMode::Indirect,
        operands,
    ))
}

/// `($nn),Y` — zero-page pointer, post-indexed by Y.
fn indirect_indexed(
    line: &NormalizedLine,
    operand: &str,
    address: &str,
    register: &str,
) -> Result<ParsedInstruction, ClassifyError> {
    if register != "Y" {
        return Err(ClassifyError::UnsupportedRegister {
            found: register.to_string(),
            expected: "Y",
        });
    }
    let value = hex_value(operand, address)?;
    if value > 0xFF {
        return Err(ClassifyError::ValueTooWide { value, limit: 0xFF });
    }
    Ok(ParsedInstruction::new(
        &line.mnemonic,
        AddressingMode::IndirectIndexed,
        vec![value as u8],
    ))
}

/// Picks the narrow one-byte or wide two-byte encoding for `value`. The
/// threshold is strictly above 0xFF; 0xFF itself stays narrow. Addresses
/// above 0xFFFF do not fit the two-byte form and are rejected.
fn widen(
    value: u32,
    narrow: AddressingMode,
    wide: AddressingMode,
) -> Result<(AddressingMode, Vec<u8>), ClassifyError> {
    if value > 0xFFFF {
        return Err(ClassifyError::ValueTooWide {
            value,
            limit: 0xFFFF,
        });
    }
    Ok(if value > 0xFF {
        (wide, le_pair(value).to_vec())
    } else {
        (narrow, vec![value as u8])
    })
}

fn hex_value(operand: &str, token: &str) -> Result<u32, ClassifyError> {
    parse_hex_token(token).ok_or_else(|| ClassifyError::UnrecognizedOperand {
        operand: operand.to_string(),
    })
}
