use crate::instruction::{AddressingMode, ParsedInstruction};

/// Formats a parsed instruction back into canonical operand syntax.
pub fn fmt_instruction(instr: &ParsedInstruction) -> String {
    let mn = &instr.mnemonic;
    match instr.mode {
        AddressingMode::Implicit => mn.clone(),
        AddressingMode::Accumulator => format!("{mn} A"),
        AddressingMode::Immediate => format!("{mn} #${:02X}", byte(instr)),
        AddressingMode::ZeroPage => format!("{mn} ${:02X}", byte(instr)),
        AddressingMode::ZeroPageX => format!("{mn} ${:02X},X", byte(instr)),
        AddressingMode::ZeroPageY => format!("{mn} ${:02X},Y", byte(instr)),
        AddressingMode::Relative => format!("{mn} *{:+}", byte(instr) as i8),
        AddressingMode::Absolute => format!("{mn} ${:04X}", word(instr)),
        AddressingMode::AbsoluteX => format!("{mn} ${:04X},X", word(instr)),
        AddressingMode::AbsoluteY => format!("{mn} ${:04X},Y", word(instr)),
        AddressingMode::Indirect => match instr.operands.len() {
            2 => format!("{mn} (${:04X})", word(instr)),
            _ => format!("{mn} (${:02X})", byte(instr)),
        },
        AddressingMode::IndexedIndirect => format!("{mn} (${:02X},X)", byte(instr)),
        AddressingMode::IndirectIndexed => format!("{mn} (${:02X}),Y", byte(instr)),
    }
}

fn byte(instr: &ParsedInstruction) -> u8 {
    instr.operands.first().copied().unwrap_or(0)
}

fn word(instr: &ParsedInstruction) -> u16 {
    match instr.operands.as_slice() {
        [lo, hi, ..] => u16::from_le_bytes([*lo, *hi]),
        [lo] => *lo as u16,
        [] => 0,
    }
}
