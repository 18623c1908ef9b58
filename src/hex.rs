//! Hex operand token parsing and byte splitting.

/// Punctuation that addressing syntax wraps around the numeral itself.
const OPERAND_PUNCT: &[char] = &['$', '#', '(', ')', ',', '.', 'X', 'Y', ';'];

/// Strips addressing punctuation from `token` and parses the remainder as a
/// base-16 numeral. No upper bound is enforced here; range checks belong to
/// the classifier and vary by addressing mode. Returns `None` when the
/// stripped text is not valid hex.
pub fn parse_hex_token(token: &str) -> Option<u32> {
    let digits: String = token.chars().filter(|c| !OPERAND_PUNCT.contains(c)).collect();
    u32::from_str_radix(&digits, 16).ok()
}

/// Splits a 16-bit address into the (low, high) byte pair the little-endian
/// encoder expects.
pub fn le_pair(value: u32) -> [u8; 2] {
    [(value & 0xFF) as u8, (value >> 8) as u8]
}
