/// A raw source line reduced to its mnemonic and joined operand text.
/// `operand` is `None` when the line holds the mnemonic alone, which is the
/// null-operand (Implicit) case rather than a numeric zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedLine {
    pub mnemonic: String,
    pub operand: Option<String>,
}

/// Trims and uppercases `raw`, then splits it into mnemonic and operand
/// text. Operand tokens are rejoined with spaces removed since addressing
/// syntax carries no significant internal whitespace. Blank lines yield
/// `None`.
pub fn normalize(raw: &str) -> Option<NormalizedLine> {
    let line = raw.trim().to_uppercase();
    let mut tokens = line.split_whitespace();
    let mnemonic = tokens.next()?.to_string();
    let operand: String = tokens.collect();
    Some(NormalizedLine {
        mnemonic,
        operand: (!operand.is_empty()).then_some(operand),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercases_and_trims() {
        let n = normalize("  lda #$41  ").unwrap();
        assert_eq!(n.mnemonic, "LDA");
        assert_eq!(n.operand.as_deref(), Some("#$41"));
    }

    #[test]
    fn lone_mnemonic_has_no_operand() {
        let n = normalize("brk").unwrap();
        assert_eq!(n.mnemonic, "BRK");
        assert_eq!(n.operand, None);
    }

    #[test]
    fn operand_tokens_rejoin_without_spaces() {
        let n = normalize("sta ( $40 ) , y").unwrap();
        assert_eq!(n.operand.as_deref(), Some("($40),Y"));
    }

    #[test]
    fn blank_line_is_skipped() {
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize(""), None);
    }
}
