use pretty_assertions::assert_eq;

use sasm6502::classify::LineError;
use sasm6502::{parse_line, AddressingMode, ClassifyError};

fn fail(line: &str) -> ClassifyError {
    parse_line(line).expect_err("line should be rejected")
}

#[test]
fn oversized_immediate_is_a_range_error() {
    assert_eq!(
        fail("LDA #$1FF"),
        ClassifyError::ValueTooWide {
            value: 0x1FF,
            limit: 0xFF,
        }
    );
}

#[test]
fn indexed_indirect_address_must_fit_one_byte() {
    assert_eq!(
        fail("LDA ($140,X)"),
        ClassifyError::ValueTooWide {
            value: 0x140,
            limit: 0xFF,
        }
    );
    assert_eq!(
        fail("LDA ($140),Y"),
        ClassifyError::ValueTooWide {
            value: 0x140,
            limit: 0xFF,
        }
    );
}

#[test]
fn addresses_must_fit_two_bytes() {
    for line in ["LDA $12345", "STA $12345,X", "LDX $12345,Y", "JMP ($12345)"] {
        assert_eq!(
            fail(line),
            ClassifyError::ValueTooWide {
                value: 0x12345,
                limit: 0xFFFF,
            },
            "{line}"
        );
    }
    // 0xFFFF itself is the widest encodable address
    let top = parse_line("LDA $FFFF").unwrap().unwrap();
    assert_eq!(top.mode, AddressingMode::Absolute);
    assert_eq!(top.operands, vec![0xFF, 0xFF]);
}

#[test]
fn indexed_register_must_be_x_or_y() {
    assert_eq!(
        fail("STA $40,Z"),
        ClassifyError::UnsupportedRegister {
            found: "Z".to_string(),
            expected: "X or Y",
        }
    );
}

#[test]
fn indexed_indirect_only_takes_x() {
    assert_eq!(
        fail("LDA ($40,Y)"),
        ClassifyError::UnsupportedRegister {
            found: "Y".to_string(),
            expected: "X",
        }
    );
}

#[test]
fn indirect_indexed_only_takes_y() {
    assert_eq!(
        fail("LDA ($40),X"),
        ClassifyError::UnsupportedRegister {
            found: "X".to_string(),
            expected: "Y",
        }
    );
}

#[test]
fn unknown_syntax_is_an_explicit_error() {
    assert_eq!(
        fail("LDA %101"),
        ClassifyError::UnrecognizedOperand {
            operand: "%101".to_string(),
        }
    );
    assert_eq!(
        fail("LDA $GG"),
        ClassifyError::UnrecognizedOperand {
            operand: "$GG".to_string(),
        }
    );
}

#[test]
fn line_error_names_the_offending_line() {
    let err = LineError {
        number: 3,
        text: "LDA #$1FF".to_string(),
        source: ClassifyError::ValueTooWide {
            value: 0x1FF,
            limit: 0xFF,
        },
    };
    assert_eq!(err.to_string(), "line 3: \"LDA #$1FF\"");
    assert_eq!(
        std::error::Error::source(&err).map(ToString::to_string),
        Some("value 0x1ff is out of range, at most 0xff is allowed".to_string())
    );
}
