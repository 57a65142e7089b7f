//! A line-oriented assembler for Chip-8 mnemonics.
//!
//! One instruction per line, operands separated by commas, `#` starts a
//! comment. Numbers are hexadecimal with or without a `0x` prefix:
//! ```text
//! ld v0, 05      # V0 = 5
//! add v0, 0x03
//! drw v0, v1, 5
//! ```

use thiserror::Error;

use crate::constants::ADDRESS_MASK;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("line {line}: {kind}")]
pub struct AsmError {
    pub line: usize,
    pub kind: AsmErrorKind,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AsmErrorKind {
    #[error("unknown mnemonic `{0}`")]
    UnknownMnemonic(String),

    #[error("`{mnemonic}` does not take {count} operand(s) of those kinds")]
    WrongOperands { mnemonic: String, count: usize },

    #[error("invalid operand `{0}`")]
    InvalidOperand(String),

    #[error("{value:#X} does not fit in {bits} bits")]
    OutOfRange { value: u32, bits: u32 },
}

/// Assembles a whole program into big-endian opcode bytes
pub fn assemble(source: &str) -> Result<Vec<u8>, AsmError> {
    let mut rom = Vec::new();
    for (n, line) in source.lines().enumerate() {
        let op = assemble_line(line).map_err(|kind| AsmError { line: n + 1, kind })?;
        if let Some(op) = op {
            rom.extend_from_slice(&op.to_be_bytes());
        }
    }
    Ok(rom)
}

/// Assembles a single line; blank and comment-only lines give `None`
pub fn assemble_line(line: &str) -> Result<Option<u16>, AsmErrorKind> {
    let code = line.split('#').next().unwrap_or("").trim().to_ascii_lowercase();
    if code.is_empty() {
        return Ok(None);
    }
    let (mnemonic, rest) = match code.find(char::is_whitespace) {
        Some(at) => code.split_at(at),
        None => (code.as_str(), ""),
    };
    let operands: Vec<&str> = rest
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    encode(mnemonic, &operands).map(Some)
}

fn register(token: &str) -> Option<u16> {
    let mut chars = token.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some('v'), Some(digit), None) => digit.to_digit(16).map(|d| d as u16),
        _ => None,
    }
}

fn vreg(token: &str) -> Result<u16, AsmErrorKind> {
    register(token).ok_or_else(|| AsmErrorKind::InvalidOperand(token.to_string()))
}

fn number(token: &str, bits: u32) -> Result<u16, AsmErrorKind> {
    let digits = token.strip_prefix("0x").unwrap_or(token);
    let value = u32::from_str_radix(digits, 16)
        .map_err(|_| AsmErrorKind::InvalidOperand(token.to_string()))?;
    if value >> bits != 0 {
        return Err(AsmErrorKind::OutOfRange { value, bits });
    }
    Ok(value as u16)
}

fn address(token: &str) -> Result<u16, AsmErrorKind> {
    number(token, 12).map(|a| a & ADDRESS_MASK)
}

fn encode(mnemonic: &str, ops: &[&str]) -> Result<u16, AsmErrorKind> {
    let wrong = || AsmErrorKind::WrongOperands {
        mnemonic: mnemonic.to_string(),
        count: ops.len(),
    };
    // `x` in the usual position, `x` and `y` for register pairs
    let xy = |base: u16| -> Result<u16, AsmErrorKind> {
        let y = register(ops[1]).ok_or_else(wrong)?;
        Ok(base | vreg(ops[0])? << 8 | y << 4)
    };
    let xkk = |base: u16| -> Result<u16, AsmErrorKind> {
        Ok(base | vreg(ops[0])? << 8 | number(ops[1], 8)?)
    };

    match (mnemonic, ops.len()) {
        ("cls", 0) => Ok(0x00E0),
        ("ret", 0) => Ok(0x00EE),
        ("sys", 1) => address(ops[0]),
        ("jp", 1) => Ok(0x1000 | address(ops[0])?),
        ("jp", 2) if ops[0] == "v0" => Ok(0xB000 | address(ops[1])?),
        ("call", 1) => Ok(0x2000 | address(ops[0])?),
        ("se", 2) if register(ops[1]).is_some() => xy(0x5000),
        ("se", 2) => xkk(0x3000),
        ("sne", 2) if register(ops[1]).is_some() => xy(0x9000),
        ("sne", 2) => xkk(0x4000),
        ("add", 2) if ops[0] == "i" => Ok(0xF01E | vreg(ops[1])? << 8),
        ("add", 2) if register(ops[1]).is_some() => xy(0x8004),
        ("add", 2) => xkk(0x7000),
        ("or", 2) => xy(0x8001),
        ("and", 2) => xy(0x8002),
        ("xor", 2) => xy(0x8003),
        ("sub", 2) => xy(0x8005),
        ("subn", 2) => xy(0x8007),
        ("shr", 1) => Ok(0x8006 | vreg(ops[0])? << 8),
        ("shr", 2) => xy(0x8006),
        ("shl", 1) => Ok(0x800E | vreg(ops[0])? << 8),
        ("shl", 2) => xy(0x800E),
        ("rnd", 2) => xkk(0xC000),
        ("drw", 3) => Ok(xy(0xD000)? | number(ops[2], 4)?),
        ("skp", 1) => Ok(0xE09E | vreg(ops[0])? << 8),
        ("sknp", 1) => Ok(0xE0A1 | vreg(ops[0])? << 8),
        ("ld", 2) => load(ops).ok_or_else(wrong)?,
        ("cls", _) | ("ret", _) | ("sys", _) | ("jp", _) | ("call", _) | ("se", _)
        | ("sne", _) | ("add", _) | ("or", _) | ("and", _) | ("xor", _) | ("sub", _)
        | ("subn", _) | ("shr", _) | ("shl", _) | ("rnd", _) | ("drw", _) | ("skp", _)
        | ("sknp", _) | ("ld", _) => Err(wrong()),
        _ => Err(AsmErrorKind::UnknownMnemonic(mnemonic.to_string())),
    }
}

/// The many shapes of `ld`, keyed on whichever side is a plain register
fn load(ops: &[&str]) -> Option<Result<u16, AsmErrorKind>> {
    let (dst, src) = (ops[0], ops[1]);
    if dst == "i" {
        return Some(address(src).map(|a| 0xA000 | a));
    }
    if let Some(x) = register(dst) {
        let x = x << 8;
        return Some(match src {
            "dt" => Ok(0xF007 | x),
            "k" => Ok(0xF00A | x),
            "[i]" => Ok(0xF065 | x),
            _ => match register(src) {
                Some(y) => Ok(0x8000 | x | y << 4),
                None => number(src, 8).map(|kk| 0x6000 | x | kk),
            },
        });
    }
    let x = register(src)? << 8;
    match dst {
        "dt" => Some(Ok(0xF015 | x)),
        "st" => Some(Ok(0xF018 | x)),
        "f" => Some(Ok(0xF029 | x)),
        "b" => Some(Ok(0xF033 | x)),
        "[i]" => Some(Ok(0xF055 | x)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruction::Instruction;

    fn op(line: &str) -> u16 {
        assemble_line(line).unwrap().unwrap()
    }

    #[test]
    fn test_skips_blank_and_comment_lines() {
        assert_eq!(assemble_line(""), Ok(None));
        assert_eq!(assemble_line("   # just a note"), Ok(None));
    }

    #[test]
    fn test_fixed_and_address_forms() {
        assert_eq!(op("cls"), 0x00E0);
        assert_eq!(op("RET"), 0x00EE);
        assert_eq!(op("jp 2a4"), 0x12A4);
        assert_eq!(op("jp v0, 0x300"), 0xB300);
        assert_eq!(op("call 0x208  # subroutine"), 0x2208);
        assert_eq!(op("sys 0"), 0x0000);
    }

    #[test]
    fn test_register_and_byte_forms() {
        assert_eq!(op("se v3, 4f"), 0x334F);
        assert_eq!(op("se v3, v4"), 0x5340);
        assert_eq!(op("sne va, 01"), 0x4A01);
        assert_eq!(op("sne va, vb"), 0x9AB0);
        assert_eq!(op("add v1, 2"), 0x7102);
        assert_eq!(op("add v1, v2"), 0x8124);
        assert_eq!(op("add i, ve"), 0xFE1E);
        assert_eq!(op("subn v1, vf"), 0x81F7);
        assert_eq!(op("shr v6"), 0x8606);
        assert_eq!(op("shl v6, v7"), 0x867E);
        assert_eq!(op("rnd v0, ff"), 0xC0FF);
        assert_eq!(op("drw v0, v1, f"), 0xD01F);
        assert_eq!(op("sknp v9"), 0xE9A1);
    }

    #[test]
    fn test_load_forms() {
        assert_eq!(op("ld i, 050"), 0xA050);
        assert_eq!(op("ld v2, 0x2a"), 0x622A);
        assert_eq!(op("ld v2, b"), 0x620B);
        assert_eq!(op("ld v2, v3"), 0x8230);
        assert_eq!(op("ld v2, dt"), 0xF207);
        assert_eq!(op("ld v2, k"), 0xF20A);
        assert_eq!(op("ld v2, [i]"), 0xF265);
        assert_eq!(op("ld dt, v2"), 0xF215);
        assert_eq!(op("ld st, v2"), 0xF218);
        assert_eq!(op("ld f, v2"), 0xF229);
        assert_eq!(op("ld b, v2"), 0xF233);
        assert_eq!(op("ld [i], v2"), 0xF255);
    }

    #[test]
    fn test_output_decodes_to_the_named_instruction() {
        assert_eq!(
            Instruction::decode(op("drw v4, v5, 3")),
            Instruction::Draw { x: 4, y: 5, n: 3 }
        );
        assert_eq!(
            Instruction::decode(op("ld b, vc")),
            Instruction::StoreBcd { x: 0xC }
        );
    }

    #[test]
    fn test_assemble_program() {
        let rom = assemble("ld v0, 05\n\n# bump it\nadd v0, 03\n").unwrap();
        assert_eq!(rom, vec![0x60, 0x05, 0x70, 0x03]);
    }

    #[test]
    fn test_errors_carry_line_numbers() {
        let err = assemble("cls\nmov v0, v1\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.kind, AsmErrorKind::UnknownMnemonic("mov".to_string()));
    }

    #[test]
    fn test_rejects_bad_operands() {
        assert_eq!(
            assemble_line("ld v0, 100"),
            Err(AsmErrorKind::OutOfRange {
                value: 0x100,
                bits: 8
            })
        );
        assert_eq!(
            assemble_line("jp 1000"),
            Err(AsmErrorKind::OutOfRange {
                value: 0x1000,
                bits: 12
            })
        );
        assert_eq!(
            assemble_line("or v0, 12"),
            Err(AsmErrorKind::WrongOperands {
                mnemonic: "or".to_string(),
                count: 2
            })
        );
        assert_eq!(
            assemble_line("ld dt, 3"),
            Err(AsmErrorKind::WrongOperands {
                mnemonic: "ld".to_string(),
                count: 2
            })
        );
        assert_eq!(
            assemble_line("cls v0"),
            Err(AsmErrorKind::WrongOperands {
                mnemonic: "cls".to_string(),
                count: 1
            })
        );
        assert_eq!(
            assemble_line("skp x1"),
            Err(AsmErrorKind::InvalidOperand("x1".to_string()))
        );
    }
}
