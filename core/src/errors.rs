use std::io;

use thiserror::Error;

/// Faults surfaced by the machine to whoever is driving it.
///
/// Unknown opcodes are deliberately absent: they execute as no-ops.
#[derive(Debug, Error)]
pub enum Chip8Error {
    #[error("stack overflow: CALL at {pc:#05X} with a full call stack")]
    StackOverflow { pc: u16 },

    #[error("stack underflow: RET at {pc:#05X} with an empty call stack")]
    StackUnderflow { pc: u16 },

    #[error("ROM is too large ({size} bytes), max size is {max} bytes")]
    RomTooLarge { size: usize, max: usize },

    #[error("unable to read ROM: {0}")]
    InvalidFile(#[from] io::Error),
}

impl Chip8Error {
    /// Address of the instruction that faulted, if the fault came from execution
    pub fn pc(&self) -> Option<u16> {
        match self {
            Chip8Error::StackOverflow { pc } | Chip8Error::StackUnderflow { pc } => Some(*pc),
            _ => None,
        }
    }
}
