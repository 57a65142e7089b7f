use std::ops::Range;

use log::warn;

use crate::constants::{
    ADDRESS_MASK, FONT_OFFSET, FONT_SIZE, MAX_ROM_SIZE, MEMORY_SIZE, SPRITE_SHEET,
};
use crate::errors::Chip8Error;

/// # Memory
/// 4096 bytes addressed with 12 bits.
///
/// ```text
/// 0x000 - 0x04F  unused (historically the interpreter itself)
/// 0x050 - 0x09F  font sprite sheet, read-only once written
/// 0x0A0 - 0x1FF  unused
/// 0x200 - 0xFFF  ROM and program data
/// ```
///
/// Addresses wider than 12 bits wrap around instead of faulting, so an index
/// register pushed past 0xFFF by `Fx1E` still reads and writes inside memory.
#[derive(Clone)]
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    pub fn new() -> Self {
        let mut bytes = [0; MEMORY_SIZE];
        bytes[FONT_OFFSET..FONT_OFFSET + FONT_SIZE].copy_from_slice(&SPRITE_SHEET);
        Memory { bytes }
    }

    pub fn read(&self, addr: u16) -> u8 {
        self.bytes[usize::from(addr & ADDRESS_MASK)]
    }

    /// Writes a byte unless it would land in the font region
    pub fn write(&mut self, addr: u16, byte: u8) {
        let addr = usize::from(addr & ADDRESS_MASK);
        if Memory::is_font(addr) {
            warn!("ignoring write of {:#04X} to font region at {:#05X}", byte, addr);
            return;
        }
        self.bytes[addr] = byte;
    }

    /// Reads `len` consecutive bytes starting at `addr`, wrapping at the end of memory
    pub fn read_from(&self, addr: u16, len: usize) -> Vec<u8> {
        (0..len)
            .map(|offset| self.read(addr.wrapping_add(offset as u16)))
            .collect()
    }

    /// Read-only view of a range of memory, clamped to the address space
    pub fn slice(&self, range: Range<usize>) -> &[u8] {
        let end = range.end.min(MEMORY_SIZE);
        let start = range.start.min(end);
        &self.bytes[start..end]
    }

    /// Copies `data` verbatim into memory starting at `offset`
    pub fn load(&mut self, offset: usize, data: &[u8]) -> Result<(), Chip8Error> {
        if data.len() > MAX_ROM_SIZE || offset + data.len() > MEMORY_SIZE {
            return Err(Chip8Error::RomTooLarge {
                size: data.len(),
                max: MEMORY_SIZE.saturating_sub(offset),
            });
        }
        self.bytes[offset..offset + data.len()].copy_from_slice(data);
        Ok(())
    }

    fn is_font(addr: usize) -> bool {
        (FONT_OFFSET..FONT_OFFSET + FONT_SIZE).contains(&addr)
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
