/// # Opcodes
///
/// Every instruction is one big-endian 16-bit word. The high nibble picks the
/// instruction family; the rest of the word is either more selector bits or
/// operands, laid out in a handful of fixed shapes:
/// ```text
/// |o|x|y|n|   register pair plus a 4-bit selector or sprite height
/// |o|x|k k|   register and an 8-bit immediate
/// |o|a d r|   12-bit address
/// ```
/// Decoding reads whichever fields a shape uses and ignores the others.
pub trait Opcode {
    /// All four nibbles, high to low; what the decoder matches on.
    fn nibbles(&self) -> (u8, u8, u8, u8);

    /// Register operand `[_x__]`, also the upper bound of Fx55/Fx65 ranges.
    fn x(&self) -> u8;

    /// Second register operand `[__y_]`.
    fn y(&self) -> u8;

    /// `[___n]`: sprite height for Dxyn, selector for 8xyn.
    fn n(&self) -> u8;

    /// Immediate byte `[__kk]`.
    fn kk(&self) -> u8;

    /// Address `[_adr]`, always within the 12-bit address space.
    fn addr(&self) -> u16;
}

fn nibble(word: u16, shift: u16) -> u8 {
    ((word >> shift) & 0xF) as u8
}

impl Opcode for u16 {
    fn nibbles(&self) -> (u8, u8, u8, u8) {
        (nibble(*self, 12), self.x(), self.y(), self.n())
    }

    fn x(&self) -> u8 {
        nibble(*self, 8)
    }

    fn y(&self) -> u8 {
        nibble(*self, 4)
    }

    fn n(&self) -> u8 {
        nibble(*self, 0)
    }

    fn kk(&self) -> u8 {
        self.to_be_bytes()[1]
    }

    fn addr(&self) -> u16 {
        self & 0x0FFF
    }
}

/// Combines the two bytes at pc and pc+1 into an opcode.
pub fn fetch(high: u8, low: u8) -> u16 {
    u16::from_be_bytes([high, low])
}

#[cfg(test)]
mod test_opcode {
    use super::*;

    #[test]
    fn test_fetch_is_big_endian() {
        assert_eq!(fetch(0xAA, 0xBB), 0xAABB);
    }

    #[test]
    fn test_nibbles() {
        let op: u16 = 0xABCD;
        assert_eq!(op.nibbles(), (0xA, 0xB, 0xC, 0xD));
    }

    #[test]
    fn test_operands() {
        let op: u16 = 0x1E2F;
        assert_eq!((op.x(), op.y(), op.n()), (0xE, 0x2, 0xF));
    }

    #[test]
    fn test_kk() {
        let op: u16 = 0xABCD;
        assert_eq!(op.kk(), 0xCD);
    }

    #[test]
    fn test_addr() {
        let op: u16 = 0xABCD;
        assert_eq!(op.addr(), 0x0BCD);
    }
}
