use crate::constants::STACK_SIZE;

/// # Call Stack
/// Holds return addresses pushed by CALL and popped by RET.
///
/// Kept apart from main memory so a deep call chain can never clobber ROM data.
#[derive(Copy, Clone, Debug)]
pub struct Stack {
    entries: [u16; STACK_SIZE],
    len: usize,
}

impl Stack {
    pub fn new() -> Self {
        Stack {
            entries: [0; STACK_SIZE],
            len: 0,
        }
    }

    /// Pushes a return address; hands it back if the stack is already full
    pub fn push(&mut self, addr: u16) -> Result<(), u16> {
        if self.len == STACK_SIZE {
            return Err(addr);
        }
        self.entries[self.len] = addr;
        self.len += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Option<u16> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(self.entries[self.len])
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Live return addresses, oldest first
    pub fn as_slice(&self) -> &[u16] {
        &self.entries[..self.len]
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}
