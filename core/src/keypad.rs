use log::debug;

use crate::constants::KEY_COUNT;

/// # Keypad
/// Latched state of the 16-key hexadecimal keypad.
///
/// The host writes it between cycles, instructions only read it.
/// ```text
/// |1|2|3|C|
/// |4|5|6|D|
/// |7|8|9|E|
/// |A|0|B|F|
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Keypad {
    keys: [bool; KEY_COUNT],
}

impl Keypad {
    pub fn new() -> Self {
        Keypad::default()
    }

    pub fn press(&mut self, key: u8) {
        self.set(key, true);
    }

    pub fn release(&mut self, key: u8) {
        self.set(key, false);
    }

    pub fn set_all(&mut self, keys: [bool; KEY_COUNT]) {
        self.keys = keys;
    }

    /// Only the low nibble of `key` is significant
    pub fn is_pressed(&self, key: u8) -> bool {
        self.keys[usize::from(key & 0xF)]
    }

    /// The lowest-numbered key currently held down
    pub fn first_pressed(&self) -> Option<u8> {
        self.keys.iter().position(|&k| k).map(|k| k as u8)
    }

    fn set(&mut self, key: u8, pressed: bool) {
        match self.keys.get_mut(usize::from(key)) {
            Some(k) => *k = pressed,
            None => debug!("ignoring out of range key {:#04X}", key),
        }
    }
}
