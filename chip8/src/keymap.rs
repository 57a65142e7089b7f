use std::time::{Duration, Instant};

use emu8_core::constants::KEY_COUNT;

/// # Keymap
/// Chip-8 input is generated with a hexadecimal keypad.
///
/// This original layout is mapped to the left 4 alphanumeric columns.
/// ```text
/// |1|2|3|C|      |1|2|3|4|
/// |4|5|6|D|  ->  |Q|W|E|R|
/// |7|8|9|E|  ->  |A|S|D|F|
/// |A|0|B|F|      |Z|X|C|V|
/// ```
pub fn keymap(key: char) -> Option<u8> {
    match key.to_ascii_lowercase() {
        'x' => Some(0x0),
        '1' => Some(0x1),
        '2' => Some(0x2),
        '3' => Some(0x3),
        'q' => Some(0x4),
        'w' => Some(0x5),
        'e' => Some(0x6),
        'a' => Some(0x7),
        's' => Some(0x8),
        'd' => Some(0x9),
        'z' => Some(0xA),
        'c' => Some(0xB),
        '4' => Some(0xC),
        'r' => Some(0xD),
        'f' => Some(0xE),
        'v' => Some(0xF),
        _ => None,
    }
}

/// The same layout for SDL2 keycodes
#[cfg(feature = "sdl")]
pub fn sdl_keymap(key: sdl2::keyboard::Keycode) -> Option<u8> {
    use sdl2::keyboard::Keycode;

    match key {
        Keycode::X => Some(0x0),
        Keycode::Num1 => Some(0x1),
        Keycode::Num2 => Some(0x2),
        Keycode::Num3 => Some(0x3),
        Keycode::Q => Some(0x4),
        Keycode::W => Some(0x5),
        Keycode::E => Some(0x6),
        Keycode::A => Some(0x7),
        Keycode::S => Some(0x8),
        Keycode::D => Some(0x9),
        Keycode::Z => Some(0xA),
        Keycode::C => Some(0xB),
        Keycode::Num4 => Some(0xC),
        Keycode::R => Some(0xD),
        Keycode::F => Some(0xE),
        Keycode::V => Some(0xF),
        _ => None,
    }
}

/// # Key Latch
/// Most terminals report key presses and repeats but never releases, so a
/// key is held for `hold` after its last press and then let go.
pub struct KeyLatch {
    hold: Duration,
    pressed_at: [Option<Instant>; KEY_COUNT],
}

impl KeyLatch {
    pub fn new(hold: Duration) -> Self {
        KeyLatch {
            hold,
            pressed_at: [None; KEY_COUNT],
        }
    }

    pub fn press(&mut self, key: u8, now: Instant) {
        if let Some(slot) = self.pressed_at.get_mut(usize::from(key)) {
            *slot = Some(now);
        }
    }

    /// For terminals that do report releases
    pub fn release(&mut self, key: u8) {
        if let Some(slot) = self.pressed_at.get_mut(usize::from(key)) {
            *slot = None;
        }
    }

    /// Which keys still count as held at `now`
    pub fn keys(&mut self, now: Instant) -> [bool; KEY_COUNT] {
        let hold = self.hold;
        let mut keys = [false; KEY_COUNT];
        for (key, slot) in keys.iter_mut().zip(self.pressed_at.iter_mut()) {
            match *slot {
                Some(at) if now.duration_since(at) < hold => *key = true,
                _ => *slot = None,
            }
        }
        keys
    }
}
