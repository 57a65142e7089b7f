/// Bytes of addressable memory; addresses are 12 bits wide
pub const MEMORY_SIZE: usize = 0x1000;

/// pc and I-relative addresses wrap within 12 bits
pub const ADDRESS_MASK: u16 = 0x0FFF;

/// Where ROMs are copied to and where execution begins
pub const ROM_OFFSET: usize = 0x200;

/// The largest ROM that fits between `ROM_OFFSET` and the end of memory
pub const MAX_ROM_SIZE: usize = MEMORY_SIZE - ROM_OFFSET;

/// Where the built-in hexadecimal font lives in memory
pub const FONT_OFFSET: usize = 0x050;

/// Each font glyph is 5 rows of 8 pixels
pub const GLYPH_SIZE: usize = 5;

pub const FONT_SIZE: usize = GLYPH_SIZE * 16;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Return addresses the call stack can hold before overflowing
pub const STACK_SIZE: usize = 16;

pub const REGISTER_COUNT: usize = 16;
pub const KEY_COUNT: usize = 16;

/// Index of the register doubling as the carry/borrow/collision flag
pub const FLAG_REGISTER: usize = 0xF;

/// Nanoseconds per CPU cycle, i.e. a 500Hz clock
pub const CLOCK_SPEED: u64 = 2_000_000;

/// The delay and sound timers count down at 60Hz on real hardware
pub const TIMER_FREQUENCY: u64 = 60;

/// # Sprite Sheet
/// Glyphs for the hexadecimal digits 0..F, each 5 bytes tall.
///
/// Only the high nibble of each byte is used, e.g. the glyph for `0`:
/// ```text
/// 0xF0  ****
/// 0x90  *  *
/// 0x90  *  *
/// 0x90  *  *
/// 0xF0  ****
/// ```
pub const SPRITE_SHEET: [u8; FONT_SIZE] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
